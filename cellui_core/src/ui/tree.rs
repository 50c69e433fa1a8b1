//! The widget tree that manages all the widget components.

use crate::evloop::{Event, EventSource};
use crate::inode_enum_dispatcher;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::Theme;
use crate::ui::widget::*;
use crate::widget_enum_dispatcher;

use crossterm::style::Color;

pub use internal::*;

pub mod internal;

#[derive(Debug, Clone)]
/// The value holder for each widget.
pub enum TreeNode {
  Container(Container),
  Window(Window),
  Layout(Layout),
  Button(Button),
  Label(Label),
  Panel(Panel),
  Image(Image),
  ProgressBar(ProgressBar),
  Slider(Slider),
  Switch(Switch),
  ComboBox(ComboBox),
  ScrollBar(ScrollBar),
  TextBox(TextBox),
  CodeView(CodeView),
  TreeView(TreeView),
  ColorSelector(ColorSelector),
  Chart(Chart),
  Input(Input),
  InputField(InputField),
}

macro_rules! tree_node_variants {
  ($($variant:ident),*) => {
    inode_enum_dispatcher!(TreeNode, $($variant),*);
    widget_enum_dispatcher!(TreeNode, $($variant),*);

    paste! {
      impl TreeNode {
        $(
          pub fn [<$variant:snake>](&self) -> Option<&$variant> {
            match self {
              TreeNode::$variant(w) => Some(w),
              _ => None,
            }
          }

          pub fn [<$variant:snake _mut>](&mut self) -> Option<&mut $variant> {
            match self {
              TreeNode::$variant(w) => Some(w),
              _ => None,
            }
          }
        )*
      }
    }

    $(
      impl From<$variant> for TreeNode {
        fn from(value: $variant) -> Self {
          TreeNode::$variant(value)
        }
      }
    )*
  };
}

tree_node_variants!(
  Container,
  Window,
  Layout,
  Button,
  Label,
  Panel,
  Image,
  ProgressBar,
  Slider,
  Switch,
  ComboBox,
  ScrollBar,
  TextBox,
  CodeView,
  TreeView,
  ColorSelector,
  Chart,
  Input,
  InputField
);

impl TreeNode {
  /// Whether the node can have children.
  pub fn is_container(&self) -> bool {
    matches!(
      self,
      TreeNode::Container(_) | TreeNode::Window(_) | TreeNode::Layout(_)
    )
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// What the application callback wants the outer loop to do next.
pub enum Flow {
  Continue,
  /// Redraw the whole tree, e.g. the callback changed some widgets.
  Redraw,
  Exit,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// The result of dispatching one event.
pub struct Dispatched {
  /// Whether some node consumed the (pointer) event.
  pub handled: bool,
  pub notices: Vec<Notice>,
}

#[derive(Debug, Clone)]
/// The widget tree (UI tree).
///
/// The widget tree manages all UI widgets and rendering on the canvas, each widget is a
/// node on the tree, the tree has a root node, and all other nodes inside is the root
/// node's descendants. The root node is the whole screen.
///
/// # Ownership
///
/// Parent owns its children:
///
/// * Children will be destroyed when their parent is.
/// * Children are positioned relative to their parent, and clipped by their parent's
///   boundaries when drawing and hit-testing.
///
/// # Priority
///
/// Children are painted in insertion order, the later one covers the earlier one. For
/// pointer events, children are hit-tested in the reversed order, thus the front-most
/// child has the highest priority to process the event. A container's own handler runs
/// after its children, it observes the events whether or not a child consumed them.
pub struct Tree {
  base: Itree<TreeNode>,

  // The window in dragging, drag/drop events are routed to it directly.
  focused_window: Option<TreeNodeId>,
  // Serial number of the last event processed by a window handler.
  focused_window_event: Option<u64>,
  // Serial number of the last dispatched event.
  event_serial: u64,
}

impl Tree {
  /// Make a tree with a root container in the screen size.
  ///
  /// The root clears the screen with terminal default colors on every draw.
  pub fn new(size: USize) -> Self {
    let mut root = Container::new(xywh(
      0,
      0,
      size.width() as isize,
      size.height() as isize,
    ));
    root.set_background(Some(Color::Reset));
    Tree::with_root(root.into())
  }

  /// Make a tree with a custom root node.
  pub fn with_root(root: TreeNode) -> Self {
    Tree {
      base: Itree::new(root),
      focused_window: None,
      focused_window_event: None,
      event_serial: 0,
    }
  }

  // Node {

  pub fn len(&self) -> usize {
    self.base.len()
  }

  pub fn is_empty(&self) -> bool {
    self.base.is_empty()
  }

  pub fn root_id(&self) -> TreeNodeId {
    self.base.root_id()
  }

  pub fn contains(&self, id: TreeNodeId) -> bool {
    self.base.contains(id)
  }

  pub fn parent_id(&self, id: TreeNodeId) -> Option<TreeNodeId> {
    self.base.parent_id(id)
  }

  pub fn children_ids(&self, id: TreeNodeId) -> Option<&Vec<TreeNodeId>> {
    self.base.children_ids(id)
  }

  pub fn node(&self, id: TreeNodeId) -> Option<&TreeNode> {
    self.base.node(id)
  }

  pub fn node_mut(&mut self, id: TreeNodeId) -> Option<&mut TreeNode> {
    self.base.node_mut(id)
  }

  /// Pre-order iterator, in paint order.
  pub fn iter(&self) -> ItreeIter<'_, TreeNode> {
    self.base.iter()
  }

  /// The window currently in dragging.
  pub fn focused_window(&self) -> Option<TreeNodeId> {
    self.focused_window.filter(|id| self.base.contains(*id))
  }

  /// Insert a node as the front-most child of a container.
  ///
  /// # Errors
  ///
  /// If the parent doesn't exist, or it is not a container.
  pub fn insert<T: Into<TreeNode>>(
    &mut self,
    parent_id: TreeNodeId,
    node: T,
  ) -> UiResult<TreeNodeId> {
    match self.base.node(parent_id) {
      Some(parent) if parent.is_container() => {}
      Some(_) => return Err(UiErr::NotContainer(parent_id)),
      None => return Err(UiErr::NodeNotFound(parent_id)),
    }
    self.base.insert(parent_id, node.into())
  }

  /// Remove a node and its whole subtree.
  pub fn remove(&mut self, id: TreeNodeId) -> UiResult<TreeNode> {
    if id == self.base.root_id() {
      return Err(UiErr::RootNode(id));
    }
    let parent_id = self.base.parent_id(id);
    let node = self.base.remove(id).ok_or(UiErr::NodeNotFound(id))?;
    if let Some(layout) = parent_id
      .and_then(|p| self.base.node_mut(p))
      .and_then(|p| p.layout_mut())
    {
      layout.forget(id);
    }
    if self.focused_window.is_some_and(|w| !self.base.contains(w)) {
      self.focused_window = None;
    }
    Ok(node)
  }

  /// Set the local shape of a node, the actual shapes of its subtree are updated as well.
  pub fn set_shape(&mut self, id: TreeNodeId, shape: IRect) -> UiResult<()> {
    let node = self.base.node_mut(id).ok_or(UiErr::NodeNotFound(id))?;
    node.set_shape(shape);
    self.base.update_actual_shapes(id);
    Ok(())
  }

  pub fn set_hidden(&mut self, id: TreeNodeId, value: bool) -> UiResult<()> {
    let node = self.base.node_mut(id).ok_or(UiErr::NodeNotFound(id))?;
    node.set_hidden(value);
    Ok(())
  }

  pub fn set_disabled(&mut self, id: TreeNodeId, value: bool) -> UiResult<()> {
    let node = self.base.node_mut(id).ok_or(UiErr::NodeNotFound(id))?;
    node.set_disabled(value);
    Ok(())
  }

  /// Assign a child of a layout to a grid cell.
  pub fn set_cell_position(
    &mut self,
    layout_id: TreeNodeId,
    child_id: TreeNodeId,
    column: usize,
    row: usize,
  ) -> UiResult<()> {
    if self.base.parent_id(child_id) != Some(layout_id) {
      return Err(UiErr::NotAChild {
        parent: layout_id,
        child: child_id,
      });
    }
    let layout = self
      .base
      .node_mut(layout_id)
      .ok_or(UiErr::NodeNotFound(layout_id))?
      .layout_mut()
      .ok_or_else(|| {
        UiErr::InvalidGrid(format!("node {} is not a layout", layout_id))
      })?;
    layout.set_position(child_id, column, row)
  }

  /// Insert the close/minimize/maximize buttons to the top-left corner of a window.
  ///
  /// Returns the buttons IDs.
  pub fn insert_window_actions(
    &mut self,
    window_id: TreeNodeId,
    theme: &Theme,
  ) -> UiResult<[TreeNodeId; 3]> {
    let actions = [
      (WindowAction::Close, theme.window.close),
      (WindowAction::Minimize, theme.window.minimize),
      (WindowAction::Maximize, theme.window.maximize),
    ];
    let mut ids = [0; 3];
    for (i, (action, color)) in actions.into_iter().enumerate() {
      let mut button = Button::new(xywh(i as isize * 2, 0, 1, 1), "●", theme);
      button.set_colors(None, Some(color));
      button.set_window_action(Some(action));
      ids[i] = self.insert(window_id, button)?;
    }
    Ok(ids)
  }

  // Node }

  // Z-order {

  pub fn index_of(&self, id: TreeNodeId) -> Option<usize> {
    self.base.index_of(id)
  }

  pub fn move_to_front(&mut self, id: TreeNodeId) -> UiResult<()> {
    self.base.move_to_front(id)
  }

  pub fn move_to_back(&mut self, id: TreeNodeId) -> UiResult<()> {
    self.base.move_to_back(id)
  }

  pub fn move_forward(&mut self, id: TreeNodeId) -> UiResult<()> {
    self.base.move_forward(id)
  }

  pub fn move_backward(&mut self, id: TreeNodeId) -> UiResult<()> {
    self.base.move_backward(id)
  }

  // Z-order }

  // Draw {

  /// Draw the whole tree.
  ///
  /// Every container narrows the draw limit to its bounds while its subtree is drawn, and
  /// restores it afterward (also on error). The actual shapes of all visible nodes are
  /// recomputed from their local shapes, and the layouts are solved.
  pub fn draw(&mut self, canvas: &mut dyn Compositor) -> UiResult<()> {
    let root_id = self.base.root_id();
    if let Some(root) = self.base.node_mut(root_id) {
      if root.hidden() {
        return Ok(());
      }
      let shape = *root.shape();
      root.set_actual_shape(shape);
    }
    self.draw_container(root_id, canvas)
  }

  fn draw_container(
    &mut self,
    id: TreeNodeId,
    canvas: &mut dyn Compositor,
  ) -> UiResult<()> {
    let actual = match self.base.node(id) {
      Some(node) => *node.actual_shape(),
      None => return Ok(()),
    };
    let limit = canvas.draw_limit();
    let clip = match limit.intersect(&actual) {
      Some(clip) => clip,
      None => return Ok(()),
    };
    canvas.set_draw_limit(clip);
    let result = self.draw_subtree(id, actual, canvas);
    canvas.set_draw_limit(limit);
    result
  }

  fn draw_subtree(
    &mut self,
    id: TreeNodeId,
    actual: IRect,
    canvas: &mut dyn Compositor,
  ) -> UiResult<()> {
    self.solve_layout(id)?;
    if let Some(node) = self.base.node_mut(id) {
      node.draw(canvas);
    }

    let children_ids = self.base.children_ids(id).cloned().unwrap_or_default();
    for child_id in children_ids {
      let child = match self.base.node_mut(child_id) {
        Some(child) => child,
        None => continue,
      };
      if child.hidden() {
        continue;
      }
      let child_actual = shapes::make_actual_shape(child.shape(), &actual);
      child.set_actual_shape(child_actual);
      if child.is_container() {
        self.draw_container(child_id, canvas)?;
      } else {
        child.draw(canvas);
      }
    }
    Ok(())
  }

  fn solve_layout(&mut self, id: TreeNodeId) -> UiResult<()> {
    let layout = match self.base.node(id).and_then(|n| n.layout()) {
      Some(layout) => layout,
      None => return Ok(()),
    };
    let children: Vec<LayoutChild> = self
      .base
      .children_ids(id)
      .map(|ids| {
        ids
          .iter()
          .filter_map(|c| {
            self
              .base
              .node(*c)
              .map(|n| (*c, n.shape().size(), n.hidden()))
          })
          .collect()
      })
      .unwrap_or_default();
    let shapes = layout.solve(&children)?;
    for (child_id, shape) in shapes {
      if let Some(child) = self.base.node_mut(child_id) {
        child.set_shape(shape);
      }
    }
    Ok(())
  }

  // Draw }

  // Dispatch {

  /// Dispatch one event.
  ///
  /// Pointer events are hit-tested from the root, see [`Tree`] for the priority rules.
  /// Drag/drop events go to the focused window directly while it's dragging. Other events
  /// are delivered to all visible handlers.
  ///
  /// Once the handlers finish, the latched widgets are released, the tree commands are
  /// applied, and the tree is redrawn if any handler asks for it.
  pub fn dispatch(
    &mut self,
    event: &Event,
    events: &mut dyn EventSource,
    canvas: &mut dyn Compositor,
  ) -> UiResult<Dispatched> {
    self.event_serial += 1;
    let serial = self.event_serial;
    trace!("dispatch event:{:?}, serial:{:?}", event, serial);

    let (handled, effects) = {
      let mut ctx = EventContext::new(serial, events, &mut *canvas);
      let handled = self.route(event, &mut ctx)?;
      (handled, ctx.into_effects())
    };

    let Effects {
      mut redraw,
      latched,
      notices: emitted,
      commands,
    } = effects;
    let mut notices = emitted;

    for (id, duration) in latched {
      self.draw(canvas)?;
      canvas.flip(false);
      if !duration.is_zero() {
        std::thread::sleep(duration);
      }
      if let Some(notice) = self.base.node_mut(id).and_then(|n| n.release()) {
        notices.push(notice);
      }
      redraw = true;
    }

    for command in commands {
      if let Some(notice) = self.apply_command(command)? {
        notices.push(notice);
      }
    }

    if redraw {
      self.draw(canvas)?;
      canvas.flip(false);
    }

    Ok(Dispatched { handled, notices })
  }

  fn route(&mut self, event: &Event, ctx: &mut EventContext) -> UiResult<bool> {
    if matches!(event, Event::Drag { .. } | Event::Drop { .. }) {
      if let Some(window_id) = self.focused_window() {
        if matches!(event, Event::Drop { .. }) {
          self.focused_window = None;
        }
        self.call_handler(window_id, Some(window_id), false, event, ctx)?;
        return Ok(true);
      }
      self.focused_window = None;
    }

    let root_id = self.base.root_id();
    let root = match self.base.node(root_id) {
      Some(root) if !root.hidden() => root,
      _ => return Ok(false),
    };
    let screen = ctx.canvas().shape();
    match screen.intersect(root.actual_shape()) {
      Some(clip) => self.dispatch_node(root_id, clip, None, event, ctx),
      None => Ok(false),
    }
  }

  fn dispatch_node(
    &mut self,
    id: TreeNodeId,
    clip: IRect,
    window_id: Option<TreeNodeId>,
    event: &Event,
    ctx: &mut EventContext,
  ) -> UiResult<bool> {
    let position = event.position();
    if let Some((x, y)) = position {
      if !clip.contains_xy(x, y) {
        return Ok(false);
      }
    }

    let is_window = self.base.node(id).is_some_and(|n| n.window().is_some());
    let window_id = if is_window { Some(id) } else { window_id };

    let children_ids = self.base.children_ids(id).cloned().unwrap_or_default();
    let mut consumed = false;
    for child_id in children_ids.into_iter().rev() {
      let child = match self.base.node(child_id) {
        Some(child) => child,
        None => continue,
      };
      if child.hidden() {
        continue;
      }
      match position {
        Some((x, y)) => {
          if child.is_container() {
            if child.disabled() {
              continue;
            }
            let child_clip = match clip.intersect(child.actual_shape()) {
              Some(child_clip) => child_clip,
              None => continue,
            };
            if self.dispatch_node(child_id, child_clip, window_id, event, ctx)? {
              consumed = true;
              break;
            }
          } else if child.is_clicked(x, y) {
            self.call_handler(child_id, window_id, false, event, ctx)?;
            consumed = true;
            break;
          }
        }
        None => {
          if child.is_container() {
            self.dispatch_node(child_id, clip, window_id, event, ctx)?;
          } else {
            self.call_handler(child_id, window_id, false, event, ctx)?;
          }
        }
      }
    }

    if self.base.node(id).is_some_and(|n| !n.disabled()) {
      self.call_handler(id, window_id, consumed, event, ctx)?;
    }

    if is_window && position.is_some() {
      consumed = true;
    }
    Ok(consumed)
  }

  fn call_handler(
    &mut self,
    id: TreeNodeId,
    window_id: Option<TreeNodeId>,
    consumed: bool,
    event: &Event,
    ctx: &mut EventContext,
  ) -> UiResult<()> {
    let node = match self.base.node_mut(id) {
      Some(node) => node,
      None => return Ok(()),
    };
    if node.window().is_some() {
      if self.focused_window_event == Some(ctx.serial()) {
        trace!("window {:?} skips processed event {:?}", id, ctx.serial());
        return Ok(());
      }
      self.focused_window_event = Some(ctx.serial());
    }
    ctx.target(id, window_id, consumed);
    node.handle_event(ctx, event)
  }

  fn apply_command(&mut self, command: TreeCommand) -> UiResult<Option<Notice>> {
    trace!("apply command:{:?}", command);
    match command {
      TreeCommand::MoveToFront(id) => {
        if id != self.base.root_id() && self.base.contains(id) {
          self.base.move_to_front(id)?;
        }
        Ok(None)
      }
      TreeCommand::Focus(id) => {
        self.focused_window = Some(id);
        Ok(None)
      }
      TreeCommand::Unfocus => {
        self.focused_window = None;
        Ok(None)
      }
      TreeCommand::Close(id) => {
        if !self.base.contains(id) {
          return Ok(None);
        }
        self.remove(id)?;
        Ok(Some(Notice::WindowClosed(id)))
      }
      TreeCommand::Minimize(id) => {
        if !self.base.contains(id) {
          return Ok(None);
        }
        self.set_hidden(id, true)?;
        if self.focused_window == Some(id) {
          self.focused_window = None;
        }
        Ok(Some(Notice::WindowMinimized(id)))
      }
      TreeCommand::Maximize(id) => {
        let parent_size = match self.base.parent_id(id).and_then(|p| self.base.node(p)) {
          Some(parent) => parent.shape().size(),
          None => return Ok(None),
        };
        let window = match self.base.node_mut(id).and_then(|n| n.window_mut()) {
          Some(window) => window,
          None => return Ok(None),
        };
        let maximized = match window.restore_shape() {
          Some(restore_shape) => {
            window.set_restore_shape(None);
            window.set_shape(restore_shape);
            false
          }
          None => {
            window.set_restore_shape(Some(*window.shape()));
            window.set_shape(xywh(0, 0, parent_size.width(), parent_size.height()));
            true
          }
        };
        self.base.update_actual_shapes(id);
        Ok(Some(Notice::WindowMaximized(id, maximized)))
      }
    }
  }

  // Dispatch }

  /// The outer event loop.
  ///
  /// It draws the whole tree, then pulls and dispatches events one by one, and calls
  /// `callback` for every emitted notice. The loop exits when the callback returns
  /// [`Flow::Exit`], the [`Event::Interrupted`] signal arrives, or the event source is
  /// closed.
  pub fn run<F>(
    &mut self,
    events: &mut dyn EventSource,
    canvas: &mut dyn Compositor,
    mut callback: F,
  ) -> UiResult<()>
  where
    F: FnMut(&mut Tree, &Notice) -> Flow,
  {
    self.draw(canvas)?;
    canvas.flip(true);

    loop {
      let event = match events.pull(None) {
        Some(event) => event,
        None => {
          if events.closed() {
            debug!("event source closed, exit");
            return Ok(());
          }
          continue;
        }
      };
      if event == Event::Interrupted {
        debug!("interrupted, exit");
        return Ok(());
      }

      let dispatched = self.dispatch(&event, events, canvas)?;
      let mut redraw = false;
      for notice in dispatched.notices.iter() {
        match callback(self, notice) {
          Flow::Continue => {}
          Flow::Redraw => redraw = true,
          Flow::Exit => {
            debug!("callback exits on notice:{:?}", notice);
            return Ok(());
          }
        }
      }
      if redraw {
        self.draw(canvas)?;
        canvas.flip(false);
      }
    }
  }
}
