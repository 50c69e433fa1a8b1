//! Internal tree structure that implements the widget tree.

use crate::prelude::*;
use crate::ui::tree::internal::inode::{Inodeable, TreeNodeId};
use crate::ui::tree::internal::shapes;

use std::collections::VecDeque;

#[derive(Debug, Clone)]
/// Arena tree.
///
/// The tree owns all nodes, parent-child relationships are maintained by node IDs. For the
/// children under the same parent, the vector order is the paint order: the first child is
/// painted first (back-most), the last child is painted last (front-most). Hit-testing scans
/// the children in the reversed order, thus the front-most child wins.
pub struct Itree<T>
where
  T: Inodeable,
{
  // Root node ID.
  root_id: TreeNodeId,
  // Nodes collection, maps from node ID to its node struct.
  nodes: HashMap<TreeNodeId, T>,
  // Maps from child ID to its parent ID.
  parent_ids: HashMap<TreeNodeId, TreeNodeId>,
  // Maps from parent ID to its children IDs, in paint order.
  children_ids: HashMap<TreeNodeId, Vec<TreeNodeId>>,
}

#[derive(Debug)]
/// The pre-order iterator of the tree.
///
/// For each node, it first visits the node itself, then visits all its children in paint
/// order. This is also the order of drawing the tree.
pub struct ItreeIter<'a, T>
where
  T: Inodeable,
{
  tree: &'a Itree<T>,
  stack: Vec<TreeNodeId>,
}

impl<'a, T> Iterator for ItreeIter<'a, T>
where
  T: Inodeable,
{
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.stack.pop()?;
    if let Some(children_ids) = self.tree.children_ids(id) {
      for child_id in children_ids.iter().rev() {
        self.stack.push(*child_id);
      }
    }
    self.tree.node(id)
  }
}

impl<'a, T> ItreeIter<'a, T>
where
  T: Inodeable,
{
  pub fn new(tree: &'a Itree<T>, start_node_id: Option<TreeNodeId>) -> Self {
    let stack = start_node_id.into_iter().collect();
    ItreeIter { tree, stack }
  }
}

impl<T> Itree<T>
where
  T: Inodeable,
{
  pub fn new(mut root_node: T) -> Self {
    let root_id = root_node.id();
    let shape = *root_node.shape();
    root_node.set_actual_shape(shape);
    let mut nodes = HashMap::new();
    nodes.insert(root_id, root_node);
    let mut children_ids = HashMap::new();
    children_ids.insert(root_id, vec![]);
    Itree {
      root_id,
      nodes,
      parent_ids: HashMap::new(),
      children_ids,
    }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Whether the tree only has the root node.
  pub fn is_empty(&self) -> bool {
    self.nodes.len() <= 1
  }

  pub fn root_id(&self) -> TreeNodeId {
    self.root_id
  }

  pub fn contains(&self, id: TreeNodeId) -> bool {
    self.nodes.contains_key(&id)
  }

  pub fn parent_id(&self, id: TreeNodeId) -> Option<TreeNodeId> {
    self.parent_ids.get(&id).copied()
  }

  pub fn children_ids(&self, id: TreeNodeId) -> Option<&Vec<TreeNodeId>> {
    self.children_ids.get(&id)
  }

  pub fn node(&self, id: TreeNodeId) -> Option<&T> {
    self.nodes.get(&id)
  }

  pub fn node_mut(&mut self, id: TreeNodeId) -> Option<&mut T> {
    self.nodes.get_mut(&id)
  }

  /// Get the iterator, it iterates in pre-order and starts from the root.
  pub fn iter(&self) -> ItreeIter<'_, T> {
    ItreeIter::new(self, Some(self.root_id))
  }

  /// All ancestor IDs of a node, from its parent up to the root.
  pub fn ancestor_ids(&self, id: TreeNodeId) -> Vec<TreeNodeId> {
    let mut result = vec![];
    let mut current = id;
    while let Some(parent_id) = self.parent_id(current) {
      result.push(parent_id);
      current = parent_id;
    }
    result
  }

  /// Update the actual shapes of a node and all its descendants, based on the parent's
  /// actual shape.
  pub fn update_actual_shapes(&mut self, start_id: TreeNodeId) {
    let parent_actual_shape = match self.parent_id(start_id) {
      Some(parent_id) => match self.nodes.get(&parent_id) {
        Some(parent) => *parent.actual_shape(),
        None => return,
      },
      None => xywh(0, 0, 0, 0),
    };

    let mut que: VecDeque<(TreeNodeId, IRect)> = VecDeque::new();
    que.push_back((start_id, parent_actual_shape));
    while let Some((id, parent_actual_shape)) = que.pop_front() {
      let actual_shape = match self.nodes.get_mut(&id) {
        Some(node) => {
          let actual_shape =
            shapes::make_actual_shape(node.shape(), &parent_actual_shape);
          node.set_actual_shape(actual_shape);
          actual_shape
        }
        None => continue,
      };
      if let Some(children_ids) = self.children_ids.get(&id) {
        for child_id in children_ids.iter() {
          que.push_back((*child_id, actual_shape));
        }
      }
    }
  }

  /// Insert a node to the tree, i.e. push it to the end of the children vector of the
  /// parent, thus it becomes the front-most child.
  ///
  /// It also computes the actual shape of the inserted child.
  ///
  /// # Errors
  ///
  /// If `parent_id` doesn't exist.
  pub fn insert(
    &mut self,
    parent_id: TreeNodeId,
    child_node: T,
  ) -> UiResult<TreeNodeId> {
    if !self.nodes.contains_key(&parent_id) {
      return Err(UiErr::NodeNotFound(parent_id));
    }

    let child_id = child_node.id();
    self.nodes.insert(child_id, child_node);
    self.children_ids.insert(child_id, vec![]);
    self.parent_ids.insert(child_id, parent_id);
    self
      .children_ids
      .entry(parent_id)
      .or_default()
      .push(child_id);
    self.update_actual_shapes(child_id);

    trace!("insert child:{:?} to parent:{:?}", child_id, parent_id);
    Ok(child_id)
  }

  /// Remove a node and all its descendants.
  ///
  /// Returns the removed node, `None` if the node doesn't exist or it is the root node.
  pub fn remove(&mut self, id: TreeNodeId) -> Option<T> {
    if id == self.root_id || !self.nodes.contains_key(&id) {
      return None;
    }

    if let Some(parent_id) = self.parent_ids.remove(&id) {
      if let Some(siblings) = self.children_ids.get_mut(&parent_id) {
        siblings.retain(|c| *c != id);
      }
    }

    let mut que: VecDeque<TreeNodeId> = VecDeque::new();
    if let Some(children_ids) = self.children_ids.remove(&id) {
      que.extend(children_ids);
    }
    while let Some(descendant_id) = que.pop_front() {
      self.nodes.remove(&descendant_id);
      self.parent_ids.remove(&descendant_id);
      if let Some(children_ids) = self.children_ids.remove(&descendant_id) {
        que.extend(children_ids);
      }
    }

    trace!("remove node:{:?}", id);
    self.nodes.remove(&id)
  }

  // Z-order {

  fn siblings_mut(
    &mut self,
    id: TreeNodeId,
  ) -> UiResult<(&mut Vec<TreeNodeId>, usize)> {
    if id == self.root_id {
      return Err(UiErr::RootNode(id));
    }
    let parent_id = self.parent_id(id).ok_or(UiErr::NodeNotFound(id))?;
    let siblings = self
      .children_ids
      .get_mut(&parent_id)
      .ok_or(UiErr::NodeNotFound(parent_id))?;
    let index = siblings
      .iter()
      .position(|c| *c == id)
      .ok_or(UiErr::NotAChild {
        parent: parent_id,
        child: id,
      })?;
    Ok((siblings, index))
  }

  /// Index of a node among its siblings, i.e. its paint order.
  pub fn index_of(&self, id: TreeNodeId) -> Option<usize> {
    let parent_id = self.parent_id(id)?;
    self.children_ids.get(&parent_id)?.iter().position(|c| *c == id)
  }

  /// Move a node to the end of its siblings, it will be painted last and hit-tested first.
  pub fn move_to_front(&mut self, id: TreeNodeId) -> UiResult<()> {
    let (siblings, index) = self.siblings_mut(id)?;
    let child_id = siblings.remove(index);
    siblings.push(child_id);
    Ok(())
  }

  /// Move a node to the head of its siblings, it will be painted first and hit-tested last.
  pub fn move_to_back(&mut self, id: TreeNodeId) -> UiResult<()> {
    let (siblings, index) = self.siblings_mut(id)?;
    let child_id = siblings.remove(index);
    siblings.insert(0, child_id);
    Ok(())
  }

  /// Swap a node with its next sibling. It does nothing if the node is already the last.
  pub fn move_forward(&mut self, id: TreeNodeId) -> UiResult<()> {
    let (siblings, index) = self.siblings_mut(id)?;
    if index + 1 < siblings.len() {
      siblings.swap(index, index + 1);
    }
    Ok(())
  }

  /// Swap a node with its previous sibling. It does nothing if the node is already the
  /// first.
  pub fn move_backward(&mut self, id: TreeNodeId) -> UiResult<()> {
    let (siblings, index) = self.siblings_mut(id)?;
    if index > 0 {
      siblings.swap(index, index - 1);
    }
    Ok(())
  }

  // Z-order }
}
