//! Tree view of a directory hierarchy.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{Theme, TreeViewPalette};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Notice, Widgetable};

use compact_str::{CompactString, ToCompactString};
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Arrow of a collapsed directory.
pub const COLLAPSED_SYMBOL: char = '▸';

/// Arrow of an expanded directory.
pub const EXPANDED_SYMBOL: char = '▾';

/// Indentation width of each level.
pub const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
/// An entry in a directory.
pub struct DirEntry {
  pub name: CompactString,
  pub is_dir: bool,
}

impl DirEntry {
  pub fn file(name: &str) -> Self {
    DirEntry {
      name: CompactString::from(name),
      is_dir: false,
    }
  }

  pub fn dir(name: &str) -> Self {
    DirEntry {
      name: CompactString::from(name),
      is_dir: true,
    }
  }
}

/// Directory listing for tree views.
pub trait DirectorySource: Debug {
  /// List the entries of a directory, in any order.
  fn list(&self, path: &Path) -> IoResult<Vec<DirEntry>>;
}

#[derive(Debug, Default, Copy, Clone)]
/// Lists the real filesystem.
pub struct FsDirectorySource;

impl DirectorySource for FsDirectorySource {
  fn list(&self, path: &Path) -> IoResult<Vec<DirEntry>> {
    let mut entries = vec![];
    for entry in std::fs::read_dir(path)? {
      let entry = entry?;
      entries.push(DirEntry {
        name: entry.file_name().to_string_lossy().to_compact_string(),
        is_dir: entry.file_type()?.is_dir(),
      });
    }
    Ok(entries)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A visible row in the tree view.
pub struct TreeItem {
  pub path: PathBuf,
  pub name: CompactString,
  pub is_dir: bool,
  /// Nesting level, the entries of the root directory are at level 0.
  pub depth: usize,
  pub expanded: bool,
}

/// Sort entries at the same level: directories first, then alphabetically ignoring case.
pub fn sort_entries(entries: &mut [DirEntry]) {
  entries.sort_by(|a, b| {
    b.is_dir
      .cmp(&a.is_dir)
      .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
      .then_with(|| a.name.cmp(&b.name))
  });
}

#[derive(Debug, Clone)]
/// Shows a directory hierarchy as a flat list of rows.
///
/// Directories are expanded lazily: a touch on a directory row lists its entries through
/// the [`DirectorySource`], and they're flattened into the list right below it with one
/// more indentation level. A touch on a file row selects it.
pub struct TreeView {
  base: InodeBase,
  root: PathBuf,
  source: Rc<dyn DirectorySource>,
  expanded: HashSet<PathBuf>,
  items: Vec<TreeItem>,
  selected: Option<PathBuf>,
  // Index of the first visible row.
  offset: usize,
  palette: TreeViewPalette,
}

inode_impl!(TreeView);

impl TreeView {
  /// Make a tree view and list the root directory.
  ///
  /// # Errors
  ///
  /// If the root directory cannot be listed.
  pub fn new(
    shape: IRect,
    root: &Path,
    source: Rc<dyn DirectorySource>,
    theme: &Theme,
  ) -> UiResult<Self> {
    let mut view = TreeView {
      base: InodeBase::new(shape),
      root: root.to_path_buf(),
      source,
      expanded: HashSet::new(),
      items: vec![],
      selected: None,
      offset: 0,
      palette: theme.tree_view,
    };
    view.refresh()?;
    Ok(view)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Change the root directory, all directories are collapsed.
  pub fn set_root(&mut self, root: &Path) -> UiResult<()> {
    self.root = root.to_path_buf();
    self.expanded.clear();
    self.selected = None;
    self.offset = 0;
    self.refresh()
  }

  pub fn items(&self) -> &[TreeItem] {
    &self.items
  }

  pub fn selected(&self) -> Option<&PathBuf> {
    self.selected.as_ref()
  }

  pub fn offset(&self) -> usize {
    self.offset
  }

  pub fn is_expanded(&self, path: &Path) -> bool {
    self.expanded.contains(path)
  }

  /// Expand or collapse a directory, then re-list the tree.
  pub fn set_expanded(&mut self, path: &Path, value: bool) -> UiResult<()> {
    if value {
      self.expanded.insert(path.to_path_buf());
    } else {
      self.expanded.remove(path);
    }
    self.refresh()
  }

  /// List the root directory and all expanded directories again.
  pub fn refresh(&mut self) -> UiResult<()> {
    let mut items = vec![];
    self.flatten(&self.root, 0, &mut items)?;
    self.items = items;
    self.offset = self.offset.min(self.max_offset());
    Ok(())
  }

  fn flatten(&self, dir: &Path, depth: usize, items: &mut Vec<TreeItem>) -> IoResult<()> {
    let mut entries = self.source.list(dir)?;
    sort_entries(&mut entries);
    for entry in entries {
      let path = dir.join(entry.name.as_str());
      let expanded = entry.is_dir && self.expanded.contains(&path);
      items.push(TreeItem {
        path: path.clone(),
        name: entry.name,
        is_dir: entry.is_dir,
        depth,
        expanded,
      });
      if expanded {
        self.flatten(&path, depth + 1, items)?;
      }
    }
    Ok(())
  }

  fn max_offset(&self) -> usize {
    self
      .items
      .len()
      .saturating_sub(self.shape().height().max(0) as usize)
  }
}

impl Widgetable for TreeView {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let palette = &self.palette;
    canvas.draw_rectangle(actual, palette.background, palette.file, ' ', None);
    for (row, item) in self
      .items
      .iter()
      .skip(self.offset)
      .take(actual.height().max(0) as usize)
      .enumerate()
    {
      let y = actual.y() + row as isize;
      let selected = self.selected.as_ref() == Some(&item.path);
      let fg = if selected {
        canvas.draw_rectangle(
          xywh(actual.x(), y, actual.width(), 1),
          palette.selection_background,
          palette.selection_foreground,
          ' ',
          None,
        );
        palette.selection_foreground
      } else if item.is_dir {
        palette.directory
      } else {
        palette.file
      };
      let x = actual.x() + (item.depth * INDENT_WIDTH) as isize;
      if item.is_dir {
        let arrow = if item.expanded {
          EXPANDED_SYMBOL
        } else {
          COLLAPSED_SYMBOL
        };
        canvas.draw_text(x, y, palette.arrow, &arrow.to_string());
      }
      let width = (actual.right() - x - 2).max(0) as usize;
      canvas.draw_text(x + 2, y, fg, &strings::truncate(&item.name, width));
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    match event {
      Event::Touch { y, .. } => {
        let row = y - self.actual_shape().y();
        let item = match self.items.get(self.offset + row.max(0) as usize) {
          Some(item) => item.clone(),
          None => return Ok(()),
        };
        if item.is_dir {
          let expanded = !item.expanded;
          self.set_expanded(&item.path, expanded)?;
          ctx.notify(Notice::TreeItemToggled(self.id(), item.path, expanded));
        } else {
          self.selected = Some(item.path.clone());
          ctx.notify(Notice::TreeItemSelected(self.id(), item.path));
        }
        ctx.redraw();
      }
      Event::Scroll { delta, .. } => {
        let offset = if *delta > 0 {
          self.offset.saturating_sub(1)
        } else {
          (self.offset + 1).min(self.max_offset())
        };
        if offset != self.offset {
          self.offset = offset;
          ctx.redraw();
        }
      }
      _ => { /* Skip */ }
    }
    Ok(())
  }
}
