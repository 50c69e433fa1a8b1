//! Results and errors.

use crate::ui::tree::TreeNodeId;
use thiserror::Error as ThisError;

// std::io {

/// [`std::io::Error`]
pub type IoErr = std::io::Error;

/// [`std::io::Result`] with `T` if ok.
pub type IoResult<T> = std::io::Result<T>;

// std::io }

// Ui {

#[derive(Debug, ThisError)]
/// Error code implemented by [`thiserror::Error`].
///
/// Most of the variants are configuration errors, i.e. the calling application uses the
/// toolkit in a wrong way. They're returned immediately and never retried.
pub enum UiErr {
  #[error("Node {0} doesn't exist")]
  NodeNotFound(TreeNodeId),

  #[error("Node {0} is not a container, it cannot have children")]
  NotContainer(TreeNodeId),

  #[error("Root node {0} cannot be removed or reordered")]
  RootNode(TreeNodeId),

  #[error("Node {child} is not a child of node {parent}")]
  NotAChild {
    parent: TreeNodeId,
    child: TreeNodeId,
  },

  #[error(
    "Layout cell ({column}, {row}) is out of the {columns}x{rows} grid range"
  )]
  CellOutOfRange {
    column: usize,
    row: usize,
    columns: usize,
    rows: usize,
  },

  #[error("Invalid layout grid: {0}")]
  InvalidGrid(String),

  #[error("Summary percentage of layout {0} exceeds 100%")]
  PercentageOverflow(&'static str),

  #[error("Unknown alignment: {0}")]
  UnknownAlignment(String),

  #[error("Resource not found: {0}")]
  ResourceNotFound(String),

  #[error("IO error: {0}")]
  Io(#[from] IoErr),

  #[error("Invalid theme: {0}")]
  Theme(#[from] toml::de::Error),
}

/// [`std::result::Result`] with `T` if ok, [`UiErr`] if error.
pub type UiResult<T> = std::result::Result<T, UiErr>;

// Ui }
