//! Frame inside the canvas.

use crate::prelude::*;
use crate::ui::canvas::frame::cell::Cell;

use compact_str::CompactString;
use std::ops::Range;

pub mod cell;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Logical frame for the canvas, a row-major grid of cells.
pub struct Frame {
  size: USize,
  cells: Vec<Cell>,
}

impl Frame {
  /// Make new frame filled with space cells.
  pub fn new(size: USize) -> Self {
    let n = size.height() * size.width();
    Frame {
      size,
      cells: vec![Cell::default(); n],
    }
  }

  // Utils {

  /// Convert (position) X and Y into Vec index, `None` if it's outside of the frame.
  pub fn xy2idx(&self, x: isize, y: isize) -> Option<usize> {
    if x < 0 || y < 0 {
      return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x < self.size.width() && y < self.size.height() {
      Some(y * self.size.width() + x)
    } else {
      None
    }
  }

  /// Convert index into (position) X and Y.
  ///
  /// Returns `(x, y)`.
  pub fn idx2xy(&self, index: usize) -> (isize, isize) {
    debug_assert!(index < self.cells.len());
    let x = index % self.size.width();
    let y = index / self.size.width();
    (x as isize, y as isize)
  }

  /// Index range of a row segment, clipped by the frame width.
  pub fn row_range(&self, y: isize, x: isize, n: usize) -> Option<Range<usize>> {
    let start = self.xy2idx(x, y)?;
    let end = start + n.min(self.size.width() - x as usize);
    Some(start..end)
  }

  // Utils }

  /// Get current frame size.
  pub fn size(&self) -> USize {
    self.size
  }

  /// Whether the frame is zero sized.
  pub fn zero_sized(&self) -> bool {
    self.size.height() == 0 || self.size.width() == 0
  }

  /// The shape of the whole frame.
  pub fn shape(&self) -> IRect {
    xywh(0, 0, self.size.width() as isize, self.size.height() as isize)
  }

  /// Get a cell, `None` if the position is outside of the frame.
  pub fn get_cell(&self, x: isize, y: isize) -> Option<&Cell> {
    self.xy2idx(x, y).map(|i| &self.cells[i])
  }

  /// Get a mutable cell, `None` if the position is outside of the frame.
  pub fn get_cell_mut(&mut self, x: isize, y: isize) -> Option<&mut Cell> {
    self.xy2idx(x, y).map(|i| &mut self.cells[i])
  }

  /// Set a cell.
  ///
  /// Returns the old cell, `None` if the position is outside of the frame.
  pub fn set_cell(&mut self, x: isize, y: isize, cell: Cell) -> Option<Cell> {
    self
      .xy2idx(x, y)
      .map(|i| std::mem::replace(&mut self.cells[i], cell))
  }

  /// Get all cells.
  pub fn cells(&self) -> &Vec<Cell> {
    &self.cells
  }

  /// Get raw symbols of all cells, one string per row.
  ///
  /// NOTE: This method is mostly for debugging and testing.
  pub fn raw_symbols(&self) -> Vec<CompactString> {
    let mut rows = vec![];
    for y in 0..self.size.height() {
      let start = y * self.size.width();
      let end = start + self.size.width();
      let row: CompactString = self.cells[start..end]
        .iter()
        .map(|c| c.symbol().as_str())
        .collect();
      rows.push(row);
    }
    rows
  }
}
