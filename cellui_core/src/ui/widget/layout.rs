//! Layout, the grid container.
//!
//! A layout splits its area into a grid of rows and columns. Every row (column) is sized
//! either by an absolute number of cells, or by a percentage share of the space left after
//! all absolute rows (columns). Each child is assigned to one grid cell, default is the
//! top-left cell `(0, 0)`, the children inside the same cell are packed one after another
//! along the cell direction.
//!
//! The children positions are solved every time the layout is drawn, see
//! [`Layout::solve`].

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::align::Alignment;
use crate::ui::canvas::Compositor;
use crate::ui::tree::*;
use crate::ui::widget::Widgetable;

use crossterm::style::Color;


#[derive(
  Debug,
  Copy,
  Clone,
  PartialEq,
  Eq,
  strum_macros::Display,
  strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
/// Row and column sizing policy.
pub enum SizePolicy {
  /// Share of the space left after all absolute entries, in `[0.0, 1.0]`.
  Percentage,
  /// Fixed number of cells.
  Absolute,
}

#[derive(
  Debug,
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  strum_macros::Display,
  strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
/// Packing direction of the children in a grid cell.
pub enum Direction {
  Horizontal,
  #[default]
  Vertical,
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Size of a row or a column.
pub struct GridSize {
  pub policy: SizePolicy,
  pub size: f64,
}

impl GridSize {
  pub fn percentage(size: f64) -> Self {
    GridSize {
      policy: SizePolicy::Percentage,
      size,
    }
  }

  pub fn absolute(size: f64) -> Self {
    GridSize {
      policy: SizePolicy::Absolute,
      size,
    }
  }

  pub fn is_percentage(&self) -> bool {
    self.policy == SizePolicy::Percentage
  }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
/// Stretch the children to the cell size, minus the offsets.
pub struct Fitting {
  pub horizontal: bool,
  pub vertical: bool,
  pub horizontal_offset: isize,
  pub vertical_offset: isize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Packing configuration of a grid cell.
pub struct GridCell {
  pub direction: Direction,
  pub spacing: isize,
  pub alignment: Alignment,
  /// Margin `(x, y)` away from the aligned edges.
  pub margin: Option<(isize, isize)>,
  pub fitting: Option<Fitting>,
}

impl Default for GridCell {
  fn default() -> Self {
    GridCell {
      direction: Direction::Vertical,
      spacing: 1,
      alignment: Alignment::center(),
      margin: None,
      fitting: None,
    }
  }
}

/// Child info for solving a layout: node ID, current size and hidden.
pub type LayoutChild = (TreeNodeId, ISize, bool);

fn percentage_sum(entries: &[GridSize], except: Option<usize>) -> f64 {
  entries
    .iter()
    .enumerate()
    .filter(|(i, e)| e.is_percentage() && Some(*i) != except)
    .map(|(_, e)| e.size)
    .sum()
}

/// Renormalize the percentage entries so they sum to exactly 1.0.
///
/// When `changed` is a percentage entry (just added or resized) with share `s`, all other
/// percentage entries are scaled by `(1 - s) / others`. Otherwise (an entry is removed or
/// became absolute) the percentage entries are scaled by `1 / sum`. At last, the last
/// percentage entry absorbs the float rounding error.
pub fn renormalize(entries: &mut [GridSize], changed: Option<usize>) {
  let changed = changed.filter(|i| entries.get(*i).is_some_and(|e| e.is_percentage()));
  let percentages: Vec<usize> = entries
    .iter()
    .enumerate()
    .filter(|(_, e)| e.is_percentage())
    .map(|(i, _)| i)
    .collect();
  if percentages.is_empty() {
    return;
  }

  match changed {
    Some(changed) => {
      let share = entries[changed].size.clamp(0.0, 1.0);
      entries[changed].size = share;
      let others: Vec<usize> = percentages
        .iter()
        .copied()
        .filter(|i| *i != changed)
        .collect();
      let others_sum = percentage_sum(entries, Some(changed));
      if others.is_empty() {
        entries[changed].size = 1.0;
      } else if others_sum > 0.0 {
        let ratio = (1.0 - share) / others_sum;
        for i in others {
          entries[i].size *= ratio;
        }
      } else {
        let each = (1.0 - share) / others.len() as f64;
        for i in others {
          entries[i].size = each;
        }
      }
    }
    None => {
      let sum = percentage_sum(entries, None);
      if sum > 0.0 {
        for i in percentages.iter() {
          entries[*i].size /= sum;
        }
      } else {
        let each = 1.0 / percentages.len() as f64;
        for i in percentages.iter() {
          entries[*i].size = each;
        }
      }
    }
  }

  if let Some(last) = percentages.last() {
    let others_sum = percentage_sum(entries, Some(*last));
    entries[*last].size = (1.0 - others_sum).max(0.0);
  }
}

/// Resolve the pixel size of every entry inside `total` cells.
///
/// Absolute entries take their size, percentage entries share the space left, the last
/// percentage entry absorbs the rounding remainder.
pub fn resolve_sizes(entries: &[GridSize], total: isize) -> Vec<isize> {
  let absolute_sum: isize = entries
    .iter()
    .filter(|e| !e.is_percentage())
    .map(|e| e.size.round() as isize)
    .sum();
  let remaining = (total - absolute_sum).max(0);
  let last_percentage = entries.iter().rposition(|e| e.is_percentage());

  let mut allocated = 0_isize;
  entries
    .iter()
    .enumerate()
    .map(|(i, e)| {
      if !e.is_percentage() {
        e.size.round() as isize
      } else if Some(i) == last_percentage {
        (remaining - allocated).max(0)
      } else {
        let px = (e.size * remaining as f64).round() as isize;
        allocated += px;
        px
      }
    })
    .collect()
}

fn validate_size(
  dimension: &'static str,
  policy: SizePolicy,
  size: f64,
) -> UiResult<()> {
  if !size.is_finite() || size < 0.0 {
    return Err(UiErr::InvalidGrid(format!(
      "{} size {} must be non-negative",
      dimension, size
    )));
  }
  if policy == SizePolicy::Percentage && size > 1.0 {
    return Err(UiErr::PercentageOverflow(dimension));
  }
  Ok(())
}

#[derive(Debug, Clone)]
/// Grid-based layout container.
pub struct Layout {
  base: InodeBase,
  background: Option<Color>,
  columns: Vec<GridSize>,
  rows: Vec<GridSize>,
  // Indexed by `[row][column]`.
  cells: Vec<Vec<GridCell>>,
  // Maps from child ID to its cell `(column, row)`.
  positions: HashMap<TreeNodeId, (usize, usize)>,
}

inode_impl!(Layout);

impl Layout {
  /// Make a layout with `columns x rows` grid, all rows (columns) share the same
  /// percentage.
  pub fn new(shape: IRect, columns: usize, rows: usize) -> UiResult<Self> {
    let mut layout = Layout {
      base: InodeBase::new(shape),
      background: None,
      columns: vec![],
      rows: vec![],
      cells: vec![],
      positions: HashMap::new(),
    };
    layout.set_grid_size(columns, rows)?;
    Ok(layout)
  }

  pub fn background(&self) -> Option<Color> {
    self.background
  }

  pub fn set_background(&mut self, background: Option<Color>) {
    self.background = background;
  }

  pub fn columns(&self) -> &[GridSize] {
    &self.columns
  }

  pub fn rows(&self) -> &[GridSize] {
    &self.rows
  }

  pub fn column_count(&self) -> usize {
    self.columns.len()
  }

  pub fn row_count(&self) -> usize {
    self.rows.len()
  }

  // Grid {

  /// Reset the grid to `columns x rows` equal percentage shares, all cells configurations
  /// are reset as well.
  ///
  /// NOTE: The children positions are kept, a child stranded outside of the new grid makes
  /// the next draw fail.
  pub fn set_grid_size(&mut self, columns: usize, rows: usize) -> UiResult<()> {
    if columns == 0 || rows == 0 {
      return Err(UiErr::InvalidGrid(format!(
        "grid size {}x{} must be positive",
        columns, rows
      )));
    }
    self.columns = vec![GridSize::percentage(1.0 / columns as f64); columns];
    self.rows = vec![GridSize::percentage(1.0 / rows as f64); rows];
    renormalize(&mut self.columns, None);
    renormalize(&mut self.rows, None);
    self.cells = vec![vec![GridCell::default(); columns]; rows];
    Ok(())
  }

  pub fn add_row(&mut self, policy: SizePolicy, size: f64) -> UiResult<()> {
    validate_size("row", policy, size)?;
    self.rows.push(GridSize { policy, size });
    let last = self.rows.len() - 1;
    renormalize(&mut self.rows, Some(last));
    self.cells.push(vec![GridCell::default(); self.columns.len()]);
    Ok(())
  }

  pub fn add_column(&mut self, policy: SizePolicy, size: f64) -> UiResult<()> {
    validate_size("column", policy, size)?;
    self.columns.push(GridSize { policy, size });
    let last = self.columns.len() - 1;
    renormalize(&mut self.columns, Some(last));
    for row in self.cells.iter_mut() {
      row.push(GridCell::default());
    }
    Ok(())
  }

  /// Remove a row. The children below it move up by one row, the children inside it move
  /// to the previous row (or the first row).
  pub fn remove_row(&mut self, index: usize) -> UiResult<()> {
    if index >= self.rows.len() || self.rows.len() == 1 {
      return Err(UiErr::InvalidGrid(format!(
        "cannot remove row {} from {} rows",
        index,
        self.rows.len()
      )));
    }
    self.rows.remove(index);
    self.cells.remove(index);
    renormalize(&mut self.rows, None);
    for (_column, row) in self.positions.values_mut() {
      if *row > index || (*row == index && index > 0) {
        *row -= 1;
      }
    }
    Ok(())
  }

  /// Remove a column. The children on its right move left by one column, the children
  /// inside it move to the previous column (or the first column).
  pub fn remove_column(&mut self, index: usize) -> UiResult<()> {
    if index >= self.columns.len() || self.columns.len() == 1 {
      return Err(UiErr::InvalidGrid(format!(
        "cannot remove column {} from {} columns",
        index,
        self.columns.len()
      )));
    }
    self.columns.remove(index);
    for row in self.cells.iter_mut() {
      row.remove(index);
    }
    renormalize(&mut self.columns, None);
    for (column, _row) in self.positions.values_mut() {
      if *column > index || (*column == index && index > 0) {
        *column -= 1;
      }
    }
    Ok(())
  }

  pub fn set_row_height(
    &mut self,
    index: usize,
    policy: SizePolicy,
    size: f64,
  ) -> UiResult<()> {
    validate_size("row", policy, size)?;
    let row_count = self.rows.len();
    let entry = self.rows.get_mut(index).ok_or_else(|| {
      UiErr::InvalidGrid(format!("row {} out of {} rows", index, row_count))
    })?;
    *entry = GridSize { policy, size };
    renormalize(&mut self.rows, Some(index));
    Ok(())
  }

  pub fn set_column_width(
    &mut self,
    index: usize,
    policy: SizePolicy,
    size: f64,
  ) -> UiResult<()> {
    validate_size("column", policy, size)?;
    let column_count = self.columns.len();
    let entry = self.columns.get_mut(index).ok_or_else(|| {
      UiErr::InvalidGrid(format!(
        "column {} out of {} columns",
        index, column_count
      ))
    })?;
    *entry = GridSize { policy, size };
    renormalize(&mut self.columns, Some(index));
    Ok(())
  }

  // Grid }

  // Cells {

  fn check_range(&self, column: usize, row: usize) -> UiResult<()> {
    if column < self.columns.len() && row < self.rows.len() {
      Ok(())
    } else {
      Err(UiErr::CellOutOfRange {
        column,
        row,
        columns: self.columns.len(),
        rows: self.rows.len(),
      })
    }
  }

  /// Get a cell configuration.
  pub fn cell(&self, column: usize, row: usize) -> UiResult<&GridCell> {
    self.check_range(column, row)?;
    Ok(&self.cells[row][column])
  }

  fn cell_mut(&mut self, column: usize, row: usize) -> UiResult<&mut GridCell> {
    self.check_range(column, row)?;
    Ok(&mut self.cells[row][column])
  }

  /// Assign a child to a cell.
  ///
  /// NOTE: Use [`Tree::set_cell_position`](crate::ui::tree::Tree::set_cell_position), it
  /// checks the child really belongs to this layout.
  pub fn set_position(
    &mut self,
    child_id: TreeNodeId,
    column: usize,
    row: usize,
  ) -> UiResult<()> {
    self.check_range(column, row)?;
    self.positions.insert(child_id, (column, row));
    Ok(())
  }

  /// The cell `(column, row)` of a child.
  pub fn position(&self, child_id: TreeNodeId) -> (usize, usize) {
    self.positions.get(&child_id).copied().unwrap_or((0, 0))
  }

  /// Forget a removed child.
  pub fn forget(&mut self, child_id: TreeNodeId) {
    self.positions.remove(&child_id);
  }

  pub fn set_cell_direction(
    &mut self,
    column: usize,
    row: usize,
    direction: Direction,
  ) -> UiResult<()> {
    self.cell_mut(column, row)?.direction = direction;
    Ok(())
  }

  pub fn set_cell_spacing(
    &mut self,
    column: usize,
    row: usize,
    spacing: isize,
  ) -> UiResult<()> {
    self.cell_mut(column, row)?.spacing = spacing;
    Ok(())
  }

  pub fn set_cell_alignment(
    &mut self,
    column: usize,
    row: usize,
    alignment: Alignment,
  ) -> UiResult<()> {
    self.cell_mut(column, row)?.alignment = alignment;
    Ok(())
  }

  pub fn set_cell_margin(
    &mut self,
    column: usize,
    row: usize,
    margin: Option<(isize, isize)>,
  ) -> UiResult<()> {
    self.cell_mut(column, row)?.margin = margin;
    Ok(())
  }

  pub fn set_cell_fitting(
    &mut self,
    column: usize,
    row: usize,
    fitting: Option<Fitting>,
  ) -> UiResult<()> {
    self.cell_mut(column, row)?.fitting = fitting;
    Ok(())
  }

  // Cells }

  /// Solve the local shapes of all non-hidden children.
  ///
  /// The `children` must be in paint order, children in the same cell are packed in this
  /// order.
  ///
  /// # Errors
  ///
  /// If a child is assigned to a cell outside of the grid.
  pub fn solve(
    &self,
    children: &[LayoutChild],
  ) -> UiResult<Vec<(TreeNodeId, IRect)>> {
    let shape = self.shape();
    let widths = resolve_sizes(&self.columns, shape.width());
    let heights = resolve_sizes(&self.rows, shape.height());

    let mut xs = Vec::with_capacity(widths.len());
    let mut x = 0_isize;
    for w in widths.iter() {
      xs.push(x);
      x += w;
    }
    let mut ys = Vec::with_capacity(heights.len());
    let mut y = 0_isize;
    for h in heights.iter() {
      ys.push(y);
      y += h;
    }

    // Children grouped by cells, with fitted sizes.
    let mut groups: HashMap<(usize, usize), Vec<(TreeNodeId, ISize)>> =
      HashMap::new();
    let mut order: Vec<(usize, usize)> = vec![];
    for (child_id, size, hidden) in children.iter() {
      if *hidden {
        continue;
      }
      let (column, row) = self.position(*child_id);
      self.check_range(column, row)?;
      let cell = &self.cells[row][column];
      let mut size = *size;
      if let Some(fitting) = cell.fitting {
        let width = if fitting.horizontal {
          (widths[column] - fitting.horizontal_offset).max(0)
        } else {
          size.width()
        };
        let height = if fitting.vertical {
          (heights[row] - fitting.vertical_offset).max(0)
        } else {
          size.height()
        };
        size = ISize::new(width, height);
      }
      let group = groups.entry((column, row)).or_default();
      if group.is_empty() {
        order.push((column, row));
      }
      group.push((*child_id, size));
    }

    let mut result = vec![];
    for (column, row) in order {
      let cell = &self.cells[row][column];
      let group = match groups.get(&(column, row)) {
        Some(group) => group,
        None => continue,
      };
      let spacing = cell.spacing * (group.len() as isize - 1);
      let (block_width, block_height) = match cell.direction {
        Direction::Horizontal => (
          group.iter().map(|(_, s)| s.width()).sum::<isize>() + spacing,
          group.iter().map(|(_, s)| s.height()).max().unwrap_or(0),
        ),
        Direction::Vertical => (
          group.iter().map(|(_, s)| s.width()).max().unwrap_or(0),
          group.iter().map(|(_, s)| s.height()).sum::<isize>() + spacing,
        ),
      };

      let cell_shape = xywh(xs[column], ys[row], widths[column], heights[row]);
      let (mut bx, mut by) = cell
        .alignment
        .align(ISize::new(block_width, block_height), &cell_shape);
      if let Some((mx, my)) = cell.margin {
        let (dx, dy) = cell.alignment.margin(mx, my);
        bx += dx;
        by += dy;
      }

      let (mut cx, mut cy) = (bx, by);
      for (child_id, size) in group.iter() {
        match cell.direction {
          Direction::Horizontal => {
            let y = by + (block_height - size.height()).div_euclid(2);
            result.push((*child_id, xywh(cx, y, size.width(), size.height())));
            cx += size.width() + cell.spacing;
          }
          Direction::Vertical => {
            let x = bx + (block_width - size.width()).div_euclid(2);
            result.push((*child_id, xywh(x, cy, size.width(), size.height())));
            cy += size.height() + cell.spacing;
          }
        }
      }
    }

    Ok(result)
  }
}

impl Widgetable for Layout {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    if let Some(bg) = self.background {
      canvas.draw_rectangle(*self.actual_shape(), bg, bg, ' ', None);
    }
  }
}
