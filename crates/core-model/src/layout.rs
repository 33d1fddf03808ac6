//! Fixed grid layout.
//!
//! A deliberately small stand-in for a host table engine: columns have fixed
//! widths, rows fixed heights, and the grid hangs down from its top-left
//! origin (y decreases row by row, as in PDF user space). Cells are visited
//! row-major, which is the order the border pass is driven in.
//!
//! Invariants:
//! * At least one column and one row.
//! * Every width/height is finite and `>= 0` (zero-sized rows are allowed and
//!   produce degenerate cell rectangles).

use crate::geometry::Rect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("table needs at least one column and one row")]
    EmptyGrid,
    #[error("{axis} size {value} at index {index} is negative or not finite")]
    InvalidSize {
        axis: &'static str,
        index: usize,
        value: f32,
    },
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    left: f32,
    top: f32,
    columns: Vec<f32>,
    rows: Vec<f32>,
}

fn validate(axis: &'static str, sizes: &[f32]) -> Result<(), LayoutError> {
    for (index, value) in sizes.iter().copied().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidSize { axis, index, value });
        }
    }
    Ok(())
}

impl TableLayout {
    pub fn new(
        left: f32,
        top: f32,
        columns: Vec<f32>,
        rows: Vec<f32>,
    ) -> Result<Self, LayoutError> {
        if columns.is_empty() || rows.is_empty() {
            return Err(LayoutError::EmptyGrid);
        }
        validate("column", &columns)?;
        validate("row", &rows)?;
        Ok(Self {
            left,
            top,
            columns,
            rows,
        })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> f32 {
        self.columns.iter().sum()
    }

    pub fn height(&self) -> f32 {
        self.rows.iter().sum()
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Result<Rect, LayoutError> {
        if row >= self.rows.len() || col >= self.columns.len() {
            return Err(LayoutError::OutOfRange {
                row,
                col,
                rows: self.rows.len(),
                cols: self.columns.len(),
            });
        }
        let left = self.left + self.columns[..col].iter().sum::<f32>();
        let top = self.top - self.rows[..row].iter().sum::<f32>();
        Ok(Rect::new(
            left,
            top,
            left + self.columns[col],
            top - self.rows[row],
        ))
    }

    /// Row-major `(row, col, rect)` for every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let mut top = self.top;
        self.rows.iter().enumerate().flat_map(move |(r, h)| {
            let row_top = top;
            top -= h;
            let mut left = self.left;
            self.columns.iter().enumerate().map(move |(c, w)| {
                let rect = Rect::new(left, row_top, left + w, row_top - h);
                left += w;
                (r, c, rect)
            })
        })
    }
}
