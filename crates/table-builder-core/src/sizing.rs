//! Row height and column width resolution
//!
//! Each line is sized by the first rule that applies:
//! 1. its explicit size;
//! 2. auto-fit, computed by the renderer from the content;
//! 3. the average explicit size of the same kind of line in the table, or
//!    the engine default when no line of that kind has an explicit size.

use crate::cells_set::{Axis, CellsSet};
use crate::error::Result;
use crate::table::Table;

/// Row height used when no row in the table has an explicit height
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Column width used when no column in the table has an explicit width
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// How a row or column is sized at conversion time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSize {
    /// Size set on the line itself
    Explicit(f64),
    /// The renderer measures the content
    AutoFit,
    /// Table-wide average (or engine default) for lines without a size
    Fallback(f64),
}

impl LineSize {
    /// The size, unless the renderer has to measure it
    pub fn fixed(&self) -> Option<f64> {
        match self {
            LineSize::Explicit(size) | LineSize::Fallback(size) => Some(*size),
            LineSize::AutoFit => None,
        }
    }
}

impl Table {
    /// Average explicit row height, or [`DEFAULT_ROW_HEIGHT`]
    pub fn average_row_height(&self) -> f64 {
        average(self.rows.iter().filter_map(|row| row.height)).unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Average explicit column width, or [`DEFAULT_COLUMN_WIDTH`]
    pub fn average_column_width(&self) -> f64 {
        average(self.columns.iter().filter_map(|column| column.width))
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Sizing rule of a row
    pub fn row_size(&self, index: usize) -> Result<LineSize> {
        Ok(self.line_size(self.row(index)?))
    }

    /// Sizing rule of a column
    pub fn column_size(&self, index: usize) -> Result<LineSize> {
        Ok(self.line_size(self.column(index)?))
    }

    /// Sizing rule of any line of this table
    pub fn line_size<S: CellsSet + ?Sized>(&self, line: &S) -> LineSize {
        if let Some(size) = line.own_size() {
            LineSize::Explicit(size)
        } else if line.is_auto_fit() {
            LineSize::AutoFit
        } else {
            LineSize::Fallback(match line.axis() {
                Axis::Row => self.average_row_height(),
                Axis::Column => self.average_column_width(),
            })
        }
    }
}

fn average<I: Iterator<Item = f64>>(sizes: I) -> Option<f64> {
    let (sum, count) = sizes.fold((0.0, 0usize), |(sum, count), size| (sum + size, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
