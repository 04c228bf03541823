//! Cell-related types
//!
//! This module contains:
//! - [`CellContent`] - What a cell holds (plain value, numeric, formula, image)
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangle of cells (e.g., "A1:B10")
//! - [`Cell`] - A cell of a table with its own format and merge membership

mod address;
mod content;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use content::{CellContent, CellValue, FormulaKind, ImageContent};

use crate::merge::MergeAreaId;
use crate::style::CellFormatStyle;

/// A single cell of a [`Table`](crate::Table)
///
/// The row and column indices are lookup handles into the owning table;
/// they are kept current by the table when lines are inserted.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub(crate) address: CellAddress,
    pub(crate) content: CellContent,
    pub(crate) format: CellFormatStyle,
    pub(crate) merge_area: Option<MergeAreaId>,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Self {
            address: CellAddress::new(row, column),
            ..Self::default()
        }
    }

    /// Position of the cell in its table
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Index of the row the cell belongs to
    pub fn row_index(&self) -> usize {
        self.address.row
    }

    /// Index of the column the cell belongs to
    pub fn column_index(&self) -> usize {
        self.address.column
    }

    /// Cell content
    pub fn content(&self) -> &CellContent {
        &self.content
    }

    /// The cell's own (possibly fully unset) format
    pub fn format(&self) -> &CellFormatStyle {
        &self.format
    }

    /// Merge area this cell is part of, if any
    pub fn merge_area(&self) -> Option<MergeAreaId> {
        self.merge_area
    }

    /// Check if the cell is part of a merge area
    pub fn is_merged(&self) -> bool {
        self.merge_area.is_some()
    }
}
