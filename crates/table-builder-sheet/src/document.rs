//! In-memory spreadsheet document produced by [`SheetConverter`](crate::SheetConverter)
//!
//! Sheet positions are 1-based, as in spreadsheet hosts.

use table_builder_core::{CellAddress, CellRange, ImageContent};

use crate::style::{SheetStyle, StylePool};

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// A workbook-like document: named sheets sharing one style pool
#[derive(Debug, Clone, Default)]
pub struct SheetDocument {
    pub(crate) sections: Vec<Sheet>,
    pub(crate) styles: StylePool,
}

impl SheetDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheets in creation order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sections
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sections.len()
    }

    /// Find a sheet by name (case-insensitive, as hosts compare sheet names)
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        let name = name.to_lowercase();
        self.sections
            .iter()
            .find(|sheet| sheet.name.to_lowercase() == name)
    }

    /// The shared style pool
    pub fn styles(&self) -> &StylePool {
        &self.styles
    }

    /// Style of a cell
    pub fn style_of(&self, cell: &SheetCell) -> Option<&SheetStyle> {
        self.styles.get(cell.style)
    }
}

/// One sheet of a [`SheetDocument`]
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    /// Cells in the order they were written
    pub cells: Vec<SheetCell>,
    pub columns: Vec<SheetLine>,
    pub rows: Vec<SheetLine>,
    /// Merged ranges in sheet coordinates, each listed once
    pub merges: Vec<CellRange>,
    pub pictures: Vec<Picture>,
    pub freeze: Option<FreezePanes>,
    /// Auto-filter range in sheet coordinates
    pub auto_filter: Option<CellRange>,
}

impl Sheet {
    pub(crate) fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get a cell by 1-based row and column
    pub fn cell(&self, row: u32, column: u32) -> Option<&SheetCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
    }

    /// Get a column by 1-based index
    pub fn column(&self, index: u32) -> Option<&SheetLine> {
        self.columns.iter().find(|line| line.index == index)
    }

    /// Get a row by 1-based index
    pub fn row(&self, index: u32) -> Option<&SheetLine> {
        self.rows.iter().find(|line| line.index == index)
    }
}

/// A written cell
#[derive(Debug, Clone, PartialEq)]
pub struct SheetCell {
    /// 1-based row
    pub row: u32,
    /// 1-based column
    pub column: u32,
    pub value: SheetValue,
    /// Number format code for numeric cells
    pub number_format: Option<String>,
    /// Index into the document's [`StylePool`]
    pub style: u32,
}

impl SheetCell {
    /// Cell reference in A1 notation
    pub fn reference(&self) -> String {
        to_address(self.row, self.column).to_a1_string()
    }
}

/// Value of a written cell
#[derive(Debug, Clone, PartialEq)]
pub enum SheetValue {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Formula text without the leading `=`
    Formula(String),
}

/// Size of a written row or column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLine {
    /// 1-based index
    pub index: u32,
    /// Width in character units (columns) or height in points (rows)
    pub size: f64,
    /// Whether the size was measured from the content
    pub auto_fit: bool,
}

/// An image anchored to a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// 1-based row of the anchor cell
    pub row: u32,
    /// 1-based column of the anchor cell
    pub column: u32,
    /// Pixel offset from the anchor cell's left edge
    pub offset_x: i64,
    /// Pixel offset from the anchor cell's top edge
    pub offset_y: i64,
    /// Displayed width in pixels
    pub width_px: f64,
    /// Displayed height in pixels
    pub height_px: f64,
    pub image: ImageContent,
}

/// Frozen leading rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezePanes {
    pub rows: u32,
    pub columns: u32,
}

pub(crate) fn to_address(row: u32, column: u32) -> CellAddress {
    CellAddress::new(
        row.saturating_sub(1) as usize,
        column.saturating_sub(1) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_reference() {
        let cell = SheetCell {
            row: 3,
            column: 28,
            value: SheetValue::Empty,
            number_format: None,
            style: 0,
        };
        assert_eq!(cell.reference(), "AB3");
    }

    #[test]
    fn test_sheet_lookup_ignores_case() {
        let mut document = SheetDocument::new();
        document.sections.push(Sheet::new("Report"));

        document.sections.push(Sheet::new("Итоги"));

        assert!(document.sheet("report").is_some());
        assert!(document.sheet("ИТОГИ").is_some());
        assert!(document.sheet("Other").is_none());
        assert_eq!(document.sheet_count(), 2);
    }
}
