//! # table-builder-sheet
//!
//! Spreadsheet renderer for table-builder tables.
//!
//! [`SheetConverter`] implements [`TableConverter`](table_builder_core::TableConverter)
//! and writes a [`Table`](table_builder_core::Table) into an in-memory
//! [`SheetDocument`]: cell values and number formats, formulas, pictures,
//! pooled cell styles, row heights, column widths, merged ranges, frozen
//! rows and an auto-filter.

pub mod autofit;
pub mod converter;
pub mod document;
pub mod error;
pub mod style;

pub use converter::SheetConverter;
pub use document::{
    FreezePanes, Picture, Sheet, SheetCell, SheetDocument, SheetLine, SheetValue,
    MAX_SHEET_NAME_LEN,
};
pub use error::{SheetError, SheetResult};
pub use style::{SheetBorderStyle, SheetFont, SheetHorizontal, SheetStyle, SheetVertical, StylePool};
