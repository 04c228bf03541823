//! # table-builder
//!
//! Build formatted tables once and render them into spreadsheets and other hosts.
//!
//! ## Features
//!
//! - Rows, columns and cells with cascading formats (cell, row, column, table default)
//! - Plain values, numbers with a number format, formulas and images
//! - Validated merge areas that never overlap
//! - Explicit, content-fitted or averaged row heights and column widths
//! - A converter contract for renderers, with an in-memory spreadsheet renderer
//!
//! ## Example
//!
//! ```rust
//! use table_builder::prelude::*;
//!
//! let mut builder = TableBuilder::with_size(3, 2);
//! builder
//!     .row(0)
//!     .unwrap()
//!     .fill(["Item", "Price"])
//!     .unwrap()
//!     .set_format(CellFormatStyle::new().bold(true));
//! builder.cell(1, 0).unwrap().set_text("Bolt");
//! builder.cell(1, 1).unwrap().set_number(0.25, "0.00");
//! builder.cell(2, 0).unwrap().set_text("Total");
//! builder
//!     .cell(2, 1)
//!     .unwrap()
//!     .set_formula(FormulaKind::Sum, CellRange::from_indices(1, 1, 1, 1));
//! let table = builder.build();
//!
//! let document = SheetConverter::new()
//!     .convert(&table, ConverterParameters::new().with_freeze_leading_rows(1))
//!     .unwrap();
//! assert_eq!(document.sheets()[0].cells.len(), 6);
//! ```

pub mod prelude;

// Re-export core types
pub use table_builder_core::{
    builder, cell, cells_set, convert, merge, sizing, style, units, AutoFilterRange, Axis,
    BorderType, Cell, CellAddress, CellBorders, CellBuilder, CellContent, CellFormatStyle,
    CellRange, CellTextFormatStyle, CellValue, CellsSet, Color, Column, ColumnBuilder,
    ConverterParameters, EmittedMerges, Error, Fill, FormulaKind, FunctionNames,
    HorizontalAlignment, ImageContent, LineSize, MergeAreaId, ResolvedFormat, Result, Row,
    RowBuilder, Table, TableBuilder, TableConverter, VerticalAlignment, DEFAULT_COLUMN_WIDTH,
    DEFAULT_ROW_HEIGHT,
};

// Re-export the spreadsheet renderer
#[cfg(feature = "sheet")]
pub use table_builder_sheet::{
    FreezePanes, Picture, Sheet, SheetCell, SheetConverter, SheetDocument, SheetError,
    SheetLine, SheetResult, SheetStyle, SheetValue,
};

/// Spreadsheet renderer
#[cfg(feature = "sheet")]
pub mod sheet {
    pub use table_builder_sheet::*;
}
