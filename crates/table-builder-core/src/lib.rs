//! # table-builder-core
//!
//! Renderer-agnostic table model for the table-builder library.
//!
//! This crate provides:
//! - [`Table`], [`Row`], [`Column`], [`Cell`] - The grid and its lines
//! - [`CellContent`] - Plain values, numbers with a format, formulas and images
//! - [`CellFormatStyle`] - Cascading cell formatting where every field may be unset
//! - [`TableBuilder`] - Fluent, validated construction
//! - [`TableConverter`] - The contract renderers implement
//! - [`units`] - Pixel conversions based on the screen DPI
//!
//! ## Example
//!
//! ```rust
//! use table_builder_core::{CellAddress, CellFormatStyle, TableBuilder};
//!
//! let mut builder = TableBuilder::with_size(2, 2);
//! builder.set_default_format(CellFormatStyle::new().bold(false));
//! builder.cell(0, 0).unwrap().set_text("Title").merge_next(2).unwrap();
//! builder.cell(1, 0).unwrap().set_number(42.0, "0.0").update_format(|f| f.bold(true));
//!
//! let table = builder.build();
//! let resolved = table.resolve_format(CellAddress::new(1, 0)).unwrap();
//! assert!(resolved.text.bold);
//! assert_eq!(table.merge_area_count(), 1);
//! ```

pub mod builder;
pub mod cell;
pub mod cells_set;
pub mod column;
pub mod convert;
pub mod error;
pub mod merge;
pub mod row;
pub mod sizing;
pub mod style;
pub mod table;
pub mod units;

// Re-exports for convenience
pub use builder::{CellBuilder, ColumnBuilder, RowBuilder, TableBuilder};
pub use cell::{Cell, CellAddress, CellContent, CellRange, CellValue, FormulaKind, ImageContent};
pub use cells_set::{Axis, CellsSet};
pub use column::Column;
pub use convert::{AutoFilterRange, ConverterParameters, FunctionNames, TableConverter};
pub use error::{Error, Result};
pub use merge::{EmittedMerges, MergeAreaId};
pub use row::Row;
pub use sizing::{LineSize, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
pub use table::Table;

pub use style::{
    BorderType, CellBorders, CellFormatStyle, CellTextFormatStyle, Color, Fill,
    HorizontalAlignment, ResolvedBorders, ResolvedFormat, ResolvedText, VerticalAlignment,
};
