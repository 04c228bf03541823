//! Prelude module - common imports for table-builder users
//!
//! ```rust
//! use table_builder::prelude::*;
//! ```

pub use crate::{
    AutoFilterRange,
    BorderType,
    CellAddress,
    CellBorders,
    CellContent,
    CellFormatStyle,
    CellRange,
    CellValue,
    CellsSet,
    Color,
    ConverterParameters,
    Error,
    FormulaKind,
    HorizontalAlignment,
    ImageContent,
    LineSize,
    Result,
    Table,
    TableBuilder,
    TableConverter,
    VerticalAlignment,
};

#[cfg(feature = "sheet")]
pub use crate::{SheetConverter, SheetDocument, SheetError, SheetValue};
