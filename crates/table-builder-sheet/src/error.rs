//! Sheet renderer error types

use thiserror::Error;

/// Result type for sheet rendering
pub type SheetResult<T> = std::result::Result<T, SheetError>;

/// Errors that can occur while rendering a table into a sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] table_builder_core::Error),

    /// A style or content value has no sheet equivalent
    #[error("Unsupported {kind} value {value} in cell {cell}")]
    UnsupportedVariant {
        /// Kind of value (e.g. "border type")
        kind: &'static str,
        /// Debug rendering of the value
        value: String,
        /// Table cell in A1 notation
        cell: String,
    },

    /// The target document already has a sheet with this name
    #[error("Sheet already exists: {0}")]
    DuplicateSheet(String),

    /// Sheet names must be 1 to 31 characters long
    #[error("Invalid sheet name: {0:?}")]
    InvalidSheetName(String),
}

impl SheetError {
    pub(crate) fn unsupported<V: std::fmt::Debug>(
        kind: &'static str,
        value: V,
        cell: table_builder_core::CellAddress,
    ) -> Self {
        SheetError::UnsupportedVariant {
            kind,
            value: format!("{:?}", value),
            cell: cell.to_a1_string(),
        }
    }

    /// Attach a cell address to a core [`UnsupportedVariant`](table_builder_core::Error::UnsupportedVariant)
    pub(crate) fn at_cell(error: table_builder_core::Error, cell: table_builder_core::CellAddress) -> Self {
        match error {
            table_builder_core::Error::UnsupportedVariant { kind, value } => {
                SheetError::UnsupportedVariant {
                    kind,
                    value,
                    cell: cell.to_a1_string(),
                }
            }
            other => SheetError::Core(other),
        }
    }
}
