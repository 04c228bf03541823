//! Fluent construction of tables
//!
//! [`TableBuilder`] owns the [`Table`](crate::Table) under construction and
//! hands out short-lived builders for one row, column or cell. Every
//! mutator returns the same builder so calls can be chained; fallible
//! mutators return `Result<&mut Self>` and leave the table unchanged on
//! error.
//!
//! ```
//! use table_builder_core::{CellFormatStyle, TableBuilder};
//!
//! # fn main() -> table_builder_core::Result<()> {
//! let mut builder = TableBuilder::with_size(2, 3);
//! builder
//!     .row(0)?
//!     .set_height(20.0)?
//!     .set_format(CellFormatStyle::new().bold(true))
//!     .merge_row()?;
//! builder.cell(1, 0)?.set_text("total").merge_next(2)?;
//!
//! let table = builder.build();
//! assert_eq!(table.merge_area_count(), 2);
//! # Ok(())
//! # }
//! ```

mod cell;
mod column;
mod row;
mod table;

pub use cell::CellBuilder;
pub use column::ColumnBuilder;
pub use row::RowBuilder;
pub use table::TableBuilder;

use crate::error::{Error, Result};

/// Check that an explicit row height or column width is a positive number
pub(crate) fn check_size(name: &'static str, size: f64) -> Result<()> {
    if size <= 0.0 || !size.is_finite() {
        return Err(Error::invalid_argument(
            name,
            format!("must be a positive number, got {}", size),
        ));
    }
    Ok(())
}
