//! Builder for a single cell

use crate::cell::{Cell, CellAddress, CellContent, CellRange, CellValue, FormulaKind, ImageContent};
use crate::cells_set::Axis;
use crate::error::{Error, Result};
use crate::style::CellFormatStyle;
use crate::table::Table;

/// Builder for one cell of a table
#[derive(Debug)]
pub struct CellBuilder<'a> {
    table: &'a mut Table,
    address: CellAddress,
}

impl<'a> CellBuilder<'a> {
    pub(crate) fn new(table: &'a mut Table, address: CellAddress) -> Result<Self> {
        table.check_address(address)?;
        Ok(Self { table, address })
    }

    /// Address of the cell being built
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Replace the cell content
    pub fn set_content<C: Into<CellContent>>(&mut self, content: C) -> &mut Self {
        self.with_cell(|cell| cell.content = content.into());
        self
    }

    /// Set a plain value
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) -> &mut Self {
        self.set_content(CellContent::Value(value.into()))
    }

    /// Set a text value
    pub fn set_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.set_value(CellValue::Text(text.into()))
    }

    /// Set a number displayed with `format` (e.g. `"0.00"`)
    pub fn set_number<S: Into<String>>(&mut self, value: f64, format: S) -> &mut Self {
        self.set_content(CellContent::numeric(value, format))
    }

    /// Set a formula over `range`
    pub fn set_formula(&mut self, kind: FormulaKind, range: CellRange) -> &mut Self {
        self.set_content(CellContent::formula(kind, range))
    }

    /// Set an image
    pub fn set_image(&mut self, image: ImageContent) -> &mut Self {
        self.set_content(CellContent::Image(image))
    }

    /// Replace the cell's own format
    pub fn set_format(&mut self, format: CellFormatStyle) -> &mut Self {
        self.with_cell(|cell| cell.format = format);
        self
    }

    /// Modify the cell's own format
    ///
    /// ```
    /// # use table_builder_core::TableBuilder;
    /// # fn main() -> table_builder_core::Result<()> {
    /// let mut builder = TableBuilder::with_size(1, 1);
    /// builder.cell(0, 0)?.update_format(|f| f.bold(true).italic(true));
    /// # Ok(())
    /// # }
    /// ```
    pub fn update_format<F>(&mut self, update: F) -> &mut Self
    where
        F: FnOnce(CellFormatStyle) -> CellFormatStyle,
    {
        self.with_cell(|cell| cell.format = update(std::mem::take(&mut cell.format)));
        self
    }

    /// Merge this cell with the cells to its right; `count` includes this cell
    pub fn merge_next(&mut self, count: usize) -> Result<&mut Self> {
        self.table.merge_run(self.address, count, Axis::Row)?;
        Ok(self)
    }

    /// Merge this cell with the cells below it; `count` includes this cell
    pub fn merge_down(&mut self, count: usize) -> Result<&mut Self> {
        self.table.merge_run(self.address, count, Axis::Column)?;
        Ok(self)
    }

    /// Merge the `rows` x `columns` rectangle whose top-left cell is this cell
    pub fn merge_area(&mut self, rows: usize, columns: usize) -> Result<&mut Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::invalid_argument(
                "rows/columns",
                format!("a merge area needs at least one row and column, got {}x{}", rows, columns),
            ));
        }
        self.table.merge_span(self.address, rows, columns)?;
        Ok(self)
    }

    // The address is checked in `new` and lines are never removed.
    fn with_cell<F: FnOnce(&mut Cell)>(&mut self, f: F) {
        f(&mut self.table.cells[self.address.row][self.address.column]);
    }
}
