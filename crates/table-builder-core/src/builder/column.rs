//! Builder for a single column

use super::{check_size, CellBuilder};
use crate::cell::{CellAddress, CellContent};
use crate::cells_set::Axis;
use crate::column::Column;
use crate::error::{Error, Result};
use crate::style::CellFormatStyle;
use crate::table::Table;

/// Builder for one column of a table
#[derive(Debug)]
pub struct ColumnBuilder<'a> {
    table: &'a mut Table,
    index: usize,
}

impl<'a> ColumnBuilder<'a> {
    // Callers check `index` first.
    pub(crate) fn new(table: &'a mut Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Index of the column being built
    pub fn index(&self) -> usize {
        self.index
    }

    /// Set an explicit width
    ///
    /// Fails with [`Error::InvalidArgument`] unless `width` is positive;
    /// the width is left unchanged then.
    pub fn set_width(&mut self, width: f64) -> Result<&mut Self> {
        check_size("width", width)?;
        self.with_column(|column| column.width = Some(width));
        Ok(self)
    }

    /// Size the column from its content when no explicit width is set
    pub fn set_auto_fit(&mut self, auto_fit: bool) -> &mut Self {
        self.with_column(|column| column.auto_fit = auto_fit);
        self
    }

    /// Replace the column format
    pub fn set_format(&mut self, format: CellFormatStyle) -> &mut Self {
        self.with_column(|column| column.format = format);
        self
    }

    /// Modify the column format
    pub fn update_format<F>(&mut self, update: F) -> &mut Self
    where
        F: FnOnce(CellFormatStyle) -> CellFormatStyle,
    {
        self.with_column(|column| column.format = update(std::mem::take(&mut column.format)));
        self
    }

    /// Builder for the cell of this column in row `row`
    pub fn cell(&mut self, row: usize) -> Result<CellBuilder<'_>> {
        CellBuilder::new(self.table, CellAddress::new(row, self.index))
    }

    /// Set the contents of the leading cells, top to bottom
    ///
    /// Fails without changing anything if there are more values than rows.
    pub fn fill<I, C>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<CellContent>,
    {
        let values: Vec<CellContent> = values.into_iter().map(Into::into).collect();
        let rows = self.table.row_count();
        if values.len() > rows {
            return Err(Error::RowOutOfBounds(values.len() - 1, rows));
        }

        for (row, content) in values.into_iter().enumerate() {
            self.table.cell_mut(CellAddress::new(row, self.index))?.content = content;
        }
        Ok(self)
    }

    /// Merge `count` cells of this column starting at row `start`
    pub fn merge(&mut self, start: usize, count: usize) -> Result<&mut Self> {
        self.table
            .merge_run(CellAddress::new(start, self.index), count, Axis::Column)?;
        Ok(self)
    }

    /// Merge every cell of the column
    pub fn merge_column(&mut self) -> Result<&mut Self> {
        let rows = self.table.row_count();
        self.merge(0, rows)
    }

    // Columns are never removed, so `index` stays valid while the table is borrowed.
    fn with_column<F: FnOnce(&mut Column)>(&mut self, f: F) {
        f(&mut self.table.columns[self.index]);
    }
}
