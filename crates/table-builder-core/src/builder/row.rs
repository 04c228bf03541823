//! Builder for a single row

use super::{check_size, CellBuilder};
use crate::cell::{CellAddress, CellContent};
use crate::cells_set::Axis;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::style::CellFormatStyle;
use crate::table::Table;

/// Builder for one row of a table
#[derive(Debug)]
pub struct RowBuilder<'a> {
    table: &'a mut Table,
    index: usize,
}

impl<'a> RowBuilder<'a> {
    // Callers check `index` first.
    pub(crate) fn new(table: &'a mut Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Index of the row being built
    pub fn index(&self) -> usize {
        self.index
    }

    /// Set an explicit height
    ///
    /// Fails with [`Error::InvalidArgument`] unless `height` is positive;
    /// the height is left unchanged then.
    pub fn set_height(&mut self, height: f64) -> Result<&mut Self> {
        check_size("height", height)?;
        self.with_row(|row| row.height = Some(height));
        Ok(self)
    }

    /// Size the row from its content when no explicit height is set
    pub fn set_auto_fit(&mut self, auto_fit: bool) -> &mut Self {
        self.with_row(|row| row.auto_fit = auto_fit);
        self
    }

    /// Replace the row format
    pub fn set_format(&mut self, format: CellFormatStyle) -> &mut Self {
        self.with_row(|row| row.format = format);
        self
    }

    /// Modify the row format
    pub fn update_format<F>(&mut self, update: F) -> &mut Self
    where
        F: FnOnce(CellFormatStyle) -> CellFormatStyle,
    {
        self.with_row(|row| row.format = update(std::mem::take(&mut row.format)));
        self
    }

    /// Builder for the cell of this row in column `column`
    pub fn cell(&mut self, column: usize) -> Result<CellBuilder<'_>> {
        CellBuilder::new(self.table, CellAddress::new(self.index, column))
    }

    /// Set the contents of the leading cells, left to right
    ///
    /// Fails without changing anything if there are more values than columns.
    pub fn fill<I, C>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<CellContent>,
    {
        self.fill_from(0, values)
    }

    /// Set the contents of consecutive cells starting at column `start`
    pub fn fill_from<I, C>(&mut self, start: usize, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<CellContent>,
    {
        let values: Vec<CellContent> = values.into_iter().map(Into::into).collect();
        let columns = self.table.column_count();
        match start.checked_add(values.len()) {
            Some(end) if end <= columns => {}
            end => {
                let last = end.map_or(usize::MAX, |end| end - 1);
                return Err(Error::ColumnOutOfBounds(last, columns));
            }
        }

        for (offset, content) in values.into_iter().enumerate() {
            self.table
                .cell_mut(CellAddress::new(self.index, start + offset))?
                .content = content;
        }
        Ok(self)
    }

    /// Merge `count` cells of this row starting at column `start`
    pub fn merge(&mut self, start: usize, count: usize) -> Result<&mut Self> {
        self.table
            .merge_run(CellAddress::new(self.index, start), count, Axis::Row)?;
        Ok(self)
    }

    /// Merge every cell of the row
    pub fn merge_row(&mut self) -> Result<&mut Self> {
        let columns = self.table.column_count();
        self.merge(0, columns)
    }

    // Rows are never removed, so `index` stays valid while the table is borrowed.
    fn with_row<F: FnOnce(&mut Row)>(&mut self, f: F) {
        f(&mut self.table.rows[self.index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellRange;
    use crate::TableBuilder;

    #[test]
    fn test_set_height() {
        let mut builder = TableBuilder::with_size(2, 1);
        builder.row(1).unwrap().set_height(22.5).unwrap().set_auto_fit(true);

        let table = builder.build();
        assert_eq!(table.rows()[1].height(), Some(22.5));
        assert_eq!(table.rows()[0].height(), None);
    }

    #[test]
    fn test_set_height_rejects_non_positive() {
        let mut builder = TableBuilder::with_size(1, 1);
        builder.row(0).unwrap().set_height(10.0).unwrap();

        for height in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = builder.row(0).unwrap().set_height(height).map(|_| ());
            assert!(matches!(
                result,
                Err(Error::InvalidArgument { name: "height", .. })
            ));
        }
        assert_eq!(builder.table().rows()[0].height(), Some(10.0));
    }

    #[test]
    fn test_fill() {
        let mut builder = TableBuilder::with_size(1, 3);
        builder.row(0).unwrap().fill(["a", "b"]).unwrap();

        let table = builder.build();
        let texts: Vec<_> = table.cells().map(|c| c.content().value_text()).collect();
        assert_eq!(texts, vec!["a", "b", ""]);
    }

    #[test]
    fn test_fill_too_many_values_changes_nothing() {
        let mut builder = TableBuilder::with_size(1, 2);
        let result = builder.row(0).unwrap().fill([1, 2, 3]).map(|_| ());

        assert!(matches!(result, Err(Error::ColumnOutOfBounds(2, 2))));
        assert!(builder.table().cells().all(|c| c.content().is_empty()));
    }

    #[test]
    fn test_merge_row() {
        let mut builder = TableBuilder::with_size(2, 3);
        builder.row(1).unwrap().merge_row().unwrap();

        let table = builder.build();
        let (_, range) = table.merge_areas().next().unwrap();
        assert_eq!(range, CellRange::from_indices(1, 0, 1, 2));
    }

    #[test]
    fn test_overlapping_merge_keeps_first() {
        let mut builder = TableBuilder::with_size(1, 5);
        builder.row(0).unwrap().merge(0, 3).unwrap();

        let result = builder.row(0).unwrap().merge(1, 3).map(|_| ());
        assert!(matches!(result, Err(Error::InvalidRange { .. })));

        let table = builder.build();
        assert_eq!(table.merge_area_count(), 1);
        assert_eq!(
            table.merge_areas().next().map(|(_, range)| range),
            Some(CellRange::from_indices(0, 0, 0, 2))
        );
    }
}
