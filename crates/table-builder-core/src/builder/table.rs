//! Builder for a whole table

use super::{CellBuilder, ColumnBuilder, RowBuilder};
use crate::cell::{CellAddress, CellContent, CellRange};
use crate::error::Result;
use crate::style::CellFormatStyle;
use crate::table::Table;

/// Builder owning the table under construction
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Start from an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a table with `rows` x `columns` empty cells
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self::from_table(Table::with_size(rows, columns))
    }

    /// Continue building an existing table
    pub fn from_table(table: Table) -> Self {
        Self { table }
    }

    /// The table built so far
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Finish building
    pub fn build(self) -> Table {
        self.table
    }

    /// Append a row and return its builder
    pub fn add_row(&mut self) -> RowBuilder<'_> {
        let index = self.table.add_row();
        RowBuilder::new(&mut self.table, index)
    }

    /// Append `count` rows
    pub fn add_rows(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.table.add_row();
        }
        self
    }

    /// Append a column and return its builder
    pub fn add_column(&mut self) -> ColumnBuilder<'_> {
        let index = self.table.add_column();
        ColumnBuilder::new(&mut self.table, index)
    }

    /// Append `count` columns
    pub fn add_columns(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.table.add_column();
        }
        self
    }

    /// Insert a row before `index` (or append when `index` is the row count)
    pub fn insert_row(&mut self, index: usize) -> Result<RowBuilder<'_>> {
        self.table.insert_row(index)?;
        Ok(RowBuilder::new(&mut self.table, index))
    }

    /// Insert a column before `index` (or append when `index` is the column count)
    pub fn insert_column(&mut self, index: usize) -> Result<ColumnBuilder<'_>> {
        self.table.insert_column(index)?;
        Ok(ColumnBuilder::new(&mut self.table, index))
    }

    /// Builder for an existing row
    pub fn row(&mut self, index: usize) -> Result<RowBuilder<'_>> {
        self.table.row(index)?;
        Ok(RowBuilder::new(&mut self.table, index))
    }

    /// Builder for an existing column
    pub fn column(&mut self, index: usize) -> Result<ColumnBuilder<'_>> {
        self.table.column(index)?;
        Ok(ColumnBuilder::new(&mut self.table, index))
    }

    /// Builder for an existing cell
    pub fn cell(&mut self, row: usize, column: usize) -> Result<CellBuilder<'_>> {
        CellBuilder::new(&mut self.table, CellAddress::new(row, column))
    }

    /// Replace the table-wide default format
    pub fn set_default_format(&mut self, format: CellFormatStyle) -> &mut Self {
        self.table.default_format = format;
        self
    }

    /// Set format fields on every cell of `range`
    ///
    /// Fields set in `format` replace the cells' own; fields it leaves unset
    /// keep the cells' values. Fails without changing anything if the range
    /// leaves the table.
    pub fn set_range_format(&mut self, range: CellRange, format: &CellFormatStyle) -> Result<&mut Self> {
        self.table.check_address(range.end())?;
        for addr in range.cells() {
            let cell = self.table.cell_mut(addr)?;
            cell.format = format.collect(&cell.format);
        }
        Ok(self)
    }

    /// Append one row per item, filled by `map` starting at `start_column`
    ///
    /// Columns are appended when a mapped row is wider than the table.
    ///
    /// ```
    /// # use table_builder_core::{CellContent, TableBuilder};
    /// # fn main() -> table_builder_core::Result<()> {
    /// let people = [("Ada", 36), ("Alan", 41)];
    /// let mut builder = TableBuilder::new();
    /// builder.add_rows_from_list(&people, 0, |(name, age)| {
    ///     vec![CellContent::from(*name), CellContent::from(*age)]
    /// })?;
    /// let table = builder.build();
    /// assert_eq!((table.row_count(), table.column_count()), (2, 2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_rows_from_list<I, T, F>(
        &mut self,
        items: I,
        start_column: usize,
        mut map: F,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Vec<CellContent>,
    {
        for item in items {
            let contents = map(item);
            let width = start_column + contents.len();
            while self.table.column_count() < width {
                self.table.add_column();
            }

            let row = self.table.add_row();
            for (offset, content) in contents.into_iter().enumerate() {
                self.table
                    .cell_mut(CellAddress::new(row, start_column + offset))?
                    .content = content;
            }
        }
        Ok(self)
    }
}

impl From<Table> for TableBuilder {
    fn from(table: Table) -> Self {
        Self::from_table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sizing::{LineSize, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_by_two_scenario() {
        let mut builder = TableBuilder::with_size(2, 2);
        builder.set_default_format(CellFormatStyle::new().bold(false));
        builder.cell(0, 0).unwrap().merge_next(2).unwrap();
        builder
            .cell(1, 0)
            .unwrap()
            .set_format(CellFormatStyle::new().bold(true));
        let table = builder.build();

        let bold = |row, column| {
            table
                .resolve_format(CellAddress::new(row, column))
                .unwrap()
                .text
                .bold
        };
        assert!(bold(1, 0));
        assert!(!bold(0, 0));
        assert!(!bold(0, 1));
        assert!(!bold(1, 1));

        let areas: Vec<_> = table.merge_areas().map(|(_, range)| range).collect();
        assert_eq!(areas, vec![CellRange::from_indices(0, 0, 0, 1)]);

        for i in 0..2 {
            assert_eq!(table.row_size(i).unwrap(), LineSize::Fallback(DEFAULT_ROW_HEIGHT));
            assert_eq!(
                table.column_size(i).unwrap(),
                LineSize::Fallback(DEFAULT_COLUMN_WIDTH)
            );
        }
    }

    #[test]
    fn test_add_rows_and_columns() {
        let mut builder = TableBuilder::new();
        builder.add_columns(2).add_rows(3);
        builder.add_row().set_height(18.0).unwrap();
        builder.add_column().set_auto_fit(true);

        let table = builder.build();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cells().count(), 12);
        assert_eq!(table.rows()[3].height(), Some(18.0));
        assert_eq!(table.column_size(2).unwrap(), LineSize::AutoFit);
    }

    #[test]
    fn test_insert_row_moves_content_and_merges() {
        let mut builder = TableBuilder::with_size(2, 2);
        builder.cell(0, 0).unwrap().set_text("head").merge_next(2).unwrap();
        builder.cell(1, 0).unwrap().set_text("body");

        builder.insert_row(0).unwrap().fill(["new", "line"]).unwrap();

        let table = builder.build();
        assert_eq!(table.cell_at(0, 0).unwrap().content().value_text(), "new");
        assert_eq!(table.cell_at(1, 0).unwrap().content().value_text(), "head");
        assert_eq!(table.cell_at(2, 0).unwrap().content().value_text(), "body");
        assert_eq!(
            table.merge_areas().next().map(|(_, range)| range),
            Some(CellRange::from_indices(1, 0, 1, 1))
        );
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut builder = TableBuilder::with_size(1, 1);
        assert!(matches!(builder.insert_row(3), Err(Error::RowOutOfBounds(3, 1))));
        assert!(matches!(
            builder.insert_column(2),
            Err(Error::ColumnOutOfBounds(2, 1))
        ));
        assert!(builder.insert_column(1).is_ok());
    }

    #[test]
    fn test_set_range_format_overlays_fields() {
        let mut builder = TableBuilder::with_size(3, 3);
        builder
            .cell(1, 1)
            .unwrap()
            .set_format(CellFormatStyle::new().italic(true).background(Color::RED));

        builder
            .set_range_format(
                CellRange::from_indices(0, 0, 1, 1),
                &CellFormatStyle::new().background(Color::YELLOW),
            )
            .unwrap();

        let table = builder.build();
        let format = table.cell_at(1, 1).unwrap().format();
        assert_eq!(format.background_color, Some(Color::YELLOW));
        assert_eq!(format.text_format.italic, Some(true));
        assert_eq!(
            table.cell_at(0, 0).unwrap().format().background_color,
            Some(Color::YELLOW)
        );
        assert!(table.cell_at(2, 2).unwrap().format().is_empty());
    }

    #[test]
    fn test_set_range_format_out_of_bounds_changes_nothing() {
        let mut builder = TableBuilder::with_size(2, 2);
        let result = builder
            .set_range_format(
                CellRange::from_indices(0, 0, 2, 1),
                &CellFormatStyle::new().bold(true),
            )
            .map(|_| ());

        assert!(matches!(result, Err(Error::RowOutOfBounds(2, 2))));
        assert!(builder.table().cells().all(|c| c.format().is_empty()));
    }

    #[test]
    fn test_add_rows_from_list() {
        struct Item {
            name: &'static str,
            price: f64,
        }
        let items = vec![
            Item { name: "bolt", price: 0.25 },
            Item { name: "nut", price: 0.1 },
        ];

        let mut builder = TableBuilder::with_size(1, 1);
        builder.cell(0, 0).unwrap().set_text("#");
        builder
            .add_rows_from_list(items, 1, |item| {
                vec![
                    CellContent::from(item.name),
                    CellContent::numeric(item.price, "0.00"),
                ]
            })
            .unwrap();

        let table = builder.build();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert!(table.cell_at(1, 0).unwrap().content().is_empty());
        assert_eq!(table.cell_at(2, 1).unwrap().content().value_text(), "nut");
        assert_eq!(
            table.cell_at(1, 2).unwrap().content(),
            &CellContent::numeric(0.25, "0.00")
        );
    }

    #[test]
    fn test_from_table_continues_building() {
        let table = TableBuilder::with_size(1, 2).build();
        let mut builder = TableBuilder::from(table);
        builder.add_row();
        assert_eq!(builder.table().row_count(), 2);
    }
}
