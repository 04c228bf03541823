//! Table type

use crate::cell::{Cell, CellAddress, CellRange};
use crate::cells_set::{Axis, CellsSet};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::style::{CellFormatStyle, ResolvedFormat};

/// A grid of cells with rows, columns, merge areas and a default format
///
/// Every `(row, column)` pair in range has exactly one [`Cell`]. Tables are
/// populated through [`TableBuilder`](crate::TableBuilder); once built they
/// are read-only.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
    pub(crate) columns: Vec<Column>,
    /// Row-major cell grid: `cells[row][column]`
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) merge_areas: Vec<CellRange>,
    pub(crate) default_format: CellFormatStyle,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with `rows` x `columns` empty cells
    pub fn with_size(rows: usize, columns: usize) -> Self {
        let mut table = Self::new();
        for _ in 0..columns {
            table.add_column();
        }
        for _ in 0..rows {
            table.add_row();
        }
        table
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or(Error::RowOutOfBounds(index, self.rows.len()))
    }

    /// Get a column by index
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnOutOfBounds(index, self.columns.len()))
    }

    /// Get a cell by address
    pub fn cell(&self, addr: CellAddress) -> Result<&Cell> {
        self.check_address(addr)?;
        self.cell_at(addr.row, addr.column)
            .ok_or(Error::RowOutOfBounds(addr.row, self.rows.len()))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    /// Iterate over all cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Iterate over all cells, column by column
    pub fn cells_by_column(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.columns.iter().flat_map(move |column| column.cells(self))
    }

    /// The table-wide default format
    pub fn default_format(&self) -> &CellFormatStyle {
        &self.default_format
    }

    /// The range covering the whole table, if it has any cells
    pub fn bounds(&self) -> Option<CellRange> {
        if self.is_empty() {
            None
        } else {
            Some(CellRange::from_indices(
                0,
                0,
                self.rows.len() - 1,
                self.columns.len() - 1,
            ))
        }
    }

    /// Compose a cell's format from its cell, row, column and table formats
    ///
    /// Each field is taken from the first format that sets it, in the order
    /// cell, row, column, table default. Fields no format sets stay unset.
    pub fn composed_format(&self, addr: CellAddress) -> Result<CellFormatStyle> {
        let cell = self.cell(addr)?;
        let row = self.row(addr.row)?;
        let column = self.column(addr.column)?;

        Ok(cell
            .format
            .collect(&row.format)
            .collect(&column.format)
            .collect(&self.default_format))
    }

    /// Resolve a cell's format with no field left unset
    pub fn resolve_format(&self, addr: CellAddress) -> Result<ResolvedFormat> {
        Ok(self.composed_format(addr)?.resolve())
    }

    // === Structure (used by the builders) ===

    pub(crate) fn check_address(&self, addr: CellAddress) -> Result<()> {
        if addr.row >= self.rows.len() {
            return Err(Error::RowOutOfBounds(addr.row, self.rows.len()));
        }
        if addr.column >= self.columns.len() {
            return Err(Error::ColumnOutOfBounds(addr.column, self.columns.len()));
        }
        Ok(())
    }

    pub(crate) fn cell_mut(&mut self, addr: CellAddress) -> Result<&mut Cell> {
        self.check_address(addr)?;
        let rows = self.rows.len();
        self.cells
            .get_mut(addr.row)
            .and_then(|cells| cells.get_mut(addr.column))
            .ok_or(Error::RowOutOfBounds(addr.row, rows))
    }

    pub(crate) fn add_row(&mut self) -> usize {
        let index = self.rows.len();
        self.insert_row_unchecked(index);
        index
    }

    pub(crate) fn add_column(&mut self) -> usize {
        let index = self.columns.len();
        self.insert_column_unchecked(index);
        index
    }

    pub(crate) fn insert_row(&mut self, index: usize) -> Result<()> {
        if index > self.rows.len() {
            return Err(Error::RowOutOfBounds(index, self.rows.len()));
        }
        self.insert_row_unchecked(index);
        Ok(())
    }

    pub(crate) fn insert_column(&mut self, index: usize) -> Result<()> {
        if index > self.columns.len() {
            return Err(Error::ColumnOutOfBounds(index, self.columns.len()));
        }
        self.insert_column_unchecked(index);
        Ok(())
    }

    fn insert_row_unchecked(&mut self, index: usize) {
        let cells = (0..self.columns.len())
            .map(|column| Cell::new(index, column))
            .collect();
        self.rows.insert(index, Row::new(index));
        self.cells.insert(index, cells);

        for (i, row) in self.rows.iter_mut().enumerate().skip(index + 1) {
            row.index = i;
        }
        for (i, cells) in self.cells.iter_mut().enumerate().skip(index + 1) {
            for cell in cells {
                cell.address.row = i;
            }
        }

        self.shift_merge_areas(Axis::Row, index);
        log::debug!("inserted row {} ({} rows)", index, self.rows.len());
    }

    fn insert_column_unchecked(&mut self, index: usize) {
        self.columns.insert(index, Column::new(index));
        for (row, cells) in self.cells.iter_mut().enumerate() {
            cells.insert(index, Cell::new(row, index));
            for (i, cell) in cells.iter_mut().enumerate().skip(index + 1) {
                cell.address.column = i;
            }
        }
        for (i, column) in self.columns.iter_mut().enumerate().skip(index + 1) {
            column.index = i;
        }

        self.shift_merge_areas(Axis::Column, index);
        log::debug!(
            "inserted column {} ({} columns)",
            index,
            self.columns.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, HorizontalAlignment};
    use crate::CellContent;

    #[test]
    fn test_new_table() {
        let table = Table::with_size(3, 2);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cells().count(), 6);
        assert_eq!(table.bounds(), Some(CellRange::from_indices(0, 0, 2, 1)));
        assert!(Table::new().bounds().is_none());

        for cell in table.cells() {
            assert!(cell.content().is_empty());
            assert!(cell.format().is_empty());
            assert!(!cell.is_merged());
        }
    }

    #[test]
    fn test_cell_lookup_out_of_bounds() {
        let table = Table::with_size(2, 2);
        assert!(matches!(
            table.cell(CellAddress::new(2, 0)),
            Err(Error::RowOutOfBounds(2, 2))
        ));
        assert!(matches!(
            table.cell(CellAddress::new(0, 5)),
            Err(Error::ColumnOutOfBounds(5, 2))
        ));
        assert!(table.row(9).is_err());
        assert!(table.column(9).is_err());
    }

    #[test]
    fn test_cells_by_column_order() {
        let table = Table::with_size(2, 2);
        let order: Vec<_> = table.cells_by_column().map(|c| c.address()).collect();
        assert_eq!(
            order,
            vec![
                CellAddress::new(0, 0),
                CellAddress::new(1, 0),
                CellAddress::new(0, 1),
                CellAddress::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_insert_row_reindexes_cells() {
        let mut table = Table::with_size(2, 2);
        table.cell_mut(CellAddress::new(1, 1)).unwrap().content = CellContent::from("moved");

        table.insert_row(0).unwrap();

        assert_eq!(table.row_count(), 3);
        let moved = table.cell(CellAddress::new(2, 1)).unwrap();
        assert_eq!(moved.content(), &CellContent::from("moved"));
        assert_eq!(moved.address(), CellAddress::new(2, 1));
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
        }
        assert!(table.insert_row(7).is_err());
    }

    #[test]
    fn test_insert_column_reindexes_cells() {
        let mut table = Table::with_size(2, 2);
        table.cell_mut(CellAddress::new(0, 1)).unwrap().content = CellContent::from(1);

        table.insert_column(1).unwrap();

        assert_eq!(table.column_count(), 3);
        assert!(table.cell(CellAddress::new(0, 1)).unwrap().content().is_empty());
        let moved = table.cell(CellAddress::new(0, 2)).unwrap();
        assert_eq!(moved.content(), &CellContent::from(1));
        assert_eq!(moved.column_index(), 2);
        for (i, column) in table.columns().iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_composed_format_precedence() {
        let mut table = Table::with_size(1, 1);
        table.default_format = CellFormatStyle::new()
            .bold(false)
            .background(Color::WHITE)
            .text_size(10.0);
        table.columns[0].format = CellFormatStyle::new()
            .background(Color::GRAY)
            .italic(true)
            .horizontal_alignment(HorizontalAlignment::Right);
        table.rows[0].format = CellFormatStyle::new()
            .background(Color::YELLOW)
            .horizontal_alignment(HorizontalAlignment::Left);
        table.cell_mut(CellAddress::new(0, 0)).unwrap().format =
            CellFormatStyle::new().bold(true);

        let composed = table.composed_format(CellAddress::new(0, 0)).unwrap();

        assert_eq!(composed.text_format.bold, Some(true)); // cell
        assert_eq!(composed.background_color, Some(Color::YELLOW)); // row over column
        assert_eq!(
            composed.content_horizontal_alignment,
            Some(HorizontalAlignment::Left)
        );
        assert_eq!(composed.text_format.italic, Some(true)); // column
        assert_eq!(composed.text_format.text_size, Some(10.0)); // table
        assert_eq!(composed.text_format.font_family, None);
    }
}
