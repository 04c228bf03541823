//! The line-of-cells abstraction shared by rows and columns

use crate::cell::Cell;
use crate::style::CellFormatStyle;
use crate::table::Table;

/// Direction of a line of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Cells sharing a row, left to right
    Row,
    /// Cells sharing a column, top to bottom
    Column,
}

impl Axis {
    /// Lowercase name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// Capabilities of a line of cells ([`Row`](crate::Row) or [`Column`](crate::Column))
pub trait CellsSet {
    /// Direction of this line
    fn axis(&self) -> Axis;

    /// Position of this line in its table
    fn index(&self) -> usize;

    /// Explicit size (height for rows, width for columns), if one was set
    fn own_size(&self) -> Option<f64>;

    /// Whether the renderer should size this line from its content
    fn is_auto_fit(&self) -> bool;

    /// The line's own (possibly fully unset) format
    fn format(&self) -> &CellFormatStyle;

    /// Check if an explicit size was set
    fn has_own_size(&self) -> bool {
        self.own_size().is_some()
    }

    /// Cells of this line, in order
    fn cells<'t>(&self, table: &'t Table) -> LineCells<'t> {
        LineCells::new(table, self.axis(), self.index())
    }

    /// The line's format with unset fields taken from the table default
    fn composed_format(&self, table: &Table) -> CellFormatStyle {
        self.format().collect(table.default_format())
    }
}

/// Iterator over the cells of one row or column
pub struct LineCells<'t> {
    table: &'t Table,
    axis: Axis,
    index: usize,
    position: usize,
}

impl<'t> LineCells<'t> {
    pub(crate) fn new(table: &'t Table, axis: Axis, index: usize) -> Self {
        Self {
            table,
            axis,
            index,
            position: 0,
        }
    }
}

impl<'t> Iterator for LineCells<'t> {
    type Item = &'t Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = match self.axis {
            Axis::Row => self.table.cell_at(self.index, self.position),
            Axis::Column => self.table.cell_at(self.position, self.index),
        }?;
        self.position += 1;
        Some(cell)
    }
}
