//! Column type

use crate::cells_set::{Axis, CellsSet};
use crate::style::CellFormatStyle;

/// A column of a table
#[derive(Debug, Clone, Default)]
pub struct Column {
    pub(crate) index: usize,
    pub(crate) width: Option<f64>,
    pub(crate) auto_fit: bool,
    pub(crate) format: CellFormatStyle,
}

impl Column {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Explicit width, if set
    pub fn width(&self) -> Option<f64> {
        self.width
    }
}

impl CellsSet for Column {
    fn axis(&self) -> Axis {
        Axis::Column
    }

    fn index(&self) -> usize {
        self.index
    }

    fn own_size(&self) -> Option<f64> {
        self.width
    }

    fn is_auto_fit(&self) -> bool {
        self.auto_fit
    }

    fn format(&self) -> &CellFormatStyle {
        &self.format
    }
}
