//! Row type

use crate::cells_set::{Axis, CellsSet};
use crate::style::CellFormatStyle;

/// A row of a table
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub(crate) index: usize,
    pub(crate) height: Option<f64>,
    pub(crate) auto_fit: bool,
    pub(crate) format: CellFormatStyle,
}

impl Row {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Explicit height, if set
    pub fn height(&self) -> Option<f64> {
        self.height
    }
}

impl CellsSet for Row {
    fn axis(&self) -> Axis {
        Axis::Row
    }

    fn index(&self) -> usize {
        self.index
    }

    fn own_size(&self) -> Option<f64> {
        self.height
    }

    fn is_auto_fit(&self) -> bool {
        self.auto_fit
    }

    fn format(&self) -> &CellFormatStyle {
        &self.format
    }
}
