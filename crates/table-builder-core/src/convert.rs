//! The contract between a finished [`Table`] and the renderers that materialize it
//!
//! A renderer implements [`TableConverter`]. For every cell it resolves the
//! format ([`Table::resolve_format`]), translates the content variant, sizes
//! rows and columns ([`Table::row_size`], [`Table::column_size`]) and emits
//! each distinct merge area exactly once ([`EmittedMerges`](crate::EmittedMerges)).
//! Values it has no mapping for are reported as
//! [`Error::UnsupportedVariant`]; a failed conversion returns no document.

use ahash::AHashMap;

use crate::cell::{CellRange, FormulaKind};
use crate::error::{Error, Result};
use crate::table::Table;

/// Section name used when the parameters do not name one
pub const DEFAULT_SECTION_NAME: &str = "Sheet1";

/// A renderer turning a [`Table`] into its native document type
pub trait TableConverter {
    /// The native document produced (and optionally appended into)
    type Document;

    /// Renderer error type; core errors must convert into it
    type Error: From<Error>;

    /// Materialize `table` according to `parameters`
    fn convert(
        &self,
        table: &Table,
        parameters: ConverterParameters<Self::Document>,
    ) -> std::result::Result<Self::Document, Self::Error>;
}

/// Options recognized by every renderer
#[derive(Debug, Clone)]
pub struct ConverterParameters<D> {
    /// Existing document to append into; a new one is created when `None`
    pub target_document: Option<D>,
    /// Name of the sheet or section to create
    pub section_name: Option<String>,
    /// Number of leading rows kept visible while scrolling
    pub freeze_leading_rows: u32,
    /// Auto-filter rectangle
    pub auto_filter: Option<AutoFilterRange>,
}

impl<D> Default for ConverterParameters<D> {
    fn default() -> Self {
        Self {
            target_document: None,
            section_name: None,
            freeze_leading_rows: 0,
            auto_filter: None,
        }
    }
}

impl<D> ConverterParameters<D> {
    /// Parameters with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Append into an existing document
    pub fn with_target_document(mut self, document: D) -> Self {
        self.target_document = Some(document);
        self
    }

    /// Name the created sheet or section
    pub fn with_section_name<S: Into<String>>(mut self, name: S) -> Self {
        self.section_name = Some(name.into());
        self
    }

    /// Freeze the first `rows` rows
    pub fn with_freeze_leading_rows(mut self, rows: u32) -> Self {
        self.freeze_leading_rows = rows;
        self
    }

    /// Apply an auto-filter
    pub fn with_auto_filter(mut self, range: AutoFilterRange) -> Self {
        self.auto_filter = Some(range);
        self
    }

    /// The section name, or [`DEFAULT_SECTION_NAME`]
    pub fn section_name_or_default(&self) -> &str {
        self.section_name.as_deref().unwrap_or(DEFAULT_SECTION_NAME)
    }

    /// The auto-filter, if one is set and enabled
    pub fn enabled_auto_filter(&self) -> Option<AutoFilterRange> {
        self.auto_filter.filter(AutoFilterRange::is_enabled)
    }
}

/// Auto-filter rectangle in 1-based host coordinates
///
/// A zero or negative bound disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoFilterRange {
    pub from_row: i64,
    pub from_column: i64,
    pub to_row: i64,
    pub to_column: i64,
}

impl AutoFilterRange {
    /// Create a filter rectangle
    pub fn new(from_row: i64, from_column: i64, to_row: i64, to_column: i64) -> Self {
        Self {
            from_row,
            from_column,
            to_row,
            to_column,
        }
    }

    /// Check if the filter applies (both start bounds positive)
    pub fn is_enabled(&self) -> bool {
        self.from_row > 0 && self.from_column > 0
    }

    /// The filter as a 0-based range, if enabled
    pub fn to_cell_range(&self) -> Option<CellRange> {
        if !self.is_enabled() {
            return None;
        }
        let index = |n: i64| usize::try_from(n - 1).ok();
        Some(CellRange::from_indices(
            index(self.from_row)?,
            index(self.from_column)?,
            index(self.to_row)?,
            index(self.to_column)?,
        ))
    }
}

/// Mapping from formula kinds to a renderer's native function names
#[derive(Debug, Clone)]
pub struct FunctionNames {
    names: AHashMap<FormulaKind, String>,
}

impl FunctionNames {
    /// A mapping with no entries
    pub fn empty() -> Self {
        Self {
            names: AHashMap::new(),
        }
    }

    /// Spreadsheet function names for every formula kind
    pub fn spreadsheet() -> Self {
        [
            (FormulaKind::Sum, "SUM"),
            (FormulaKind::Average, "AVERAGE"),
            (FormulaKind::Min, "MIN"),
            (FormulaKind::Max, "MAX"),
            (FormulaKind::Count, "COUNT"),
            (FormulaKind::Product, "PRODUCT"),
        ]
        .into_iter()
        .fold(Self::empty(), |names, (kind, name)| names.with(kind, name))
    }

    /// Set the name for one kind
    pub fn with<S: Into<String>>(mut self, kind: FormulaKind, name: S) -> Self {
        self.names.insert(kind, name.into());
        self
    }

    /// Remove the name for one kind
    pub fn without(mut self, kind: FormulaKind) -> Self {
        self.names.remove(&kind);
        self
    }

    /// Native name of `kind`
    pub fn get(&self, kind: FormulaKind) -> Result<&str> {
        self.names
            .get(&kind)
            .map(String::as_str)
            .ok_or_else(|| Error::unsupported("formula kind", kind))
    }

    /// Native formula text such as `SUM(B2:B10)`
    ///
    /// `range` is in table coordinates; `origin` is where the table's
    /// top-left cell lands in the target (0-based).
    pub fn formula_text(
        &self,
        kind: FormulaKind,
        range: CellRange,
        origin: (usize, usize),
    ) -> Result<String> {
        let name = self.get(kind)?;
        Ok(format!("{}({})", name, range.offset(origin.0, origin.1)))
    }
}

impl Default for FunctionNames {
    fn default() -> Self {
        Self::spreadsheet()
    }
}
