//! Cell content types

use std::fmt;
use std::sync::Arc;

use super::CellRange;
use crate::error::{Error, Result};

/// A plain value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Text value
    Text(String),

    /// Numeric value without an explicit number format
    Number(f64),

    /// Boolean value
    Boolean(bool),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Aggregate function a formula cell applies over a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaKind {
    /// Sum of the range
    Sum,
    /// Arithmetic mean of the range
    Average,
    /// Smallest value in the range
    Min,
    /// Largest value in the range
    Max,
    /// Number of numeric cells in the range
    Count,
    /// Product of the range
    Product,
}

/// An embedded picture placed in a cell
///
/// The natural pixel size travels with the encoded bytes so renderers can
/// position the picture without decoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContent {
    data: Arc<[u8]>,
    width_px: u32,
    height_px: u32,
    scale: f64,
}

impl ImageContent {
    /// Create an image with its natural size in pixels, at scale 1
    pub fn new<D: Into<Arc<[u8]>>>(data: D, width_px: u32, height_px: u32) -> Self {
        Self {
            data: data.into(),
            width_px,
            height_px,
            scale: 1.0,
        }
    }

    /// Set the scale factor applied when placing the image
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(Error::invalid_argument(
                "scale",
                format!("must be a positive number, got {}", scale),
            ));
        }
        self.scale = scale;
        Ok(self)
    }

    /// Encoded image bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Natural size in pixels
    pub fn natural_size(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Size in pixels after scaling
    pub fn scaled_size(&self) -> (f64, f64) {
        (
            self.width_px as f64 * self.scale,
            self.height_px as f64 * self.scale,
        )
    }
}

/// Content of a cell
///
/// The variant is chosen when the content is created; replacing it means
/// setting a whole new `CellContent`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Plain value
    Value(CellValue),

    /// Number displayed with a number format string (e.g. "0.00")
    Numeric {
        /// The number
        value: f64,
        /// Number format string
        format: String,
    },

    /// Aggregate formula over a rectangular range of the table
    Formula {
        /// Function applied to the range
        kind: FormulaKind,
        /// Referenced cells (table coordinates)
        range: CellRange,
    },

    /// Picture anchored to the cell
    Image(ImageContent),
}

impl CellContent {
    /// Create a numeric content with a number format
    pub fn numeric<S: Into<String>>(value: f64, format: S) -> Self {
        CellContent::Numeric {
            value,
            format: format.into(),
        }
    }

    /// Create a formula content
    pub fn formula(kind: FormulaKind, range: CellRange) -> Self {
        CellContent::Formula { kind, range }
    }

    /// Check if the content is an empty plain value
    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Value(CellValue::Empty))
    }

    /// Variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellContent::Value(v) => v.type_name(),
            CellContent::Numeric { .. } => "numeric",
            CellContent::Formula { .. } => "formula",
            CellContent::Image(_) => "image",
        }
    }

    /// Text shown for this content by renderers without native support for it
    pub fn value_text(&self) -> String {
        match self {
            CellContent::Value(v) => v.to_string(),
            CellContent::Numeric { value, .. } => value.to_string(),
            CellContent::Formula { kind, range } => format!("{:?}({})", kind, range),
            CellContent::Image(_) => String::new(),
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Value(CellValue::Empty)
    }
}

impl From<CellValue> for CellContent {
    fn from(value: CellValue) -> Self {
        CellContent::Value(value)
    }
}

macro_rules! content_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellContent {
                fn from(value: $ty) -> Self {
                    CellContent::Value(CellValue::from(value))
                }
            }
        )*
    };
}

content_from_value!(bool, i32, i64, f64, &str, String);

impl From<ImageContent> for CellContent {
    fn from(image: ImageContent) -> Self {
        CellContent::Image(image)
    }
}
