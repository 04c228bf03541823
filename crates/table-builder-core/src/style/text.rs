//! Text format types

use super::Color;

/// Text formatting of a cell; every field is independently set or inherited
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellTextFormatStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub font_family: Option<String>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Font size in points
    pub text_size: Option<f64>,
    /// Wrap long text onto several lines
    pub wrap_text: Option<bool>,
    /// Shrink text to fit the cell
    pub shrink_to_fit: Option<bool>,
    /// Text color
    pub text_color: Option<Color>,
}

impl CellTextFormatStyle {
    /// Text format with every field inherited
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unset field from `fallback`
    pub fn collect(&self, fallback: &CellTextFormatStyle) -> CellTextFormatStyle {
        CellTextFormatStyle {
            font_family: self
                .font_family
                .clone()
                .or_else(|| fallback.font_family.clone()),
            bold: self.bold.or(fallback.bold),
            italic: self.italic.or(fallback.italic),
            text_size: self.text_size.or(fallback.text_size),
            wrap_text: self.wrap_text.or(fallback.wrap_text),
            shrink_to_fit: self.shrink_to_fit.or(fallback.shrink_to_fit),
            text_color: self.text_color.or(fallback.text_color),
        }
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if every field is set
    pub fn is_complete(&self) -> bool {
        self.font_family.is_some()
            && self.bold.is_some()
            && self.italic.is_some()
            && self.text_size.is_some()
            && self.wrap_text.is_some()
            && self.shrink_to_fit.is_some()
            && self.text_color.is_some()
    }
}
