//! Cell format types and the format cascade
//!
//! This module contains:
//! - [`CellFormatStyle`] - A format description in which every field may be unset
//! - [`CellTextFormatStyle`] - Font and text settings
//! - [`CellBorders`] - Per-edge border settings
//! - [`ResolvedFormat`] - The fully resolved format a renderer applies
//!
//! Formats cascade field by field: the first set value found walking from
//! the most specific format to the least specific one wins, and anything
//! still unset falls back to [`CellFormatStyle::neutral`].

mod alignment;
mod border;
mod color;
mod text;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use border::{BorderType, CellBorders};
pub use color::Color;
pub use text::CellTextFormatStyle;

/// Font family used when no format in the cascade sets one
pub const DEFAULT_FONT_FAMILY: &str = "Calibri";

/// Font size in points used when no format in the cascade sets one
pub const DEFAULT_TEXT_SIZE: f64 = 11.0;

/// Format of a cell, row, column or table
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormatStyle {
    /// Background fill color
    pub background_color: Option<Color>,
    /// Text settings
    pub text_format: CellTextFormatStyle,
    /// Horizontal content alignment
    pub content_horizontal_alignment: Option<HorizontalAlignment>,
    /// Vertical content alignment
    pub content_vertical_alignment: Option<VerticalAlignment>,
    /// Border settings
    pub borders: CellBorders,
}

impl CellFormatStyle {
    /// Create a format with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine default with every field set
    pub fn neutral() -> Self {
        Self {
            background_color: None,
            text_format: CellTextFormatStyle {
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
                bold: Some(false),
                italic: Some(false),
                text_size: Some(DEFAULT_TEXT_SIZE),
                wrap_text: Some(false),
                shrink_to_fit: Some(false),
                text_color: Some(Color::BLACK),
            },
            content_horizontal_alignment: Some(HorizontalAlignment::General),
            content_vertical_alignment: Some(VerticalAlignment::Bottom),
            borders: CellBorders::all(BorderType::None),
        }
    }

    /// Set the background color
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.text_format.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.text_format.italic = Some(italic);
        self
    }

    /// Set font size in points
    pub fn text_size(mut self, size: f64) -> Self {
        self.text_format.text_size = Some(size);
        self
    }

    /// Set font family
    pub fn font_family<S: Into<String>>(mut self, name: S) -> Self {
        self.text_format.font_family = Some(name.into());
        self
    }

    /// Set text color
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_format.text_color = Some(color);
        self
    }

    /// Enable or disable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.text_format.wrap_text = Some(wrap);
        self
    }

    /// Enable or disable shrink to fit
    pub fn shrink_to_fit(mut self, shrink: bool) -> Self {
        self.text_format.shrink_to_fit = Some(shrink);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.content_horizontal_alignment = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.content_vertical_alignment = Some(align);
        self
    }

    /// Set all borders
    pub fn borders(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Fill every unset field from `fallback`, field by field
    pub fn collect(&self, fallback: &CellFormatStyle) -> CellFormatStyle {
        CellFormatStyle {
            background_color: self.background_color.or(fallback.background_color),
            text_format: self.text_format.collect(&fallback.text_format),
            content_horizontal_alignment: self
                .content_horizontal_alignment
                .or(fallback.content_horizontal_alignment),
            content_vertical_alignment: self
                .content_vertical_alignment
                .or(fallback.content_vertical_alignment),
            borders: self.borders.collect(&fallback.borders),
        }
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if every field except the optional background is set
    ///
    /// An unset background means "no fill", which is itself the neutral value.
    pub fn is_complete(&self) -> bool {
        self.text_format.is_complete()
            && self.content_horizontal_alignment.is_some()
            && self.content_vertical_alignment.is_some()
            && self.borders.is_complete()
    }

    /// Resolve against the neutral default into a format with no unset fields
    pub fn resolve(&self) -> ResolvedFormat {
        let text = &self.text_format;
        ResolvedFormat {
            fill: self.background_color.map_or(Fill::None, Fill::Solid),
            text: ResolvedText {
                font_family: text
                    .font_family
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
                bold: text.bold.unwrap_or(false),
                italic: text.italic.unwrap_or(false),
                text_size: text.text_size.unwrap_or(DEFAULT_TEXT_SIZE),
                wrap_text: text.wrap_text.unwrap_or(false),
                shrink_to_fit: text.shrink_to_fit.unwrap_or(false),
                text_color: text.text_color.unwrap_or(Color::BLACK),
            },
            horizontal_alignment: self.content_horizontal_alignment.unwrap_or_default(),
            vertical_alignment: self.content_vertical_alignment.unwrap_or_default(),
            borders: ResolvedBorders {
                top: self.borders.top.unwrap_or_default(),
                right: self.borders.right.unwrap_or_default(),
                bottom: self.borders.bottom.unwrap_or_default(),
                left: self.borders.left.unwrap_or_default(),
            },
        }
    }
}

/// Background fill of a resolved format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    /// No fill (transparent)
    #[default]
    None,
    /// Solid color fill
    Solid(Color),
}

/// Fully resolved text settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedText {
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub text_size: f64,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    pub text_color: Color,
}

impl std::hash::Hash for ResolvedText {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.font_family.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.text_size.to_bits().hash(state);
        self.wrap_text.hash(state);
        self.shrink_to_fit.hash(state);
        self.text_color.hash(state);
    }
}

impl Eq for ResolvedText {}

/// Fully resolved borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedBorders {
    pub top: BorderType,
    pub right: BorderType,
    pub bottom: BorderType,
    pub left: BorderType,
}

/// A format with every field decided
///
/// Produced by [`Table::resolve_format`](crate::Table::resolve_format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFormat {
    pub fill: Fill,
    pub text: ResolvedText,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub borders: ResolvedBorders,
}

impl Default for ResolvedFormat {
    fn default() -> Self {
        CellFormatStyle::new().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_is_field_granular() {
        let own = CellFormatStyle::new().bold(true);
        let fallback = CellFormatStyle::new()
            .bold(false)
            .italic(true)
            .background(Color::YELLOW);

        let composed = own.collect(&fallback);

        assert_eq!(composed.text_format.bold, Some(true));
        assert_eq!(composed.text_format.italic, Some(true));
        assert_eq!(composed.background_color, Some(Color::YELLOW));
        assert_eq!(composed.text_format.text_size, None);
    }

    #[test]
    fn test_collect_with_neutral_is_complete() {
        let composed = CellFormatStyle::new()
            .borders(CellBorders::new().with_top(BorderType::Bold))
            .collect(&CellFormatStyle::neutral());

        assert!(composed.is_complete());
        assert_eq!(composed.borders.top, Some(BorderType::Bold));
        assert_eq!(composed.borders.left, Some(BorderType::None));
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = CellFormatStyle::new().resolve();

        assert_eq!(resolved.fill, Fill::None);
        assert_eq!(resolved.text.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(resolved.text.text_size, DEFAULT_TEXT_SIZE);
        assert!(!resolved.text.bold);
        assert_eq!(resolved.horizontal_alignment, HorizontalAlignment::General);
        assert_eq!(resolved.vertical_alignment, VerticalAlignment::Bottom);
        assert_eq!(resolved.borders, ResolvedBorders::default());
        assert_eq!(resolved, CellFormatStyle::neutral().resolve());
    }

    #[test]
    fn test_resolve_keeps_set_fields() {
        let resolved = CellFormatStyle::new()
            .background(Color::RED)
            .font_family("Arial")
            .horizontal_alignment(HorizontalAlignment::Center)
            .resolve();

        assert_eq!(resolved.fill, Fill::Solid(Color::RED));
        assert_eq!(resolved.text.font_family, "Arial");
        assert_eq!(resolved.horizontal_alignment, HorizontalAlignment::Center);
    }
}
