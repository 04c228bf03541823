//! Sheet cell styles and the workbook-wide style pool

use ahash::AHashMap;
use table_builder_core::{
    BorderType, CellAddress, Color, Fill, HorizontalAlignment, ResolvedFormat, VerticalAlignment,
};

use crate::error::{SheetError, SheetResult};

/// Horizontal alignment of a sheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetHorizontal {
    #[default]
    General,
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of a sheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetVertical {
    Top,
    Center,
    #[default]
    Bottom,
}

/// Border line style of a sheet cell edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetBorderStyle {
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Double,
}

/// Font of a sheet cell
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFont {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

impl Eq for SheetFont {}

impl std::hash::Hash for SheetFont {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.color.hash(state);
    }
}

/// Complete style of a sheet cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetStyle {
    /// Solid background color, if any
    pub fill: Option<Color>,
    pub font: SheetFont,
    pub horizontal: SheetHorizontal,
    pub vertical: SheetVertical,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    /// Top, right, bottom, left
    pub borders: [SheetBorderStyle; 4],
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            fill: None,
            font: SheetFont {
                name: table_builder_core::style::DEFAULT_FONT_FAMILY.to_string(),
                size: table_builder_core::style::DEFAULT_TEXT_SIZE,
                bold: false,
                italic: false,
                color: Color::BLACK,
            },
            horizontal: SheetHorizontal::General,
            vertical: SheetVertical::Bottom,
            wrap_text: false,
            shrink_to_fit: false,
            borders: [SheetBorderStyle::None; 4],
        }
    }
}

impl SheetStyle {
    /// Translate a resolved table format
    ///
    /// `cell` is only used to report values the sheet cannot express.
    pub fn from_resolved(format: &ResolvedFormat, cell: CellAddress) -> SheetResult<Self> {
        let text = &format.text;
        let border = |b| border_style(b, cell);

        Ok(Self {
            fill: match format.fill {
                Fill::None => None,
                Fill::Solid(color) => Some(color),
            },
            font: SheetFont {
                name: text.font_family.clone(),
                size: text.text_size,
                bold: text.bold,
                italic: text.italic,
                color: text.text_color,
            },
            horizontal: horizontal(format.horizontal_alignment, cell)?,
            vertical: vertical(format.vertical_alignment, cell)?,
            wrap_text: text.wrap_text,
            shrink_to_fit: text.shrink_to_fit,
            borders: [
                border(format.borders.top)?,
                border(format.borders.right)?,
                border(format.borders.bottom)?,
                border(format.borders.left)?,
            ],
        })
    }
}

fn horizontal(align: HorizontalAlignment, cell: CellAddress) -> SheetResult<SheetHorizontal> {
    match align {
        HorizontalAlignment::General => Ok(SheetHorizontal::General),
        HorizontalAlignment::Left => Ok(SheetHorizontal::Left),
        HorizontalAlignment::Center => Ok(SheetHorizontal::Center),
        HorizontalAlignment::Right => Ok(SheetHorizontal::Right),
        HorizontalAlignment::Justify => Ok(SheetHorizontal::Justify),
        other => Err(SheetError::unsupported("horizontal alignment", other, cell)),
    }
}

fn vertical(align: VerticalAlignment, cell: CellAddress) -> SheetResult<SheetVertical> {
    match align {
        VerticalAlignment::Top => Ok(SheetVertical::Top),
        VerticalAlignment::Middle => Ok(SheetVertical::Center),
        VerticalAlignment::Bottom => Ok(SheetVertical::Bottom),
        other => Err(SheetError::unsupported("vertical alignment", other, cell)),
    }
}

fn border_style(border: BorderType, cell: CellAddress) -> SheetResult<SheetBorderStyle> {
    match border {
        BorderType::None => Ok(SheetBorderStyle::None),
        BorderType::Thin => Ok(SheetBorderStyle::Thin),
        BorderType::Bold => Ok(SheetBorderStyle::Medium),
        BorderType::Dashed => Ok(SheetBorderStyle::Dashed),
        BorderType::Dotted => Ok(SheetBorderStyle::Dotted),
        BorderType::Double => Ok(SheetBorderStyle::Double),
        other => Err(SheetError::unsupported("border type", other, cell)),
    }
}

/// Pool of distinct sheet styles
///
/// Many cells share a style; the pool stores each distinct style once and
/// cells refer to it by index. Index 0 is always the default style.
#[derive(Debug, Clone)]
pub struct StylePool {
    styles: Vec<SheetStyle>,
    index_map: AHashMap<SheetStyle, u32>,
}

impl StylePool {
    /// Create a pool holding only the default style
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
        };
        pool.get_or_insert(SheetStyle::default());
        pool
    }

    /// Index of `style`, adding it if it is new
    pub fn get_or_insert(&mut self, style: SheetStyle) -> u32 {
        if let Some(&idx) = self.index_map.get(&style) {
            return idx;
        }
        let idx = self.styles.len() as u32;
        self.index_map.insert(style.clone(), idx);
        self.styles.push(style);
        idx
    }

    /// Get a style by index
    pub fn get(&self, index: u32) -> Option<&SheetStyle> {
        self.styles.get(index as usize)
    }

    /// Number of distinct styles, including the default
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool only has the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &SheetStyle)> {
        self.styles.iter().enumerate().map(|(i, s)| (i as u32, s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
