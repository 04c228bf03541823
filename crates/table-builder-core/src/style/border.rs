//! Border style types

/// Line style of one cell edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BorderType {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Bold line
    Bold,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
}

/// Borders of a cell; each edge is independently set or inherited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellBorders {
    /// Top border
    pub top: Option<BorderType>,
    /// Right border
    pub right: Option<BorderType>,
    /// Bottom border
    pub bottom: Option<BorderType>,
    /// Left border
    pub left: Option<BorderType>,
}

impl CellBorders {
    /// Borders with every edge inherited
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four edges to the same style
    pub fn all(border: BorderType) -> Self {
        Self {
            top: Some(border),
            right: Some(border),
            bottom: Some(border),
            left: Some(border),
        }
    }

    /// Set the top edge
    pub fn with_top(mut self, border: BorderType) -> Self {
        self.top = Some(border);
        self
    }

    /// Set the right edge
    pub fn with_right(mut self, border: BorderType) -> Self {
        self.right = Some(border);
        self
    }

    /// Set the bottom edge
    pub fn with_bottom(mut self, border: BorderType) -> Self {
        self.bottom = Some(border);
        self
    }

    /// Set the left edge
    pub fn with_left(mut self, border: BorderType) -> Self {
        self.left = Some(border);
        self
    }

    /// Fill every unset edge from `fallback`
    pub fn collect(&self, fallback: &CellBorders) -> CellBorders {
        CellBorders {
            top: self.top.or(fallback.top),
            right: self.right.or(fallback.right),
            bottom: self.bottom.or(fallback.bottom),
            left: self.left.or(fallback.left),
        }
    }

    /// Check if no edge is set
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Check if every edge is set
    pub fn is_complete(&self) -> bool {
        self.top.is_some() && self.right.is_some() && self.bottom.is_some() && self.left.is_some()
    }
}
