//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell position inside a [`Table`](crate::Table)
///
/// Both indices are 0-based. Display uses A1 notation (`CellAddress::new(0, 0)` is "A1").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub column: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Absolute markers (`$`) are accepted and ignored.
    ///
    /// # Examples
    /// ```
    /// use table_builder_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr, CellAddress::new(2, 1));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_argument("address", "empty address"));
        }

        let unmarked: String = s.chars().filter(|c| *c != '$').collect();
        let split = unmarked
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(unmarked.len());
        let (letters, digits) = unmarked.split_at(split);

        if letters.is_empty() {
            return Err(Error::invalid_argument(
                "address",
                format!("no column letters in '{}'", s),
            ));
        }
        let column = Self::letters_to_column(letters)?;

        let row: usize = digits.parse().map_err(|_| {
            Error::invalid_argument("address", format!("invalid row number in '{}'", s))
        })?;
        if row == 0 {
            return Err(Error::invalid_argument(
                "address",
                format!("row number must be >= 1 in '{}'", s),
            ));
        }

        Ok(Self::new(row - 1, column))
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(column: usize) -> String {
        let mut result = String::new();
        let mut n = column;

        loop {
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<usize> {
        if letters.is_empty() {
            return Err(Error::invalid_argument("column", "empty column letters"));
        }

        let mut column: usize = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::invalid_argument(
                    "column",
                    format!("invalid column letter '{}'", c),
                ));
            }
            column = column
                .checked_mul(26)
                .and_then(|n| n.checked_add(c.to_ascii_uppercase() as usize - 'A' as usize + 1))
                .ok_or_else(|| Error::invalid_argument("column", "column letters overflow"))?;
        }

        Ok(column - 1)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.column), self.row as u128 + 1)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(usize, usize)> for CellAddress {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// A rectangular range of cells, bounds inclusive
///
/// Ranges are always normalized so that `top_row <= bottom_row` and
/// `left_column <= right_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// First row of the range
    pub top_row: usize,
    /// First column of the range
    pub left_column: usize,
    /// Last row of the range
    pub bottom_row: usize,
    /// Last column of the range
    pub right_column: usize,
}

impl CellRange {
    /// Create a new cell range from two corners
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            top_row: start.row.min(end.row),
            left_column: start.column.min(end.column),
            bottom_row: start.row.max(end.row),
            right_column: start.column.max(end.column),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(top_row: usize, left_column: usize, bottom_row: usize, right_column: usize) -> Self {
        Self::new(
            CellAddress::new(top_row, left_column),
            CellAddress::new(bottom_row, right_column),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self::new(addr, addr)
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once(':') {
            Ok(Self::new(CellAddress::parse(start)?, CellAddress::parse(end)?))
        } else {
            Ok(Self::single(CellAddress::parse(s)?))
        }
    }

    /// Top-left corner
    pub fn start(&self) -> CellAddress {
        CellAddress::new(self.top_row, self.left_column)
    }

    /// Bottom-right corner
    pub fn end(&self) -> CellAddress {
        CellAddress::new(self.bottom_row, self.right_column)
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.top_row
            && addr.row <= self.bottom_row
            && addr.column >= self.left_column
            && addr.column <= self.right_column
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> usize {
        (self.bottom_row - self.top_row).saturating_add(1)
    }

    /// Get the number of columns in the range
    pub fn column_count(&self) -> usize {
        (self.right_column - self.left_column).saturating_add(1)
    }

    /// Get the total number of cells in the range, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        self.row_count().saturating_mul(self.column_count())
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.top_row <= other.bottom_row
            && self.bottom_row >= other.top_row
            && self.left_column <= other.right_column
            && self.right_column >= other.left_column
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current: Some(self.start()),
        }
    }

    /// Move the range by whole rows and columns, saturating at `usize::MAX`
    pub fn offset(&self, rows: usize, columns: usize) -> CellRange {
        Self {
            top_row: self.top_row.saturating_add(rows),
            left_column: self.left_column.saturating_add(columns),
            bottom_row: self.bottom_row.saturating_add(rows),
            right_column: self.right_column.saturating_add(columns),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start() == self.end() {
            self.start().to_a1_string()
        } else {
            format!("{}:{}", self.start().to_a1_string(), self.end().to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current: Option<CellAddress>,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.current?;

        self.current = if addr.column < self.range.right_column {
            Some(CellAddress::new(addr.row, addr.column + 1))
        } else if addr.row < self.range.bottom_row {
            Some(CellAddress::new(addr.row + 1, self.range.left_column))
        } else {
            None
        };

        Some(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
        assert_eq!(CellAddress::column_to_letters(702), "AAA");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("AB").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("zz").unwrap(), 701);
        assert!(CellAddress::letters_to_column("A1").is_err());
    }

    #[test]
    fn test_cell_address_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(0, 0));
        assert_eq!(CellAddress::parse("$C$10").unwrap(), CellAddress::new(9, 2));
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
    }

    #[test]
    fn test_cell_range_normalizes() {
        let range = CellRange::new(CellAddress::new(3, 4), CellAddress::new(1, 0));
        assert_eq!(range, CellRange::from_indices(1, 0, 3, 4));
        assert_eq!(range.to_string(), "A2:E4");
        assert_eq!(range.cell_count(), 15);
    }

    #[test]
    fn test_extreme_indices_do_not_overflow() {
        let corner = CellAddress::new(usize::MAX, usize::MAX);
        assert!(corner.to_a1_string().ends_with(&format!("{}", usize::MAX as u128 + 1)));

        let range = CellRange::new(CellAddress::new(0, 0), corner);
        assert_eq!(range.row_count(), usize::MAX);
        assert_eq!(range.cell_count(), usize::MAX);
    }

    #[test]
    fn test_cell_range_overlaps() {
        let a = CellRange::parse("A1:C1").unwrap();
        let b = CellRange::parse("B1:D1").unwrap();
        let c = CellRange::parse("A2:C2").unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 0),
                CellAddress::new(0, 1),
                CellAddress::new(1, 0),
                CellAddress::new(1, 1),
            ]
        );
    }
}
