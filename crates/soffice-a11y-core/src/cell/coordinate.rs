//! Cell coordinate decoding

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell position decoded from a label such as "A1" or "AB23"
///
/// Both fields are 1-based, the way the office suite labels its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoordinate {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, Z=26, AA=27)
    pub column: u32,
}

impl CellCoordinate {
    /// Create a coordinate from 1-based row and column numbers
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Decode a cell label into a coordinate
    ///
    /// The label must be non-empty, contain no spaces, not start with a digit
    /// and end with a digit. The trailing digits are the row; the letters before
    /// them are the column in bijective base-26.
    ///
    /// # Examples
    /// ```
    /// use soffice_a11y_core::CellCoordinate;
    ///
    /// let coord = CellCoordinate::decode("B12").unwrap();
    /// assert_eq!(coord.row, 12);
    /// assert_eq!(coord.column, 2);
    ///
    /// assert!(CellCoordinate::decode("1A").is_err());
    /// ```
    pub fn decode(label: &str) -> Result<Self> {
        let bytes = label.as_bytes();
        let (first, last) = match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Error::invalid_coordinate(label)),
        };

        if bytes.contains(&b' ') || first.is_ascii_digit() || !last.is_ascii_digit() {
            return Err(Error::invalid_coordinate(label));
        }

        // Scan back over the trailing digit run; the first byte is never a
        // digit so the split point is always > 0.
        let split = bytes
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map(|pos| pos + 1)
            .ok_or_else(|| Error::invalid_coordinate(label))?;

        let (letters, digits) = label.split_at(split);

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::invalid_coordinate(label))?;
        if row == 0 {
            return Err(Error::invalid_coordinate(label));
        }

        let column = Self::letters_to_column(letters).ok_or_else(|| Error::invalid_coordinate(label))?;

        Ok(Self { row, column })
    }

    /// Convert column letters to a 1-based column number (A = 1, Z = 26, AA = 27)
    ///
    /// Returns `None` for an empty string, a non-letter, or overflow.
    pub fn letters_to_column(letters: &str) -> Option<u32> {
        if letters.is_empty() {
            return None;
        }

        let mut column: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            column = column.checked_mul(26)?.checked_add(value)?;
        }
        Some(column)
    }

    /// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
    pub fn column_to_letters(column: u32) -> String {
        let mut result = String::new();
        let mut n = column;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// The column part of the label (e.g. "AB")
    pub fn column_label(&self) -> String {
        Self::column_to_letters(self.column)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row)
    }
}

impl FromStr for CellCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// Decode a label into `(row, column)`, or `(0, 0)` when it cannot be decoded
///
/// Zero marks the coordinate as unknown for callers that report positions.
pub fn decode_or_unknown(label: &str) -> (u32, u32) {
    match CellCoordinate::decode(label) {
        Ok(coord) => (coord.row, coord.column),
        Err(err) => {
            tracing::trace!("{err}, treating coordinate as unknown");
            (0, 0)
        }
    }
}
