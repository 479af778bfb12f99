//! Attribute runs

use super::field::FormatField;
use crate::error::{Error, Result};
use std::ops::Range;

/// A span of uniformly formatted text
///
/// A run always covers at least one offset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeRun {
    start_offset: usize,
    end_offset: usize,
    formatting: FormatField,
}

impl AttributeRun {
    /// Create a run over `start_offset..end_offset`
    pub fn new(start_offset: usize, end_offset: usize, formatting: FormatField) -> Result<Self> {
        if end_offset <= start_offset {
            return Err(Error::EmptyRun {
                start: start_offset,
                end: end_offset,
            });
        }
        Ok(Self {
            start_offset,
            end_offset,
            formatting,
        })
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// A run covers at least one offset, so this is always `false`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }

    pub fn formatting(&self) -> &FormatField {
        &self.formatting
    }

    pub fn into_formatting(self) -> FormatField {
        self.formatting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            AttributeRun::new(4, 4, FormatField::new()),
            Err(Error::EmptyRun { start: 4, end: 4 })
        );
        assert!(AttributeRun::new(5, 2, FormatField::new()).is_err());
    }

    #[test]
    fn test_bounds() {
        let run = AttributeRun::new(2, 6, FormatField::new()).unwrap();
        assert_eq!(run.len(), 4);
        assert!(!run.is_empty());
        assert!(run.contains(2));
        assert!(run.contains(5));
        assert!(!run.contains(6));
    }
}
