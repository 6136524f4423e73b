//! Source locations
//!
//! A statement is a single line, so a span is just a half-open byte range
//! into that line.

use serde::{Deserialize, Serialize};

/// Byte range `start..end` within the parsed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_both() {
        let merged = Span::new(4, 6).merge(Span::new(0, 2));
        assert_eq!(merged, Span::new(0, 6));
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn test_zero_width_is_empty() {
        assert!(Span::new(3, 3).is_empty());
        assert_eq!(Span::new(5, 2).len(), 0);
    }
}
