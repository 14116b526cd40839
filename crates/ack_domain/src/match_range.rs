use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A highlighted span inside a matching line, expressed as a byte offset and
/// a length into the line content.
///
/// Ranges are trusted as produced: nothing here checks them against the text
/// they point into. Use [`MatchRange::slice`] to read the selected text without
/// risking a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub length: usize,
}

impl MatchRange {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the part of `text` covered by this range, or `None` when the
    /// range runs past the end or does not fall on char boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end())
    }
}

impl From<(usize, usize)> for MatchRange {
    fn from((start, length): (usize, usize)) -> Self {
        Self { start, length }
    }
}

impl From<Range<usize>> for MatchRange {
    fn from(range: Range<usize>) -> Self {
        Self { start: range.start, length: range.end.saturating_sub(range.start) }
    }
}

impl From<MatchRange> for Range<usize> {
    fn from(range: MatchRange) -> Self {
        range.start..range.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_tuple() {
        let actual = MatchRange::from((8, 3));
        let expected = MatchRange { start: 8, length: 3 };
        assert_eq!(actual, expected);
        assert_eq!(actual.end(), 11);
    }

    #[test]
    fn test_from_std_range() {
        let actual = MatchRange::from(4..7);
        let expected = MatchRange::new(4, 3);
        assert_eq!(actual, expected);
        assert_eq!(Range::from(actual), 4..7);
    }

    #[test]
    fn test_inverted_std_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let actual = MatchRange::from(7..4);
        assert!(actual.is_empty());
        assert_eq!(actual.start, 7);
    }

    #[test]
    fn test_slice_selects_text() {
        let fixture = "foo bar foo";
        assert_eq!(MatchRange::new(8, 3).slice(fixture), Some("foo"));
        assert_eq!(MatchRange::new(0, 0).slice(fixture), Some(""));
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let fixture = "short";
        assert_eq!(MatchRange::new(3, 10).slice(fixture), None);
        assert_eq!(MatchRange::new(usize::MAX, 2).slice(fixture), None);
    }

    #[test]
    fn test_slice_off_char_boundary() {
        // 'é' is two bytes wide
        let fixture = "café";
        assert_eq!(MatchRange::new(4, 1).slice(fixture), None);
        assert_eq!(MatchRange::new(3, 2).slice(fixture), Some("é"));
    }
}
