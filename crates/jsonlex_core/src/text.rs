//! Text span type for source location tracking.
//!
//! Tokens and diagnostics refer back into the source buffer through spans,
//! so no text is ever copied out of it.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = usize;

/// A region of source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    /// Whether this span is empty (zero-length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Whether this span lies entirely before `other`, with no overlap.
    #[inline]
    pub fn precedes(&self, other: &TextSpan) -> bool {
        self.end() <= other.start
    }

    /// Convert to a byte range.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The text this span covers in `source`.
    ///
    /// Panics if the span does not fit in `source` or splits a character.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.to_range()]
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

impl From<Range<usize>> for TextSpan {
    fn from(range: Range<usize>) -> Self {
        TextSpan::from_bounds(range.start, range.end)
    }
}

impl From<TextSpan> for Range<usize> {
    fn from(span: TextSpan) -> Self {
        span.to_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
    }

    #[test]
    fn test_text_span_from_bounds() {
        let span = TextSpan::from_bounds(5, 15);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(TextSpan::from(5..15), span);
    }

    #[test]
    fn test_empty_span_contains_nothing() {
        let span = TextSpan::empty(3);
        assert!(span.is_empty());
        assert!(!span.contains(3));
        assert_eq!(span.to_range(), 3..3);
    }

    #[test]
    fn test_precedes() {
        let a = TextSpan::new(0, 4);
        let b = TextSpan::new(4, 2);
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
    }

    #[test]
    fn test_slice() {
        let source = r#"{"key": 1}"#;
        assert_eq!(TextSpan::new(1, 5).slice(source), r#""key""#);
        assert_eq!(TextSpan::empty(10).slice(source), "");
    }

    #[test]
    #[should_panic]
    fn test_slice_past_end_panics() {
        TextSpan::new(2, 10).slice("abc");
    }

    #[test]
    fn test_display() {
        assert_eq!(TextSpan::new(2, 3).to_string(), "[2, 5)");
        assert_eq!(format!("{:?}", TextSpan::new(2, 3)), "2..5");
    }
}
