//! Text span and line map types for source location tracking.
//!
//! Offsets are measured in `char`s from the start of the source, which is the
//! unit the scanner advances by.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a char offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct TextSpan {
    /// The char offset where this span starts.
    pub start: TextPos,
    /// The length of this span in chars.
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

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
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

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, in chars.
    pub column: u32,
}

/// A map from char offsets to line numbers, built from source text.
///
/// Only `\n` starts a new line; a lone `\r` is ordinary whitespace to the
/// scanner and is treated the same way here.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Char offsets of the start of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Get the 1-based line number for a char offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32 + 1,
            Err(line) => line as u32,
        }
    }

    /// Get the 1-based line and column for a char offset.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[(line - 1) as usize];
        LineAndColumn {
            line,
            column: pos - line_start + 1,
        }
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
        assert_eq!(span.to_range(), 5..15);
    }

    #[test]
    fn test_text_span_from_bounds() {
        let span = TextSpan::from_bounds(5, 15);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
    }

    #[test]
    fn test_empty_span() {
        let span = TextSpan::empty(7);
        assert!(span.is_empty());
        assert_eq!(span.end(), 7);
    }

    #[test]
    fn test_line_map() {
        let text = "line1\nline2\nline3";
        let map = LineMap::new(text);
        assert_eq!(map.line_of(0), 1);
        assert_eq!(map.line_of(5), 1); // newline char
        assert_eq!(map.line_of(6), 2); // start of line2
        assert_eq!(map.line_of(12), 3);

        let lc = map.line_and_column_of(8);
        assert_eq!(lc.line, 2);
        assert_eq!(lc.column, 3);
    }

    #[test]
    fn test_line_map_counts_chars_not_bytes() {
        let map = LineMap::new("é\nx");
        let lc = map.line_and_column_of(2);
        assert_eq!(lc, LineAndColumn { line: 2, column: 1 });
    }
}
