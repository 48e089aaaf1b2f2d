//! Span - Source code location
//!
//! A Span marks the bytes of the input a token was scanned from, so
//! diagnostics can point back at them.

/// A position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column in bytes (1-indexed)
    pub column: u32,
    /// Byte offset from the beginning of the input
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// The position of the first byte of any input
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

/// A region of the source (start inclusive, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
    /// Source ID, for sessions that scan more than one input
    pub file_id: u32,
}

impl Span {
    pub fn new(start: Position, end: Position, file_id: u32) -> Self {
        Self { start, end, file_id }
    }

    /// Creates an empty span at a single position
    pub fn point(pos: Position, file_id: u32) -> Self {
        Self {
            start: pos,
            end: pos,
            file_id,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte range covered, for slicing the scanned input
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(Position::new(1, 1, 0), Position::new(1, 7, 6), 0);
        assert_eq!(span.len(), 6);
        assert_eq!(span.range(), 0..6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(Position::new(2, 3, 8), 1);
        assert!(span.is_empty());
        assert_eq!(span.range(), 8..8);
    }
}
