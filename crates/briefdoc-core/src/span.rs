//! Source line tracking for blocks.
//!
//! Every block records the range of input lines it consumed. Spans of
//! consecutive blocks in a [`Document`](crate::ast::Document) tile the whole
//! input, so `span.start` doubles as a stable key for display layers.

/// A range of zero-based line indices in the source text.
///
/// Both `start` and `end` are inclusive-exclusive: `[start, end)`.
///
/// # Example
///
/// ```rust
/// use briefdoc_core::span::Span;
///
/// let span = Span::new(2, 5);
/// assert_eq!(span.len(), 3);
/// assert!(span.contains(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First line consumed (inclusive).
    pub start: u32,
    /// One past the last line consumed (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from line indices.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A span covering `count` lines starting at `start`.
    #[inline]
    pub const fn lines(start: usize, count: usize) -> Self {
        Self {
            start: start as u32,
            end: (start + count) as u32,
        }
    }

    /// Number of lines in this span.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span covers no lines.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span contains a line index.
    #[inline]
    pub const fn contains(&self, line: u32) -> bool {
        line >= self.start && line < self.end
    }

    /// Merge two spans into one covering both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both() {
        let merged = Span::new(3, 4).merge(Span::new(4, 7));
        assert_eq!(merged, Span::new(3, 7));
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn lines_constructor() {
        let span = Span::lines(5, 0);
        assert!(span.is_empty());
        assert_eq!(Span::lines(1, 2), Span::new(1, 3));
    }
}
