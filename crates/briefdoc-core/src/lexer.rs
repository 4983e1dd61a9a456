//! Line splitter with SIMD-accelerated scanning.
//!
//! The lexer splits input into indexed lines for the block dispatcher.
//! It uses `memchr` for fast newline detection (SIMD on supported platforms).
//!
//! - Zero-copy: lines borrow directly from input
//! - A trailing `\n` does not produce an extra empty line
//! - A `\r` before `\n` is dropped so CRLF input classifies like LF input

use memchr::memchr;

/// A single line from the input with its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// Position of this line in the input.
    pub index: usize,
}

impl<'a> Line<'a> {
    /// Check if this line is empty after trimming whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check if the line starts with the given prefix.
    #[inline(always)]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.as_bytes().starts_with(prefix.as_bytes())
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Strip a prefix from the line, returning the remainder.
    #[inline(always)]
    pub fn strip_prefix(&self, prefix: &str) -> Option<&'a str> {
        self.text.strip_prefix(prefix)
    }
}

/// Iterator over the lines of an input string.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Index of the next line to be produced.
    index: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            index: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Read the next line from input.
    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        let text_end = if end < self.bytes.len() && end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        let line = Line {
            // `\n` and `\r` are ASCII, so both ends sit on char boundaries.
            text: &self.input[start..text_end],
            index: self.index,
        };
        self.index += 1;
        Some(line)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        self.read_line()
    }
}

/// Split input into lines, ready for cursor-based dispatch.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(memchr::memchr_iter(b'\n', input.as_bytes()).count() + 1);
    lines.extend(Lexer::new(input));
    lines
}
