//! Zero-allocation inline formatter.
//!
//! Uses SIMD-accelerated scanning and borrows directly from input.
//! Greedy, left-to-right, no backtracking and no recursion: the contents of
//! a bold or code fragment are emitted verbatim.

use std::borrow::Cow;

use memchr::{memchr, memchr2, memmem};

use crate::ast::Inline;

/// Parse inline fragments from the text of one line.
///
/// Recognizes `**bold**` and `` `code` ``. A delimiter without a partner
/// stays in the surrounding text.
///
/// ```rust
/// use briefdoc_core::ast::Inline;
/// use briefdoc_core::inline::parse_inlines;
///
/// let inlines = parse_inlines("**bold** and `code`");
/// assert_eq!(
///     inlines,
///     vec![
///         Inline::Bold("bold".into()),
///         Inline::Text(" and ".into()),
///         Inline::Code("code".into()),
///     ]
/// );
/// ```
#[inline]
pub fn parse_inlines(text: &str) -> Vec<Inline<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    InlineParser::new(text).parse()
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(4);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            let next_special = match memchr2(b'*', b'`', &self.bytes[self.pos..]) {
                Some(offset) => self.pos + offset,
                None => break,
            };

            self.pos = next_special;

            let parsed = match self.bytes[self.pos] {
                b'`' => self.try_parse_code(&mut inlines, &mut text_start),
                b'*' => self.try_parse_bold(&mut inlines, &mut text_start),
                _ => false,
            };

            if !parsed {
                self.pos += 1;
            }
        }

        if text_start < self.bytes.len() {
            inlines.push(self.make_text(text_start, self.bytes.len()));
        }

        inlines
    }

    #[inline(always)]
    fn make_text(&self, start: usize, end: usize) -> Inline<'a> {
        Inline::Text(Cow::Borrowed(&self.text[start..end]))
    }

    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: usize) {
        if text_start < self.pos {
            inlines.push(self.make_text(text_start, self.pos));
        }
    }

    /// `` `…` `` with at least one byte between the backticks.
    #[inline]
    fn try_parse_code(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let content_start = start + 1;

        let close = match memchr(b'`', &self.bytes[content_start..]) {
            Some(0) | None => return false,
            Some(offset) => content_start + offset,
        };

        self.flush_text(inlines, *text_start);
        inlines.push(Inline::Code(Cow::Borrowed(
            &self.text[content_start..close],
        )));

        self.pos = close + 1;
        *text_start = self.pos;
        true
    }

    /// `**…**` closed by the nearest `**` that leaves the content non-empty.
    #[inline]
    fn try_parse_bold(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        if self.bytes.get(start + 1) != Some(&b'*') {
            return false;
        }

        let content_start = start + 2;
        let search_from = content_start + 1;
        if search_from > self.bytes.len() {
            return false;
        }

        let close = match memmem::find(&self.bytes[search_from..], b"**") {
            Some(offset) => search_from + offset,
            None => return false,
        };

        self.flush_text(inlines, *text_start);
        inlines.push(Inline::Bold(Cow::Borrowed(
            &self.text[content_start..close],
        )));

        self.pos = close + 2;
        *text_start = self.pos;
        true
    }
}
