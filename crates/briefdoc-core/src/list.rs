//! Flat list sub-parser.
//!
//! A list is a run of consecutive lines whose first non-blank characters are
//! a bullet (`- `, `* `), a numeral (`1. `) or a checkbox (`- [x]`,
//! `- [ ]`). Indentation is ignored, so nested markers become siblings.

use crate::ast::{CheckState, List, ListItem, ListKind};
use crate::inline::parse_inlines;
use crate::lexer::Line;
use crate::span::Span;

const CHECKED: &str = "- [x]";
const UNCHECKED: &str = "- [ ]";

/// How a list line was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `-` or `*` followed by whitespace; `len` covers both.
    Bullet { len: usize },
    /// Digits, `.`, whitespace; `len` covers all three.
    Numeric { len: usize },
}

impl Marker {
    /// Byte width of the marker including its trailing whitespace.
    pub fn width(self) -> usize {
        match self {
            Marker::Bullet { len } | Marker::Numeric { len } => len,
        }
    }
}

/// Recognize a list marker at the start of `text`, ignoring indentation.
pub fn list_marker(text: &str) -> Option<Marker> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    match bytes.first()? {
        b'-' | b'*' => {
            let space = text[1..].chars().next().filter(|c| c.is_whitespace())?;
            Some(Marker::Bullet {
                len: 1 + space.len_utf8(),
            })
        }
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(digits) != Some(&b'.') {
                return None;
            }
            let space = text[digits + 1..]
                .chars()
                .next()
                .filter(|c| c.is_whitespace())?;
            Some(Marker::Numeric {
                len: digits + 1 + space.len_utf8(),
            })
        }
        _ => None,
    }
}

/// Check whether a line opens or continues a list.
#[inline]
pub fn is_list_line(line: &Line<'_>) -> bool {
    list_marker(line.text).is_some()
}

/// Consume the list starting at `start`.
///
/// Returns the list and the number of lines consumed: at least one when
/// `lines[start]` is a list line, zero when it is not or `start` is past the
/// end.
pub fn parse_list<'a>(lines: &[Line<'a>], start: usize) -> (List<'a>, usize) {
    let mut items = Vec::with_capacity(8);
    let mut kind = ListKind::Unordered;

    for line in lines.get(start..).unwrap_or_default() {
        let Some(marker) = list_marker(line.text) else {
            break;
        };
        if matches!(marker, Marker::Numeric { .. }) {
            kind = ListKind::Ordered;
        }
        items.push(parse_item(line, marker));
    }

    let consumed = items.len();
    let list = List {
        kind,
        items,
        span: Span::lines(start, consumed),
    };
    (list, consumed)
}

fn parse_item<'a>(line: &Line<'a>, marker: Marker) -> ListItem<'a> {
    let text = line.text.trim_start();

    let (check, content) = if let Some(rest) = text.strip_prefix(CHECKED) {
        (CheckState::Checked, strip_one_space(rest))
    } else if let Some(rest) = text.strip_prefix(UNCHECKED) {
        (CheckState::Unchecked, strip_one_space(rest))
    } else {
        (CheckState::NotApplicable, &text[marker.width()..])
    };

    ListItem {
        check,
        content: parse_inlines(content),
        span: Span::lines(line.index, 1),
    }
}

fn strip_one_space(text: &str) -> &str {
    match text.chars().next() {
        Some(c) if c.is_whitespace() => &text[c.len_utf8()..],
        _ => text,
    }
}
