//! Pipe table sub-parser.
//!
//! A table is a run of consecutive lines starting with `|`. Separator rows
//! (only pipes, dashes, colons and whitespace) mark the header boundary and
//! are dropped; the first remaining row is the header.

use crate::ast::{Table, TableCell, TableRow};
use crate::inline::parse_inlines;
use crate::lexer::Line;
use crate::span::Span;

/// Check whether a line opens or continues a table.
#[inline]
pub fn is_table_line(line: &Line<'_>) -> bool {
    line.starts_with("|")
}

/// Check whether a table line is a header/body separator such as `|---|:-:|`.
#[inline]
pub fn is_separator_row(text: &str) -> bool {
    text.trim()
        .chars()
        .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Consume the table starting at `start`.
///
/// Returns the table and the number of lines consumed: at least one when
/// `lines[start]` is a table line, zero when it is not or `start` is past the
/// end. Malformed tables degrade instead of failing: a run of only separators
/// has an empty header, and ragged rows keep their own cell counts.
pub fn parse_table<'a>(lines: &[Line<'a>], start: usize) -> (Table<'a>, usize) {
    let run = lines.get(start..).unwrap_or_default();
    let consumed = run
        .iter()
        .take_while(|line| is_table_line(line))
        .count();

    let mut header: Option<Vec<TableCell<'a>>> = None;
    let mut rows = Vec::with_capacity(consumed.saturating_sub(2));

    for line in &run[..consumed] {
        if is_separator_row(line.text) {
            continue;
        }

        let cells = parse_row(line.text);
        if header.is_none() {
            header = Some(cells);
        } else {
            rows.push(TableRow {
                cells,
                span: Span::lines(line.index, 1),
            });
        }
    }

    let table = Table {
        header: header.unwrap_or_default(),
        rows,
        span: Span::lines(start, consumed),
    };
    (table, consumed)
}

/// Split a row on `|` and trim each cell.
///
/// Only the pieces outside the leading and trailing pipes are dropped, so an
/// empty interior cell (`| a | | b |`) stays in place with no content.
pub fn parse_row(text: &str) -> Vec<TableCell<'_>> {
    let trimmed = text.trim();
    let mut pieces: Vec<&str> = trimmed.split('|').collect();
    if trimmed.ends_with('|') {
        pieces.pop();
    }
    let skip = usize::from(trimmed.starts_with('|'));

    pieces
        .into_iter()
        .skip(skip)
        .map(|piece| TableCell {
            content: parse_inlines(piece.trim()),
        })
        .collect()
}
