//! Block dispatcher.
//!
//! Looks at the line under the cursor, and only that line, to decide which
//! block rule applies. Multi-line constructs are handed to the table and list
//! sub-parsers, which do their own lookahead and report how many lines they
//! consumed.

use crate::ast::{Block, Heading, Paragraph, Quote};
use crate::inline::parse_inlines;
use crate::lexer::Line;
use crate::list::{is_list_line, parse_list};
use crate::span::Span;
use crate::table::{is_table_line, parse_table};

/// Which rule a line triggers, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `# `, `## ` or `### `.
    Heading(u8),
    /// Trimmed text is exactly `---`.
    Rule,
    /// `> `
    Quote,
    /// Starts with `|`.
    Table,
    /// Bullet, numeral or checkbox marker.
    List,
    /// Empty after trimming.
    Blank,
    /// Everything else.
    Paragraph,
}

impl LineKind {
    /// Rule name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Heading(_) => "heading",
            LineKind::Rule => "rule",
            LineKind::Quote => "quote",
            LineKind::Table => "table",
            LineKind::List => "list",
            LineKind::Blank => "blank",
            LineKind::Paragraph => "paragraph",
        }
    }
}

const HEADING_PREFIXES: [(&str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

/// Classify a single line. The first matching rule wins.
pub fn classify(line: &Line<'_>) -> LineKind {
    if let Some(level) = heading_level(line) {
        return LineKind::Heading(level);
    }
    if line.trimmed() == "---" {
        return LineKind::Rule;
    }
    if line.starts_with("> ") {
        return LineKind::Quote;
    }
    if is_table_line(line) {
        return LineKind::Table;
    }
    if is_list_line(line) {
        return LineKind::List;
    }
    if line.is_blank() {
        return LineKind::Blank;
    }
    LineKind::Paragraph
}

#[inline]
fn heading_level(line: &Line<'_>) -> Option<u8> {
    HEADING_PREFIXES
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .map(|&(_, level)| level)
}

/// A block emitted by the dispatcher with the number of lines it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch<'a> {
    pub block: Block<'a>,
    pub consumed: usize,
}

/// Produce the block starting at `cursor`.
///
/// Returns `None` once the cursor is past the last line. Otherwise the
/// dispatch consumes at least one line, so a caller advancing by `consumed`
/// always terminates. Blank lines come back as one-line spacers; merging a
/// run of them is the assembler's job.
pub fn dispatch<'a>(lines: &[Line<'a>], cursor: usize) -> Option<Dispatch<'a>> {
    let line = lines.get(cursor)?;
    let kind = classify(line);
    let single = Span::lines(cursor, 1);

    let dispatch = match kind {
        LineKind::Heading(level) => {
            let rest = &line.text[level as usize + 1..];
            Dispatch {
                block: Block::Heading(Heading {
                    level,
                    content: parse_inlines(rest),
                    span: single,
                }),
                consumed: 1,
            }
        }
        LineKind::Rule => Dispatch {
            block: Block::Rule(single),
            consumed: 1,
        },
        LineKind::Quote => Dispatch {
            block: Block::Quote(Quote {
                content: parse_inlines(&line.text[2..]),
                span: single,
            }),
            consumed: 1,
        },
        LineKind::Table => {
            let (table, consumed) = parse_table(lines, cursor);
            Dispatch {
                block: Block::Table(table),
                consumed,
            }
        }
        LineKind::List => {
            let (list, consumed) = parse_list(lines, cursor);
            Dispatch {
                block: Block::List(list),
                consumed,
            }
        }
        LineKind::Blank => Dispatch {
            block: Block::Spacer(single),
            consumed: 1,
        },
        LineKind::Paragraph => Dispatch {
            block: Block::Paragraph(Paragraph {
                content: parse_inlines(line.text),
                span: single,
            }),
            consumed: 1,
        },
    };

    tracing::trace!(
        cursor,
        rule = kind.as_str(),
        consumed = dispatch.consumed,
        "dispatched block"
    );

    Some(dispatch)
}
