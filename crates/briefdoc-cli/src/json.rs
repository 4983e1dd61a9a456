//! JSON view of a rendered document.
//!
//! Blocks and inline fragments are tagged by `type`, so a display layer in
//! another process can switch on it directly.

use briefdoc_core::ast::{TableCell, TableRow};
use briefdoc_core::{Block, CheckState, Document, Inline, Span};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonDocument<'a> {
    line_count: usize,
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
struct JsonSpan {
    start: u32,
    end: u32,
}

impl From<Span> for JsonSpan {
    fn from(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
        span: JsonSpan,
    },
    Rule {
        span: JsonSpan,
    },
    Quote {
        content: Vec<JsonInline<'a>>,
        span: JsonSpan,
    },
    Table {
        header: Vec<Vec<JsonInline<'a>>>,
        rows: Vec<Vec<Vec<JsonInline<'a>>>>,
        span: JsonSpan,
    },
    List {
        ordered: bool,
        items: Vec<JsonListItem<'a>>,
        span: JsonSpan,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
        span: JsonSpan,
    },
    Spacer {
        span: JsonSpan,
    },
}

#[derive(Serialize)]
struct JsonListItem<'a> {
    check: &'static str,
    content: Vec<JsonInline<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
enum JsonInline<'a> {
    Text(&'a str),
    Bold(&'a str),
    Code(&'a str),
}

pub fn convert_document<'a>(doc: &'a Document) -> JsonDocument<'a> {
    JsonDocument {
        line_count: doc.line_count,
        blocks: doc.blocks.iter().map(convert_block).collect(),
    }
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            content: convert_inlines(&h.content),
            span: h.span.into(),
        },
        Block::Rule(span) => JsonBlock::Rule {
            span: (*span).into(),
        },
        Block::Quote(q) => JsonBlock::Quote {
            content: convert_inlines(&q.content),
            span: q.span.into(),
        },
        Block::Table(t) => JsonBlock::Table {
            header: convert_cells(&t.header),
            rows: t.rows.iter().map(convert_row).collect(),
            span: t.span.into(),
        },
        Block::List(l) => JsonBlock::List {
            ordered: l.is_ordered(),
            items: l
                .items
                .iter()
                .map(|item| JsonListItem {
                    check: check_name(item.check),
                    content: convert_inlines(&item.content),
                })
                .collect(),
            span: l.span.into(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: convert_inlines(&p.content),
            span: p.span.into(),
        },
        Block::Spacer(span) => JsonBlock::Spacer {
            span: (*span).into(),
        },
    }
}

fn convert_row<'a>(row: &'a TableRow) -> Vec<Vec<JsonInline<'a>>> {
    convert_cells(&row.cells)
}

fn convert_cells<'a>(cells: &'a [TableCell]) -> Vec<Vec<JsonInline<'a>>> {
    cells.iter().map(|cell| convert_inlines(&cell.content)).collect()
}

fn convert_inlines<'a>(inlines: &'a [Inline]) -> Vec<JsonInline<'a>> {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(s) => JsonInline::Text(s),
            Inline::Bold(s) => JsonInline::Bold(s),
            Inline::Code(s) => JsonInline::Code(s),
        })
        .collect()
}

pub fn check_name(check: CheckState) -> &'static str {
    match check {
        CheckState::Checked => "checked",
        CheckState::Unchecked => "unchecked",
        CheckState::NotApplicable => "none",
    }
}
