//! Block and inline types produced by the renderer.
//!
//! The model is deliberately flat: blocks never contain other blocks and
//! inline fragments never nest. It is designed to be:
//!
//! - **Zero-copy**: text borrows from the input through `Cow<'a, str>`
//! - **Span-tracked**: every block records the source lines it consumed
//! - **Display-ready**: each variant maps onto one visual element

use std::borrow::Cow;

use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = Cow<'a, str>;

/// A rendered document.
///
/// Blocks appear in source order and their spans tile `0..line_count`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<'a> {
    /// Content blocks in document order.
    pub blocks: Vec<Block<'a>>,
    /// Number of input lines the document was built from.
    pub line_count: usize,
}

impl<'a> Document<'a> {
    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }

    /// Detach the document from the input it borrows.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            blocks: self.blocks.into_iter().map(Block::into_owned).collect(),
            line_count: self.line_count,
        }
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Block<'a>;
    type IntoIter = std::slice::Iter<'d, Block<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Block-level nodes.
///
/// Each variant is one top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Section heading (levels 1-3).
    Heading(Heading<'a>),
    /// Horizontal rule (`---`).
    Rule(Span),
    /// Single-line block quotation (`> `).
    Quote(Quote<'a>),
    /// Pipe table with header and body rows.
    Table(Table<'a>),
    /// Flat ordered or unordered list.
    List(List<'a>),
    /// Any other non-blank line.
    Paragraph(Paragraph<'a>),
    /// One or more blank lines collapsed to a single gap.
    Spacer(Span),
}

impl<'a> Block<'a> {
    /// Source lines consumed by this block.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading(h) => h.span,
            Block::Rule(span) | Block::Spacer(span) => *span,
            Block::Quote(q) => q.span,
            Block::Table(t) => t.span,
            Block::List(l) => l.span,
            Block::Paragraph(p) => p.span,
        }
    }

    /// Short variant name, as used in JSON output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::Rule(_) => "rule",
            Block::Quote(_) => "quote",
            Block::Table(_) => "table",
            Block::List(_) => "list",
            Block::Paragraph(_) => "paragraph",
            Block::Spacer(_) => "spacer",
        }
    }

    /// Detach the block from the input it borrows.
    pub fn into_owned(self) -> Block<'static> {
        match self {
            Block::Heading(h) => Block::Heading(Heading {
                level: h.level,
                content: owned_inlines(h.content),
                span: h.span,
            }),
            Block::Rule(span) => Block::Rule(span),
            Block::Quote(q) => Block::Quote(Quote {
                content: owned_inlines(q.content),
                span: q.span,
            }),
            Block::Table(t) => Block::Table(Table {
                header: t.header.into_iter().map(TableCell::into_owned).collect(),
                rows: t
                    .rows
                    .into_iter()
                    .map(|row| TableRow {
                        cells: row.cells.into_iter().map(TableCell::into_owned).collect(),
                        span: row.span,
                    })
                    .collect(),
                span: t.span,
            }),
            Block::List(l) => Block::List(List {
                kind: l.kind,
                items: l
                    .items
                    .into_iter()
                    .map(|item| ListItem {
                        check: item.check,
                        content: owned_inlines(item.content),
                        span: item.span,
                    })
                    .collect(),
                span: l.span,
            }),
            Block::Paragraph(p) => Block::Paragraph(Paragraph {
                content: owned_inlines(p.content),
                span: p.span,
            }),
            Block::Spacer(span) => Block::Spacer(span),
        }
    }
}

/// Section heading with level and inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Heading level (1-3), the number of leading `#`.
    pub level: u8,
    /// Inline content after the marker.
    pub content: Vec<Inline<'a>>,
    /// Source span.
    pub span: Span,
}

/// Block quotation; one line, no nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote<'a> {
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// Text paragraph; always exactly one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// Pipe table.
///
/// Rows are neither padded nor truncated: a body row may have a different
/// cell count than the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    /// Header cells (empty when the run held only separator rows).
    pub header: Vec<TableCell<'a>>,
    /// Body rows in source order.
    pub rows: Vec<TableRow<'a>>,
    /// Source span, separator rows included.
    pub span: Span,
}

impl<'a> Table<'a> {
    /// Largest cell count across header and body rows.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}

/// A single body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub cells: Vec<TableCell<'a>>,
    pub span: Span,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell<'a> {
    /// Cell content, trimmed before inline formatting.
    pub content: Vec<Inline<'a>>,
}

impl<'a> TableCell<'a> {
    fn into_owned(self) -> TableCell<'static> {
        TableCell {
            content: owned_inlines(self.content),
        }
    }
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// At least one item used a numeric marker (`1.`).
    Ordered,
    /// Only bullet (`-`, `*`) or checkbox markers.
    Unordered,
}

/// A flat list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'a> {
    /// Ordered or unordered. Informational only.
    pub kind: ListKind,
    /// List items in source order.
    pub items: Vec<ListItem<'a>>,
    /// Source span.
    pub span: Span,
}

impl<'a> List<'a> {
    /// Whether any item used a numeric marker.
    pub fn is_ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }
}

/// Checkbox state of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// `- [ ]`
    Unchecked,
    /// `- [x]`
    Checked,
    /// Plain bullet or numbered item.
    NotApplicable,
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Checkbox classification.
    pub check: CheckState,
    /// Inline content after the marker.
    pub content: Vec<Inline<'a>>,
    /// Source span (always one line).
    pub span: Span,
}

/// Inline fragments within a block.
///
/// Fragments never nest: the text of a `Bold` is not scanned for code and
/// vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Plain text, markers that failed to pair included.
    Text(CowStr<'a>),
    /// `**bold**`
    Bold(CowStr<'a>),
    /// `` `code` ``
    Code(CowStr<'a>),
}

impl<'a> Inline<'a> {
    /// The literal text of this fragment, markers excluded.
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) | Inline::Code(s) => s,
        }
    }

    /// Detach the fragment from the input it borrows.
    pub fn into_owned(self) -> Inline<'static> {
        match self {
            Inline::Text(s) => Inline::Text(Cow::Owned(s.into_owned())),
            Inline::Bold(s) => Inline::Bold(Cow::Owned(s.into_owned())),
            Inline::Code(s) => Inline::Code(Cow::Owned(s.into_owned())),
        }
    }
}

fn owned_inlines(inlines: Vec<Inline<'_>>) -> Vec<Inline<'static>> {
    inlines.into_iter().map(Inline::into_owned).collect()
}
