//! Marker-free text of blocks and documents.
//!
//! Used for clipboard copies and word counts. Inline markers and block
//! markers are gone; table cells are joined with tabs, list items and table
//! rows with newlines.

use crate::ast::{Block, Document, Inline, TableCell};

/// Concatenate the literal text of inline fragments.
pub fn inline_text(inlines: &[Inline<'_>]) -> String {
    let mut out = String::with_capacity(inlines.iter().map(|i| i.as_str().len()).sum());
    for inline in inlines {
        out.push_str(inline.as_str());
    }
    out
}

fn row_text(cells: &[TableCell<'_>]) -> String {
    cells
        .iter()
        .map(|cell| inline_text(&cell.content))
        .collect::<Vec<_>>()
        .join("\t")
}

impl<'a> Block<'a> {
    /// Literal text of this block. Rules and spacers have none.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading(h) => inline_text(&h.content),
            Block::Quote(q) => inline_text(&q.content),
            Block::Paragraph(p) => inline_text(&p.content),
            Block::Table(t) => {
                let mut lines = Vec::with_capacity(t.rows.len() + 1);
                if !t.header.is_empty() {
                    lines.push(row_text(&t.header));
                }
                lines.extend(t.rows.iter().map(|row| row_text(&row.cells)));
                lines.join("\n")
            }
            Block::List(l) => l
                .items
                .iter()
                .map(|item| inline_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Rule(_) | Block::Spacer(_) => String::new(),
        }
    }
}

impl<'a> Document<'a> {
    /// Literal text of the whole document, one block per line.
    ///
    /// Spacers and rules come out as empty lines, so paragraph breaks
    /// survive a copy.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
