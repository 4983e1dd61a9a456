//! Document assembler.
//!
//! Drives the block dispatcher from the first line to the last and collects
//! the emitted blocks. Parsing is total: every string produces a document,
//! and every line ends up in exactly one block.

use crate::ast::{Block, Document};
use crate::block::dispatch;
use crate::lexer::split_lines;

/// Render `input` into a document.
///
/// ```rust
/// use briefdoc_core::{parse, Block};
///
/// let doc = parse("line1\n\n\nline2\n");
/// assert_eq!(doc.blocks.len(), 3);
/// assert!(matches!(doc.blocks[1], Block::Spacer(_)));
/// ```
pub fn parse(input: &str) -> Document<'_> {
    let lines = split_lines(input);
    let mut assembler = Assembler::with_capacity(lines.len());
    let mut cursor = 0;

    while let Some(step) = dispatch(&lines, cursor) {
        debug_assert!(step.consumed > 0, "dispatch must consume at least one line");
        cursor += step.consumed;
        assembler.push(step.block);
    }

    let document = assembler.finish(lines.len());
    tracing::debug!(
        lines = document.line_count,
        blocks = document.blocks.len(),
        "parsed document"
    );
    document
}

/// Collects blocks in order, folding blank-line runs into one spacer.
struct Assembler<'a> {
    blocks: Vec<Block<'a>>,
    /// Whether the last block pushed was a spacer.
    in_blank_run: bool,
}

impl<'a> Assembler<'a> {
    fn with_capacity(lines: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(lines.min(64)),
            in_blank_run: false,
        }
    }

    fn push(&mut self, block: Block<'a>) {
        if let Block::Spacer(span) = block {
            if self.in_blank_run {
                if let Some(Block::Spacer(run)) = self.blocks.last_mut() {
                    *run = run.merge(span);
                    return;
                }
            }
            self.in_blank_run = true;
        } else {
            self.in_blank_run = false;
        }
        self.blocks.push(block);
    }

    fn finish(self, line_count: usize) -> Document<'a> {
        Document {
            blocks: self.blocks,
            line_count,
        }
    }
}
