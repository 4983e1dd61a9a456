//! # briefdoc core
//!
//! A single-pass renderer that turns brief markup (a small, line-oriented
//! Markdown subset) into an ordered list of typed blocks for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use briefdoc_core::{parse, Block, Inline};
//!
//! let doc = parse("# Content Brief\n\n- [x] **Keyword** picked\n- [ ] Outline");
//!
//! assert_eq!(doc.blocks.len(), 3);
//! if let Block::List(list) = &doc.blocks[2] {
//!     assert_eq!(list.items[0].content[0], Inline::Bold("Keyword".into()));
//! }
//! ```
//!
//! ## Grammar
//!
//! Each line is classified on its own, first match wins:
//!
//! 1. `# `, `## `, `### ` → heading
//! 2. `---` (trimmed) → rule
//! 3. `> ` → quote
//! 4. `|` → table (consumes the whole pipe run)
//! 5. `- `, `* `, `1. `, `- [x]`, `- [ ]` → list (consumes the whole marker run)
//! 6. blank → spacer (runs collapse to one)
//! 7. anything else → paragraph
//!
//! Inline text recognizes `**bold**` and `` `code` `` only. There is no error
//! path: malformed markup degrades to the closest plain reading.

pub mod ast;
pub mod block;
pub mod inline;
pub mod lexer;
pub mod list;
pub mod parser;
pub mod span;
pub mod table;
pub mod text;

pub use ast::{Block, CheckState, Document, Inline, ListKind};
pub use parser::parse;
pub use span::Span;
