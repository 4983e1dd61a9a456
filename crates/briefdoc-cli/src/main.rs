//! bdcli - render and inspect brief markup
//!
//! Usage:
//!   bdcli [OPTIONS] [COMMAND] [FILE]
//!
//! Commands:
//!   render    Show the block structure (default)
//!   stats     Show document statistics
//!   text      Print the marker-free text

mod error;
mod json;
mod telemetry;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use briefdoc_core::ast::TableCell;
use briefdoc_core::{parse, Block, CheckState, Document, Inline};
use clap::{Args, Parser, Subcommand};

use crate::error::CliError;
use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "bdcli", version, about = "Render and inspect brief markup")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    render: RenderArgs,

    /// Log record format (filter with BRIEFDOC_LOG, e.g. `briefdoc_core=trace`)
    #[arg(long, value_enum, default_value_t, env = "BRIEFDOC_LOG_FORMAT", global = true)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the block structure (default)
    Render(RenderArgs),
    /// Show document statistics
    Stats(InputArgs),
    /// Print the marker-free text, one block per line
    Text(InputArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input file; omit or pass `-` to read standard input
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Show inline content of every block
    #[arg(short, long)]
    verbose: bool,

    /// Output the document as JSON
    #[arg(short, long, conflicts_with = "verbose")]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.log_format) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or(Command::Render(cli.render)) {
        Command::Render(args) => {
            let input = read_input(args.input.file.as_deref())?;
            cmd_render(&parse(&input), &args)
        }
        Command::Stats(args) => {
            let input = read_input(args.file.as_deref())?;
            cmd_stats(&parse(&input), &input);
            Ok(())
        }
        Command::Text(args) => {
            let input = read_input(args.file.as_deref())?;
            println!("{}", parse(&input).plain_text());
            Ok(())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(CliError::Stdin)?;
            Ok(input)
        }
    }
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(doc: &Document, args: &RenderArgs) -> Result<(), CliError> {
    if args.json {
        let json = serde_json::to_string_pretty(&json::convert_document(doc))?;
        println!("{}", json);
    } else if args.verbose {
        print_document_verbose(doc);
    } else {
        print_document_summary(doc);
    }
    Ok(())
}

fn print_document_summary(doc: &Document) {
    println!("Lines: {}", doc.line_count);
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== Brief Document ===");
    println!("Lines: {}", doc.line_count);

    for (i, block) in doc.blocks.iter().enumerate() {
        println!();
        let span = block.span();
        println!(
            "[{}] {} (lines {}..{})",
            i + 1,
            describe_block(block),
            span.start,
            span.end
        );
        print_block_verbose(block, 1);
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Rule(_) => "Rule".to_string(),
        Block::Quote(_) => "Quote".to_string(),
        Block::Table(t) => format!("Table ({} columns, {} rows)", t.header.len(), t.rows.len()),
        Block::List(l) => format!("List ({:?}, {} items)", l.kind, l.items.len()),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::Spacer(span) => format!("Spacer ({} blank)", span.len()),
    }
}

fn print_block_verbose(block: &Block, indent: usize) {
    let prefix = "  ".repeat(indent);

    match block {
        Block::Heading(h) => println!("{}Content: {}", prefix, format_inlines(&h.content)),
        Block::Quote(q) => println!("{}Content: {}", prefix, format_inlines(&q.content)),
        Block::Paragraph(p) => println!("{}Content: {}", prefix, format_inlines(&p.content)),
        Block::Table(t) => {
            println!("{}Header: {}", prefix, format_cells(&t.header));
            for (i, row) in t.rows.iter().enumerate() {
                println!("{}Row {}: {}", prefix, i + 1, format_cells(&row.cells));
            }
        }
        Block::List(l) => {
            for (i, item) in l.items.iter().enumerate() {
                let glyph = match item.check {
                    CheckState::Checked => "[x] ",
                    CheckState::Unchecked => "[ ] ",
                    CheckState::NotApplicable => "",
                };
                println!(
                    "{}Item {}: {}{}",
                    prefix,
                    i + 1,
                    glyph,
                    format_inlines(&item.content)
                );
            }
        }
        Block::Rule(_) | Block::Spacer(_) => {}
    }
}

fn format_cells(cells: &[TableCell]) -> String {
    cells
        .iter()
        .map(|c| format_inlines(&c.content))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(t),
            Inline::Bold(b) => {
                result.push_str("**");
                result.push_str(b);
                result.push_str("**");
            }
            Inline::Code(c) => {
                result.push('`');
                result.push_str(c);
                result.push('`');
            }
        }
    }
    result
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document, input: &str) {
    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Lists:          {}", stats.lists);
    println!(
        "  List items:     {} ({} checked, {} unchecked)",
        stats.list_items, stats.checked, stats.unchecked
    );
    println!("  Tables:         {}", stats.tables);
    println!("  Table rows:     {}", stats.table_rows);
    println!("  Rules:          {}", stats.rules);
    println!("  Spacers:        {}", stats.spacers);
    println!();
    println!("Size:");
    println!("  Lines:          {}", stats.lines);
    println!("  Characters:     {}", stats.chars);
    println!("  Words (source): {}", stats.source_words);
    println!("  Words (text):   {}", stats.text_words);
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    quotes: usize,
    lists: usize,
    list_items: usize,
    checked: usize,
    unchecked: usize,
    tables: usize,
    table_rows: usize,
    rules: usize,
    spacers: usize,
    lines: usize,
    chars: usize,
    source_words: usize,
    text_words: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.blocks.len(),
            lines: doc.line_count,
            chars: input.chars().count(),
            source_words: input.split_whitespace().count(),
            text_words: doc.plain_text().split_whitespace().count(),
            ..Self::default()
        };

        for block in &doc.blocks {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::Quote(_) => stats.quotes += 1,
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                    for item in &l.items {
                        match item.check {
                            CheckState::Checked => stats.checked += 1,
                            CheckState::Unchecked => stats.unchecked += 1,
                            CheckState::NotApplicable => {}
                        }
                    }
                }
                Block::Table(t) => {
                    stats.tables += 1;
                    stats.table_rows += t.rows.len();
                }
                Block::Rule(_) => stats.rules += 1,
                Block::Spacer(_) => stats.spacers += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_file_defaults_to_render() {
        let cli = Cli::try_parse_from(["bdcli", "-j", "brief.md"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.render.json);
        assert_eq!(cli.render.input.file, Some(PathBuf::from("brief.md")));
    }

    #[test]
    fn subcommand_takes_its_own_file() {
        let cli = Cli::try_parse_from(["bdcli", "stats", "brief.md"]).unwrap();
        match cli.command {
            Some(Command::Stats(args)) => assert_eq!(args.file, Some(PathBuf::from("brief.md"))),
            other => panic!("expected stats, got {:?}", other),
        }
    }

    #[test]
    fn verbose_conflicts_with_json() {
        assert!(Cli::try_parse_from(["bdcli", "-v", "-j", "brief.md"]).is_err());
    }

    #[test]
    fn stats_count_checkboxes_and_rows() {
        let input = "# T\n\n- [x] a\n- [ ] b\n- c\n| h |\n|---|\n| 1 |\n| 2 |\n---";
        let doc = parse(input);
        let stats = DocumentStats::from_document(&doc, input);
        assert_eq!(stats.total_blocks, 5);
        assert_eq!(stats.list_items, 3);
        assert_eq!(stats.checked, 1);
        assert_eq!(stats.unchecked, 1);
        assert_eq!(stats.table_rows, 2);
        assert_eq!(stats.rules, 1);
        assert_eq!(stats.spacers, 1);
        assert_eq!(stats.lines, 10);
    }

    #[test]
    fn inline_markup_is_reconstructed() {
        let doc = parse("**Primary** → `/seo-article`");
        match &doc.blocks[0] {
            Block::Paragraph(p) => {
                assert_eq!(format_inlines(&p.content), "**Primary** → `/seo-article`")
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }
}
