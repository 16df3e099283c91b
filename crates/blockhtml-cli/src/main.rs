//! blockhtml - convert between stored HTML and editor blocks
//!
//! Subcommands:
//!   to-blocks : HTML (file or stdin) → JSON block array on stdout
//!   to-html   : JSON block array (file or stdin) → HTML on stdout
//!   fix       : repair markdown left in article HTML
//!
//! Logging goes to stderr; set RUST_LOG=blockhtml=debug for details.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use blockhtml::{
    blocks_from_json, blocks_to_json, blocks_to_json_pretty, fix_all, fix_article_formatting,
    serialize, BlockHtmlError, BlockParser, Filter, HighlightOutput, Options,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse HTML into editor blocks (JSON)
    ToBlocks {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Drop top-level elements with this tag (repeatable)
        #[arg(long = "remove", value_name = "TAG")]
        remove: Vec<String>,
    },

    /// Serialize editor blocks (JSON) to HTML
    ToHtml {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Class attribute for links
        #[arg(long)]
        link_class: Option<String>,

        /// Keep highlighted text as <mark>
        #[arg(long)]
        mark: bool,
    },

    /// Repair markdown artefacts in article HTML
    Fix {
        /// Input files (default: stdin to stdout)
        inputs: Vec<PathBuf>,

        /// Rewrite changed files instead of printing them
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> blockhtml::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::ToBlocks {
            input,
            pretty,
            remove,
        } => {
            let html = read_input(input.as_deref())?;
            let mut parser = BlockParser::new();
            for tag in &remove {
                parser.remove(Filter::tag(tag));
            }
            let blocks = parser.parse(&html);
            let json = if pretty {
                blocks_to_json_pretty(&blocks)?
            } else {
                blocks_to_json(&blocks)?
            };
            write_output(&json)
        }

        Command::ToHtml {
            input,
            link_class,
            mark,
        } => {
            let json = read_input(input.as_deref())?;
            let blocks = blocks_from_json(&json)?;
            let mut options = Options::default();
            if let Some(class) = link_class {
                options.link_class = class;
            }
            if mark {
                options.highlight = HighlightOutput::Mark;
            }
            write_output(&serialize(&blocks, &options))
        }

        Command::Fix { inputs, in_place } => fix(&inputs, in_place),
    }
}

fn fix(inputs: &[PathBuf], in_place: bool) -> blockhtml::Result<()> {
    if inputs.is_empty() {
        if in_place {
            return Err(BlockHtmlError::InvalidInput(
                "--in-place needs at least one input file".to_string(),
            ));
        }
        let html = read_input(None)?;
        return write_output(&fix_article_formatting(&html).html);
    }

    let documents = inputs
        .iter()
        .map(|path| Ok((path.clone(), fs::read_to_string(path)?)))
        .collect::<blockhtml::Result<Vec<_>>>()?;
    let summary = fix_all(documents);

    for (path, fix) in &summary.fixed {
        if in_place {
            fs::write(path, &fix.html)?;
            tracing::info!(path = %path.display(), changes = fix.changes, "rewrote file");
        } else {
            println!("{}: {} change(s)", path.display(), fix.changes);
        }
    }
    eprintln!(
        "{} of {} file(s) needed fixes",
        summary.fixed.len(),
        summary.scanned
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> blockhtml::Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(text: &str) -> blockhtml::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
