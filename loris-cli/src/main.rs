//! Loris CLI
//!
//! Tokenizes HTML from a file, a literal string or standard input and prints
//! tokens, parsed tags, document events or JSON.
//!
//! Set `RUST_LOG=loris_html=trace` to watch the tokenizer work.

mod render;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use loris_common::logging::init_tracing;
use loris_common::warning::clear_warnings;
use loris_html::{CharSource, HTMLStreamTokenizer, ReadSource, StrSource, TokenizerOptions};

use render::Palette;

/// Loris: a lenient streaming HTML tokenizer
#[derive(Parser, Debug)]
#[command(name = "loris")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r##"EXAMPLES:
    # Print the token stream of a file
    loris page.html

    # Parse inline HTML and show the parsed tags
    loris --format tags --html '<img src=x/><a href="#top">up</a>'

    # Resolve entities and keep script bodies intact
    loris --unescape --raw-text script --raw-text style page.html

    # Document events, reading from stdin
    curl -s https://example.com | loris --format events

    # Options from a JSON file: { "unescape": true, "report_entities_as_tokens": false }
    loris --config options.json --format json page.html
"##)]
struct Cli {
    /// HTML file to read; standard input when omitted
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Tokenize this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Format::Tokens)]
    format: Format,

    /// Resolve entity references in text and attribute values
    #[arg(short, long)]
    unescape: bool,

    /// Report `&name;` references as separate tokens
    #[arg(short, long)]
    entities: bool,

    /// Load tokenizer options from a JSON file; flags are applied on top
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Capture the body of this element verbatim, like a script (repeatable)
    #[arg(long = "raw-text", value_name = "TAG")]
    raw_text: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per token with its line number and kind
    Tokens,
    /// Parsed tags only
    Tags,
    /// Indented document events
    Events,
    /// Token stream as a JSON array
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = load_options(&cli)?;
    clear_warnings();
    let mut tokenizer = HTMLStreamTokenizer::with_options(open_source(&cli)?, options);

    let stdout = io::stdout();
    let palette = Palette::new(!cli.no_color && stdout.is_terminal());
    let mut out = BufWriter::new(stdout.lock());

    match cli.format {
        Format::Tokens => render::print_tokens(&mut tokenizer, &cli.raw_text, palette, &mut out)?,
        Format::Tags => render::print_tags(&mut tokenizer, &cli.raw_text, palette, &mut out)?,
        Format::Events => render::print_events(&mut tokenizer, palette, &mut out)?,
        Format::Json => {
            let tokens = render::collect(&mut tokenizer, &cli.raw_text)?;
            serde_json::to_writer_pretty(&mut out, &tokens).context("failed to write JSON")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Options from `--config`, with the command-line flags switched on top.
fn load_options(cli: &Cli) -> Result<TokenizerOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => TokenizerOptions::default(),
    };
    options.unescape |= cli.unescape;
    options.report_entities_as_tokens |= cli.entities;
    Ok(options)
}

/// Input from `--html`, the file argument, or standard input.
fn open_source(cli: &Cli) -> Result<Box<dyn CharSource>> {
    if let Some(html) = &cli.html {
        return Ok(Box::new(StrSource::new(html)));
    }
    match &cli.path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(ReadSource::new(BufReader::new(file))))
        }
        None => Ok(Box::new(ReadSource::new(io::stdin().lock()))),
    }
}
