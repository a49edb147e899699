//! Output formatting.

use std::io::{self, Write};

use anyhow::Result;
use loris_html::{
    CharSource, DocumentHandler, HTMLStreamTokenizer, HtmlTag, OwnedToken, TagParseError, TokenKind,
    parse_document,
};
use owo_colors::OwoColorize;

/// Terminal colors, or plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn kind(self, kind: TokenKind) -> String {
        let name = kind.to_string();
        let label = format!("{name:<15}");
        if !self.color {
            return label;
        }
        match kind {
            TokenKind::Tag => label.cyan().to_string(),
            TokenKind::Text => label.green().to_string(),
            TokenKind::Comment => label.dimmed().to_string(),
            TokenKind::BangTag => label.magenta().to_string(),
            TokenKind::EntityReference => label.yellow().to_string(),
            TokenKind::EndOfStream => label,
        }
    }

    fn error(self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_owned()
        }
    }

    fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }
}

/// Make whitespace in text runs visible.
fn visible(text: &str) -> String {
    text.replace('\n', "\\n").replace(' ', "\u{00B7}")
}

/// Advance the tokenizer. After a start tag named in `raw_text`, arm a CDATA
/// session so the element body comes back as one text token followed by its
/// end tag.
fn advance<S: CharSource>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    raw_text: &[String],
    tag: &mut HtmlTag,
) -> Result<TokenKind> {
    let kind = tokenizer.next_token()?;
    if kind == TokenKind::Tag
        && !raw_text.is_empty()
        && tokenizer.parse_tag(tag).is_ok()
        && !tag.is_end_tag()
        && !tag.is_empty()
        && raw_text.iter().any(|name| name.eq_ignore_ascii_case(tag.name()))
    {
        tokenizer.enter_cdata(&format!("</{}>", tag.name()), true)?;
    }
    Ok(kind)
}

/// Collect the whole token stream.
pub fn collect<S: CharSource>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    raw_text: &[String],
) -> Result<Vec<OwnedToken>> {
    let mut tag = HtmlTag::new();
    let mut tokens = Vec::new();
    while advance(tokenizer, raw_text, &mut tag)? != TokenKind::EndOfStream {
        tokens.push(tokenizer.token().to_owned_token());
    }
    Ok(tokens)
}

pub fn print_tokens<S: CharSource, W: Write>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    raw_text: &[String],
    palette: Palette,
    out: &mut W,
) -> Result<()> {
    let mut tag = HtmlTag::new();
    while advance(tokenizer, raw_text, &mut tag)? != TokenKind::EndOfStream {
        let token = tokenizer.token();
        let shown = match token.kind {
            TokenKind::Text => visible(token.text),
            _ => token.raw(),
        };
        let marker = if tokenizer.is_cdata_terminated() {
            palette.dim(" (cdata)")
        } else {
            String::new()
        };
        writeln!(out, "{:>5} {} {shown}{marker}", token.line, palette.kind(token.kind))?;
    }
    Ok(())
}

pub fn print_tags<S: CharSource, W: Write>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    raw_text: &[String],
    palette: Palette,
    out: &mut W,
) -> Result<()> {
    let mut scratch = HtmlTag::new();
    let mut tag = HtmlTag::new();
    while advance(tokenizer, raw_text, &mut scratch)? != TokenKind::EndOfStream {
        if tokenizer.kind() != TokenKind::Tag {
            continue;
        }
        let line = tokenizer.line_number();
        match tokenizer.parse_tag(&mut tag) {
            Ok(()) => writeln!(out, "{line:>5} {tag} {}", palette.dim(tag.kind().as_ref()))?,
            Err(err) => {
                let message = format!("{} ({err})", tokenizer.raw_text());
                writeln!(out, "{line:>5} {}", palette.error(&message))?;
            }
        }
    }
    Ok(())
}

pub fn print_events<S: CharSource, W: Write>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    palette: Palette,
    out: &mut W,
) -> Result<()> {
    let mut printer = EventPrinter {
        out,
        palette,
        depth: 0,
        line: 1,
        failure: None,
    };
    parse_document(tokenizer, &mut printer)?;
    match printer.failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Prints document events as an indented outline.
struct EventPrinter<'a, W> {
    out: &'a mut W,
    palette: Palette,
    depth: usize,
    line: usize,
    /// First write error; later events are dropped.
    failure: Option<io::Error>,
}

impl<W: Write> EventPrinter<'_, W> {
    fn emit(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        let indent = "  ".repeat(self.depth);
        if let Err(err) = writeln!(self.out, "{:>5} {indent}{text}", self.line) {
            self.failure = Some(err);
        }
    }
}

impl<W: Write> DocumentHandler for EventPrinter<'_, W> {
    fn start_element(&mut self, tag: &HtmlTag) {
        self.emit(&tag.to_string());
        self.depth += 1;
    }

    fn end_element(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.emit(&format!("</{name}>"));
    }

    fn characters(&mut self, text: &str) {
        self.emit(&format!("\"{}\"", visible(text)));
    }

    fn processing_instruction(&mut self, target: &str, data: &str) {
        self.emit(&format!("<?{target} {data}?>"));
    }

    fn comment(&mut self, text: &str) {
        let text = self.palette.dim(&format!("<!--{text}-->"));
        self.emit(&text);
    }

    fn declaration(&mut self, text: &str) {
        self.emit(&format!("<!{text}>"));
    }

    fn entity_reference(&mut self, name: &str) {
        self.emit(&format!("&{name};"));
    }

    fn malformed_tag(&mut self, raw: &str, error: TagParseError) {
        let text = self.palette.error(&format!("{raw} ({error})"));
        self.emit(&text);
    }

    fn set_line(&mut self, line: usize) {
        self.line = line;
    }
}
