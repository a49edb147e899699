//! Callback-style document events on top of the tokenizer.
//!
//! [`parse_document`] walks a token stream and reports it to a
//! [`DocumentHandler`], parsing tags along the way. No tree is built and no
//! implicit closing happens: an end tag is reported exactly where it appears.

use tracing::debug;

use crate::error::{TagParseError, TokenizerError};
use crate::source::CharSource;
use crate::tag::HtmlTag;
use crate::tokenizer::{HTMLStreamTokenizer, TokenKind};

/// Receives document events. Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait DocumentHandler {
    /// Before the first token.
    fn start_document(&mut self) {}

    /// After the last token.
    fn end_document(&mut self) {}

    /// A start tag. Empty tags (`<br/>`) are followed by a matching
    /// [`end_element`](Self::end_element).
    fn start_element(&mut self, tag: &HtmlTag) {}

    /// An end tag, or the implicit end of an empty tag.
    fn end_element(&mut self, name: &str) {}

    /// A run of text, whitespace included.
    fn characters(&mut self, text: &str) {}

    /// `<?target data?>`.
    fn processing_instruction(&mut self, target: &str, data: &str) {}

    /// A comment body.
    fn comment(&mut self, text: &str) {}

    /// A `<! ... >` declaration body.
    fn declaration(&mut self, text: &str) {}

    /// An entity reference name, when the tokenizer reports them.
    fn entity_reference(&mut self, name: &str) {}

    /// A tag that could not be parsed. `raw` is the tag as it appeared in
    /// the input.
    fn malformed_tag(&mut self, raw: &str, error: TagParseError) {}

    /// Called with the current line before each event is delivered.
    fn set_line(&mut self, line: usize) {}
}

/// Split a processing-instruction body (after the `?`) into target and data.
fn split_instruction(body: &str) -> (&str, &str) {
    match body.split_once(' ') {
        Some((target, data)) => {
            let data = data.trim();
            (target, data.strip_suffix('?').unwrap_or(data))
        }
        None => (body.strip_suffix('?').unwrap_or(body), ""),
    }
}

/// Drive `tokenizer` to the end of its input, reporting to `handler`.
///
/// Malformed tags are reported through
/// [`DocumentHandler::malformed_tag`] and parsing carries on.
///
/// # Errors
///
/// Stream errors abort the walk and are returned; `end_document` is not
/// called in that case.
pub fn parse_document<S, H>(
    tokenizer: &mut HTMLStreamTokenizer<S>,
    handler: &mut H,
) -> Result<(), TokenizerError>
where
    S: CharSource,
    H: DocumentHandler + ?Sized,
{
    handler.start_document();
    let mut tag = HtmlTag::new();

    loop {
        let kind = tokenizer.next_token()?;
        handler.set_line(tokenizer.line_number());
        let text = tokenizer.text();

        match kind {
            TokenKind::EndOfStream => break,
            TokenKind::Text => handler.characters(text),
            TokenKind::Comment => handler.comment(text),
            TokenKind::BangTag => handler.declaration(text),
            TokenKind::EntityReference => handler.entity_reference(text),
            TokenKind::Tag => {
                if let Some(body) = text.strip_prefix('?') {
                    let (target, data) = split_instruction(body);
                    handler.processing_instruction(target, data);
                    continue;
                }
                match tokenizer.parse_tag(&mut tag) {
                    Ok(()) if tag.is_end_tag() => handler.end_element(tag.name()),
                    Ok(()) => {
                        handler.start_element(&tag);
                        if tag.is_empty() {
                            handler.end_element(tag.name());
                        }
                    }
                    Err(error) => {
                        debug!(%error, line = tokenizer.line_number(), "malformed tag");
                        handler.malformed_tag(&tokenizer.raw_text(), error);
                    }
                }
            }
        }
    }

    handler.end_document();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::split_instruction;

    #[test]
    fn test_split_instruction() {
        assert_eq!(
            split_instruction("xml version=\"1.0\"?"),
            ("xml", "version=\"1.0\"")
        );
        assert_eq!(split_instruction("php?"), ("php", ""));
        assert_eq!(split_instruction("target  data ? "), ("target", "data "));
    }
}
