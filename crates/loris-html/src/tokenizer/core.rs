use loris_common::warning::warn_once;
use strum_macros::Display;

use super::cdata::{CdataMode, CdataStep, XML_CDATA_EXIT};
use super::token::{Token, TokenKind};
use crate::chars::{is_entity_terminator, is_quote};
use crate::error::{TagParseError, TokenizerError};
use crate::options::TokenizerOptions;
use crate::source::{CharSource, StrSource};
use crate::tag::{TagSink, parse_tag};

/// The tokenizer's lexical states. The state persists across calls to
/// [`HTMLStreamTokenizer::next_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Character data, and CDATA capture when a session is armed.
    Text,
    /// Inside `< ... >`.
    Tag,
    /// Inside a quoted attribute value within a tag.
    TagQuote,
    /// Inside `<! ... >`, tracking nested `<`.
    BangTag,
    /// Inside `<!-- ... -->`.
    Comment,
    /// After `&`, when entity references are reported as tokens.
    EntityRef,
    /// A run of whitespace. Never entered: whitespace is always part of
    /// [`Text`](Self::Text), and a tokenizer put here behaves as in text.
    WhitespaceRun,
    /// The source is exhausted. Sticky.
    EndOfStream,
}

/// A lenient, streaming HTML tokenizer.
///
/// Pulls characters from a [`CharSource`] one at a time and splits them into
/// text runs, tags, declarations, comments and (optionally) entity
/// references. It never fails on malformed markup: stray `<`, unbalanced
/// quotes and bare ampersands all come through as best-effort tokens.
///
/// The current token lives in a buffer that is reused by the next call, so
/// [`token`](Self::token) borrows the tokenizer.
///
/// ```ignore
/// let mut tokenizer = HTMLStreamTokenizer::from_text("<p>Hallo world</p>");
/// while tokenizer.next_token()? != TokenKind::EndOfStream {
///     println!("{}", tokenizer.token());
/// }
/// ```
#[derive(Debug)]
pub struct HTMLStreamTokenizer<S> {
    pub(super) source: S,
    /// Set once the source returned end of stream; it is not polled again.
    pub(super) source_exhausted: bool,
    pub(super) state: TokenizerState,
    pub(super) kind: TokenKind,
    pub(super) buffer: String,
    pub(super) line: usize,
    pub(super) pushback: Option<char>,
    pub(super) cdata: CdataMode,
    pub(super) cdata_terminated: bool,
    pub(super) options: TokenizerOptions,
    /// Quote that opened the current quoted attribute value.
    pub(super) tag_quote: char,
    /// Consecutive `-` seen inside a comment.
    pub(super) dash_run: usize,
    /// Unmatched `<` inside the current bang tag.
    pub(super) bang_depth: usize,
    /// The current text run contains `&`.
    pub(super) saw_ampersand: bool,
}

impl HTMLStreamTokenizer<StrSource> {
    /// Tokenize an in-memory document with default options.
    #[must_use]
    pub fn from_text(input: &str) -> Self {
        Self::new(StrSource::new(input))
    }
}

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// Create a tokenizer over `source` with default options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Create a tokenizer over `source`.
    #[must_use]
    pub fn with_options(source: S, options: TokenizerOptions) -> Self {
        Self {
            source,
            source_exhausted: false,
            state: TokenizerState::Text,
            kind: TokenKind::EndOfStream,
            buffer: String::new(),
            line: 1,
            pushback: None,
            cdata: CdataMode::Inactive,
            cdata_terminated: false,
            options,
            tag_quote: '"',
            dash_run: 0,
            bang_depth: 0,
            saw_ampersand: false,
        }
    }

    /// Advance to the next token and return its kind.
    ///
    /// Once [`TokenKind::EndOfStream`] has been returned, every later call
    /// returns it again.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::Io`] if the source fails. The tokenizer
    /// should not be used for the same document afterwards.
    pub fn next_token(&mut self) -> Result<TokenKind, TokenizerError> {
        self.buffer.clear();
        self.bang_depth = 0;
        self.cdata_terminated = false;
        self.saw_ampersand = false;

        if self.state == TokenizerState::EndOfStream {
            return Ok(self.emit(TokenKind::EndOfStream));
        }

        loop {
            let Some(c) = self.read_char()? else {
                let kind = self.finish();
                return Ok(self.emit(kind));
            };

            let produced = match self.state {
                TokenizerState::Text | TokenizerState::WhitespaceRun => {
                    self.handle_text_state(c)?
                }
                TokenizerState::Tag => self.handle_tag_state(c),
                TokenizerState::TagQuote => self.handle_tag_quote_state(c),
                TokenizerState::BangTag => self.handle_bang_tag_state(c),
                TokenizerState::Comment => self.handle_comment_state(c),
                TokenizerState::EntityRef => self.handle_entity_ref_state(c),
                TokenizerState::EndOfStream => Some(TokenKind::EndOfStream),
            };

            if let Some(kind) = produced {
                return Ok(self.emit(kind));
            }
        }
    }

    fn handle_text_state(&mut self, c: char) -> Result<Option<TokenKind>, TokenizerError> {
        if let CdataMode::Capturing(session) = &mut self.cdata {
            if session.feed(c, &mut self.buffer) == CdataStep::Matched {
                self.finish_cdata();
                return Ok(Some(TokenKind::Text));
            }
            return Ok(None);
        }

        match c {
            '<' => {
                match self.read_char()? {
                    Some('!') => self.switch_to(TokenizerState::BangTag),
                    Some('<') => {
                        // `<<` is literal text, common in <pre> blocks.
                        self.buffer.push_str("<<");
                        return Ok(None);
                    }
                    other => {
                        self.push_back(other);
                        self.switch_to(TokenizerState::Tag);
                    }
                }
                Ok(self.flush_text())
            }
            '&' if self.options.report_entities_as_tokens => {
                self.switch_to(TokenizerState::EntityRef);
                Ok(self.flush_text())
            }
            '&' => {
                self.saw_ampersand = true;
                self.buffer.push(c);
                Ok(None)
            }
            _ => {
                self.buffer.push(c);
                Ok(None)
            }
        }
    }

    fn handle_tag_state(&mut self, c: char) -> Option<TokenKind> {
        match c {
            '>' => self.close_as(TokenKind::Tag),
            q if is_quote(q) => {
                self.tag_quote = q;
                self.buffer.push(q);
                self.switch_to(TokenizerState::TagQuote);
                None
            }
            _ => {
                self.buffer.push(c);
                None
            }
        }
    }

    fn handle_tag_quote_state(&mut self, c: char) -> Option<TokenKind> {
        if c == '>' {
            // Unterminated quote: give up on it and let the tag close.
            warn_once("Tokenizer", "unterminated quote in tag");
            self.push_back(Some(c));
            self.switch_to(TokenizerState::Tag);
            return None;
        }
        self.buffer.push(c);
        if c == self.tag_quote {
            self.switch_to(TokenizerState::Tag);
        }
        None
    }

    fn handle_bang_tag_state(&mut self, c: char) -> Option<TokenKind> {
        match c {
            '<' => self.bang_depth += 1,
            '>' if self.bang_depth == 0 => return self.close_as(TokenKind::BangTag),
            '>' => self.bang_depth -= 1,
            '-' if self.buffer == "-" => {
                self.buffer.clear();
                self.dash_run = 0;
                self.switch_to(TokenizerState::Comment);
                return None;
            }
            '[' if self.buffer == "[CDATA" => {
                self.buffer.clear();
                self.start_cdata(XML_CDATA_EXIT, false);
                self.switch_to(TokenizerState::Text);
                return None;
            }
            _ => {}
        }
        self.buffer.push(c);
        None
    }

    fn handle_comment_state(&mut self, c: char) -> Option<TokenKind> {
        if c == '>' && self.dash_run >= 2 {
            // Drop the `--` of the closing delimiter.
            self.buffer.truncate(self.buffer.len().saturating_sub(2));
            self.dash_run = 0;
            return self.close_as(TokenKind::Comment);
        }
        if c == '-' {
            self.dash_run += 1;
        } else {
            self.dash_run = 0;
        }
        self.buffer.push(c);
        None
    }

    fn handle_entity_ref_state(&mut self, c: char) -> Option<TokenKind> {
        if is_entity_terminator(c) {
            if c != ';' {
                self.push_back(Some(c));
            }
            return self.close_as(TokenKind::EntityReference);
        }
        self.buffer.push(c);
        None
    }
}

// =============================================================================
// Token Access
// =============================================================================

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// The kind of the current token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The interpreted text of the current token, without delimiters.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The current token.
    #[must_use]
    pub fn token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: &self.buffer,
            line: self.line,
        }
    }

    /// The current token as it appeared in the source, delimiters restored.
    #[must_use]
    pub fn raw_text(&self) -> String {
        self.token().raw()
    }

    /// Number of newlines read so far, plus one.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line
    }

    /// The current lexical state.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Decompose the current tag token into name and attributes, honoring the
    /// tokenizer's unescape setting for attribute values.
    ///
    /// # Errors
    ///
    /// Returns a [`TagParseError`] when the tag body has no name.
    pub fn parse_tag<T: TagSink + ?Sized>(&self, tag: &mut T) -> Result<(), TagParseError> {
        parse_tag(&self.buffer, self.options.unescape, tag)
    }

    /// Give back the underlying source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}

// =============================================================================
// Options
// =============================================================================

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// The current options.
    #[must_use]
    pub const fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Resolve entity references in text and attribute values.
    pub const fn set_unescape(&mut self, unescape: bool) {
        self.options.unescape = unescape;
    }

    /// Whether entity references are being resolved.
    #[must_use]
    pub const fn is_unescaped(&self) -> bool {
        self.options.unescape
    }

    /// Report `&name;` as [`TokenKind::EntityReference`] tokens.
    pub const fn set_report_entities(&mut self, report: bool) {
        self.options.report_entities_as_tokens = report;
    }

    /// Whether entity references are reported as tokens.
    #[must_use]
    pub const fn reports_entities(&self) -> bool {
        self.options.report_entities_as_tokens
    }
}
