use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The kind of the token most recently produced by the tokenizer.
///
/// The discriminants are stable and may be relied on by adapters that
/// exchange token kinds as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[repr(i8)]
pub enum TokenKind {
    /// The source is exhausted and no buffered content remains.
    EndOfStream = -1,
    /// A run of character data, whitespace included.
    Text = -2,
    /// A start or end tag; the text is the tag interior.
    Tag = -3,
    /// A `<!-- ... -->` comment; the text excludes the delimiters.
    Comment = -4,
    /// A `<! ... >` declaration such as a doctype.
    BangTag = -5,
    /// An `&name;` reference, reported only when entity tokens are enabled.
    EntityReference = -6,
}

impl TokenKind {
    /// The stable integer code of this kind.
    #[must_use]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// The delimiters the tokenizer strips from tokens of this kind.
    #[must_use]
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Tag => ("<", ">"),
            Self::BangTag => ("<!", ">"),
            Self::Comment => ("<!--", "-->"),
            Self::EntityReference => ("&", ";"),
            Self::Text | Self::EndOfStream => ("", ""),
        }
    }
}

/// A borrowed view of the current token.
///
/// The text lives in the tokenizer's reusable buffer and is overwritten by
/// the next call to `next_token`; use [`Token::to_owned_token`] to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What was recognized.
    pub kind: TokenKind,
    /// The interpreted content, without delimiters.
    pub text: &'a str,
    /// Line number at the time the token was produced (1-based).
    pub line: usize,
}

impl Token<'_> {
    /// Returns true if this is the end-of-stream sentinel.
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfStream)
    }

    /// The token as it appeared in the source, delimiters restored.
    #[must_use]
    pub fn raw(&self) -> String {
        self.to_string()
    }

    /// Copy the token out of the tokenizer's buffer.
    #[must_use]
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            text: self.text.to_owned(),
            line: self.line,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.kind.delimiters();
        write!(f, "{open}{}{close}", self.text)
    }
}

/// A token detached from the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedToken {
    /// What was recognized.
    pub kind: TokenKind,
    /// The interpreted content, without delimiters.
    pub text: String,
    /// Line number at the time the token was produced (1-based).
    pub line: usize,
}

impl OwnedToken {
    /// Borrow this token as a [`Token`] view.
    #[must_use]
    pub fn as_token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: &self.text,
            line: self.line,
        }
    }
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        token.to_owned_token()
    }
}

impl fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_token().fmt(f)
    }
}
