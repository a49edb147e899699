//! Error types.
//!
//! Two families, matching the two ways things go wrong: the character source
//! fails (always fatal for the current document), or a captured tag body is
//! malformed (reported per tag; the caller decides whether to treat it as
//! text and carry on).

use std::io;

use thiserror::Error;

/// Errors raised by [`HTMLStreamTokenizer`](crate::HTMLStreamTokenizer).
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Reading the underlying character source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// A CDATA session was armed while the exit sequence of the previous
    /// session is still being replayed.
    #[error("cannot enter CDATA mode while the previous exit sequence is still being replayed")]
    CdataReplayPending,

    /// A CDATA session needs at least one character to match on.
    #[error("CDATA exit sequence must not be empty")]
    EmptyCdataExit,
}

/// Errors raised while decomposing a tag interior into name and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagParseError {
    /// Nothing but whitespace between `<` and `>`.
    #[error("malformed tag: empty tag body")]
    Empty,

    /// An end-tag slash with nothing after it, as in `</>`.
    #[error("malformed tag: end tag without a name")]
    EndTagWithoutName,
}

impl TagParseError {
    /// Every variant is a malformed-tag condition; kept as a predicate so
    /// callers do not need to match on the individual causes.
    #[must_use]
    pub const fn is_malformed_tag(self) -> bool {
        matches!(self, Self::Empty | Self::EndTagWithoutName)
    }
}
