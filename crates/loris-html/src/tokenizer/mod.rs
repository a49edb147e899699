//! Streaming tokenizer.
//!
//! A six-state machine over a pull-based character source, with one
//! character of pushback and an optional CDATA capture mode.

/// CDATA capture and exit-sequence replay.
pub mod cdata;
/// The state machine.
pub mod core;
/// Helper methods for reading, state transitions and emission.
pub mod helpers;
/// Token kinds and token views.
pub mod token;

pub use self::core::{HTMLStreamTokenizer, TokenizerState};
pub use token::{OwnedToken, Token, TokenKind};

use crate::error::TokenizerError;
use crate::options::TokenizerOptions;
use crate::source::StrSource;

/// Tokenize `input` to the end and collect every token, end-of-stream
/// excluded.
///
/// # Errors
///
/// Propagates tokenizer errors; an in-memory source itself never fails.
pub fn collect_tokens(
    input: &str,
    options: TokenizerOptions,
) -> Result<Vec<OwnedToken>, TokenizerError> {
    let mut tokenizer = HTMLStreamTokenizer::with_options(StrSource::new(input), options);
    let mut tokens = Vec::new();
    while tokenizer.next_token()? != TokenKind::EndOfStream {
        tokens.push(tokenizer.token().to_owned_token());
    }
    Ok(tokens)
}
