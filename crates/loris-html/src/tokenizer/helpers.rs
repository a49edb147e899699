//! Helper methods for the stream tokenizer.
//!
//! - Input handling: the single read path shared by every state, which pulls
//!   from the pushback slot, then the CDATA replay buffer, then the source
//! - State transitions
//! - Token emission, including the end-of-stream flush

use std::io;

use loris_common::warning::warn_once;
use tracing::trace;

use super::cdata::CdataMode;
use super::core::{HTMLStreamTokenizer, TokenizerState};
use super::token::TokenKind;
use crate::escape::unescape_in_place;
use crate::source::CharSource;

// =============================================================================
// Input Helpers
// =============================================================================

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// Read the next character.
    ///
    /// Newlines are counted here, when a character first comes off the
    /// source. Pushed-back and replayed characters were already counted and
    /// are not counted again.
    pub(super) fn read_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pushback.take() {
            return Ok(Some(c));
        }
        if let Some(c) = self.cdata.next_replayed() {
            return Ok(Some(c));
        }
        if self.source_exhausted {
            return Ok(None);
        }

        let next = self.source.next_char()?;
        match next {
            None => self.source_exhausted = true,
            Some('\n') => self.line += 1,
            Some(_) => {}
        }
        Ok(next)
    }

    /// Hand `c` back so the next read returns it. At most one character is
    /// ever pending.
    pub(super) fn push_back(&mut self, c: Option<char>) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = c;
    }
}

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<S: CharSource> HTMLStreamTokenizer<S> {
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// Return to text and end the current token as `kind`.
    pub(super) const fn close_as(&mut self, kind: TokenKind) -> Option<TokenKind> {
        self.state = TokenizerState::Text;
        Some(kind)
    }
}

// =============================================================================
// Emission Helpers
// =============================================================================

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// Finish the pending text run, if there is one.
    pub(super) fn flush_text(&mut self) -> Option<TokenKind> {
        if self.buffer.is_empty() {
            return None;
        }
        if self.options.unescape && self.saw_ampersand {
            unescape_in_place(&mut self.buffer);
        }
        Some(TokenKind::Text)
    }

    /// Record `kind` as the current token type.
    pub(super) fn emit(&mut self, kind: TokenKind) -> TokenKind {
        self.kind = kind;
        trace!(%kind, line = self.line, state = %self.state, len = self.buffer.len(), "token");
        kind
    }

    /// The source ran dry. Text still pending is flushed; partial markup is
    /// dropped. Every later call reports end of stream.
    pub(super) fn finish(&mut self) -> TokenKind {
        let state = std::mem::replace(&mut self.state, TokenizerState::EndOfStream);

        if let CdataMode::Capturing(mut session) =
            std::mem::replace(&mut self.cdata, CdataMode::Inactive)
        {
            session.release(&mut self.buffer);
        }

        if matches!(state, TokenizerState::Text | TokenizerState::WhitespaceRun) {
            if let Some(kind) = self.flush_text() {
                return kind;
            }
        } else if state != TokenizerState::EndOfStream {
            warn_once(
                "Tokenizer",
                &format!("input ended inside {state}; partial markup dropped"),
            );
        }

        self.buffer.clear();
        TokenKind::EndOfStream
    }
}
