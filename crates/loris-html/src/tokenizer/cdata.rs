//! CDATA sessions.
//!
//! While a session is active the tokenizer accumulates every character as
//! text until a caller-supplied exit sequence is seen. The sequence matches
//! case-insensitively. Characters that looked like the start of the exit
//! sequence but turned out not to be are released back into the text, so
//! nothing is lost on a near miss. Matching restarts after the character
//! that broke it, so `]]]>` does not close an XML CDATA section.

use tracing::debug;

use super::core::HTMLStreamTokenizer;
use crate::error::TokenizerError;
use crate::source::CharSource;

/// Exit sequence of an XML-style `<![CDATA[ ... ]]>` section.
pub(crate) const XML_CDATA_EXIT: &str = "]]>";

/// Compare two characters ignoring case, in either direction.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// Where the tokenizer stands with respect to CDATA.
#[derive(Debug, Default)]
pub(crate) enum CdataMode {
    #[default]
    Inactive,
    Capturing(CdataSession),
    /// The exit sequence matched and is being fed back through the state
    /// machine, one character per read.
    Replaying { chars: Vec<char>, next: usize },
}

impl CdataMode {
    /// Pop the next replayed character, dropping back to `Inactive` once the
    /// replay buffer is drained.
    pub(crate) fn next_replayed(&mut self) -> Option<char> {
        let Self::Replaying { chars, next } = self else {
            return None;
        };
        let c = chars.get(*next).copied();
        *next += 1;
        if *next >= chars.len() {
            *self = Self::Inactive;
        }
        c
    }

    pub(crate) const fn is_replaying(&self) -> bool {
        matches!(self, Self::Replaying { .. })
    }
}

/// An armed CDATA session.
#[derive(Debug)]
pub(crate) struct CdataSession {
    exit: Vec<char>,
    /// Input characters currently matching a prefix of `exit`.
    held: Vec<char>,
    /// Feed the matched exit sequence back through the tokenizer once the
    /// session ends.
    repush: bool,
}

/// Result of feeding one character to a session.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CdataStep {
    Pending,
    Matched,
}

impl CdataSession {
    pub(crate) fn new(exit: &str, repush: bool) -> Self {
        Self {
            exit: exit.chars().collect(),
            held: Vec::new(),
            repush,
        }
    }

    /// Feed one character. On a mismatch the held prefix and `c` itself are
    /// appended to `text` and matching restarts with the next character; `c`
    /// is not retried as the start of a new match.
    pub(crate) fn feed(&mut self, c: char, text: &mut String) -> CdataStep {
        let expected = self.exit.get(self.held.len()).copied();
        if !expected.is_some_and(|e| chars_eq_ignore_case(c, e)) {
            text.extend(self.held.drain(..));
            text.push(c);
            return CdataStep::Pending;
        }

        self.held.push(c);
        if self.held.len() == self.exit.len() {
            CdataStep::Matched
        } else {
            CdataStep::Pending
        }
    }

    /// Release partially matched characters, used when the stream ends
    /// mid-match.
    pub(crate) fn release(&mut self, text: &mut String) {
        text.extend(self.held.drain(..));
    }

    /// What follows a successful match.
    pub(crate) fn into_next_mode(self) -> CdataMode {
        if self.repush && !self.held.is_empty() {
            CdataMode::Replaying {
                chars: self.held,
                next: 0,
            }
        } else {
            CdataMode::Inactive
        }
    }
}

impl<S: CharSource> HTMLStreamTokenizer<S> {
    /// Arm a CDATA session: once the tokenizer is back in text, everything
    /// up to `exit_sequence` (matched case-insensitively) comes back as a
    /// single text token, with entity processing off.
    ///
    /// With `repush`, the matched exit sequence is then fed back through the
    /// state machine, so `enter_cdata("</script>", true)` yields the script
    /// body followed by a regular `/script` tag token.
    ///
    /// Arming a new session replaces any session that is still capturing.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::EmptyCdataExit`] for an empty exit sequence, and
    /// [`TokenizerError::CdataReplayPending`] if the exit sequence of the
    /// previous session has not been fully replayed yet.
    pub fn enter_cdata(&mut self, exit_sequence: &str, repush: bool) -> Result<(), TokenizerError> {
        if exit_sequence.is_empty() {
            return Err(TokenizerError::EmptyCdataExit);
        }
        if self.cdata.is_replaying() {
            return Err(TokenizerError::CdataReplayPending);
        }
        self.start_cdata(exit_sequence, repush);
        Ok(())
    }

    pub(crate) fn start_cdata(&mut self, exit_sequence: &str, repush: bool) {
        debug!(exit = exit_sequence, repush, line = self.line, "entering CDATA");
        self.cdata = CdataMode::Capturing(CdataSession::new(exit_sequence, repush));
    }

    /// Called once the exit sequence has matched.
    pub(crate) fn finish_cdata(&mut self) {
        if let CdataMode::Capturing(session) = std::mem::take(&mut self.cdata) {
            self.cdata = session.into_next_mode();
        }
        self.cdata_terminated = true;
        debug!(line = self.line, replaying = self.cdata.is_replaying(), "left CDATA");
    }

    /// Whether a CDATA session is currently capturing text.
    #[must_use]
    pub const fn is_in_cdata(&self) -> bool {
        matches!(self.cdata, CdataMode::Capturing(_))
    }

    /// Whether the token just returned was ended by a CDATA exit sequence.
    #[must_use]
    pub const fn is_cdata_terminated(&self) -> bool {
        self.cdata_terminated
    }
}
