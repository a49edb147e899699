//! Character sources the tokenizer pulls from.
//!
//! The tokenizer consumes one code point at a time and treats `Ok(None)` as
//! the out-of-band end-of-stream signal. Sources are pull-based and may
//! block; bounding how long a read can take is up to the embedding
//! application.

use std::io::{self, Bytes, ErrorKind, Read};
use std::vec;

/// A stream of Unicode scalar values.
pub trait CharSource {
    /// Pull the next character.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the source cannot be read.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

/// An in-memory source over an owned string. Never fails.
#[derive(Debug)]
pub struct StrSource {
    chars: vec::IntoIter<char>,
}

impl StrSource {
    /// Create a source over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl From<&str> for StrSource {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for StrSource {
    fn from(input: String) -> Self {
        Self::new(&input)
    }
}

impl CharSource for StrSource {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// A source that decodes UTF-8 from a byte reader one code point at a time.
///
/// The reader should be buffered; every code point costs one `read` call per
/// byte otherwise. Malformed UTF-8 surfaces as an [`ErrorKind::InvalidData`]
/// error.
#[derive(Debug)]
pub struct ReadSource<R> {
    bytes: Bytes<R>,
}

impl<R: Read> ReadSource<R> {
    /// Wrap `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
const fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}

impl<R: Read> CharSource for ReadSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead).ok_or_else(invalid_utf8)?;

        let mut encoded = [lead, 0, 0, 0];
        for slot in encoded.iter_mut().take(width).skip(1) {
            // A sequence cut short by end of stream is as malformed as a bad byte.
            *slot = self.next_byte()?.ok_or_else(invalid_utf8)?;
        }

        std::str::from_utf8(&encoded[..width])
            .map_err(|_| invalid_utf8())?
            .chars()
            .next()
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}
