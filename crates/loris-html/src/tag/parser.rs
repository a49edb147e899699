//! Decomposition of a captured tag interior into name and attributes.
//!
//! The scan works on bytes. Every delimiter it looks for (whitespace, `/`,
//! `=`, quotes) is ASCII, so each slice boundary falls on a character
//! boundary.

use std::borrow::Cow;

use loris_common::warning::warn_once;

use super::html_tag::TagSink;
use crate::chars::{EMPTY_TAG_MARKER, END_TAG_MARKER, is_quote, is_space_byte};
use crate::error::TagParseError;
use crate::escape::unescape;

/// Cursor over a tag interior.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    /// Exclusive end of the region still to be scanned.
    end: usize,
}

impl<'a> Scanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            end: text.len(),
        }
    }

    fn peek(&self) -> Option<u8> {
        (self.pos < self.end).then(|| self.text.as_bytes()[self.pos])
    }

    const fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    fn skip_space(&mut self) {
        self.advance_while(is_space_byte);
    }

    fn advance_while(&mut self, keep: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&keep) {
            self.pos += 1;
        }
    }

    /// Consume a quoted span starting at the opening quote. Returns the
    /// range between the quotes, or `None` if the closing quote is missing.
    fn quoted(&mut self, quote: u8) -> Option<(usize, usize)> {
        self.pos += 1;
        let start = self.pos;
        self.advance_while(|b| b != quote);
        if self.at_end() {
            return None;
        }
        let range = (start, self.pos);
        self.pos += 1;
        Some(range)
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }
}

fn is_quote_byte(b: u8) -> bool {
    is_quote(char::from(b))
}

/// Parse the text between `<` and `>` into `tag`.
///
/// `tag` is reset first. Attribute values are entity-unescaped when
/// `unescape_values` is set. Malformed attributes never fail the parse: an
/// unterminated quote drops that attribute and ends the scan.
///
/// # Errors
///
/// [`TagParseError::Empty`] if the interior is blank, and
/// [`TagParseError::EndTagWithoutName`] if nothing follows the end-tag `/`.
pub fn parse_tag<T: TagSink + ?Sized>(
    interior: &str,
    unescape_values: bool,
    tag: &mut T,
) -> Result<(), TagParseError> {
    tag.reset();
    let mut scan = Scanner::new(interior);

    scan.skip_space();
    if scan.at_end() {
        return Err(TagParseError::Empty);
    }

    if scan.peek().map(char::from) == Some(END_TAG_MARKER) {
        tag.set_end_tag(true);
        scan.pos += 1;
        if scan.at_end() {
            return Err(TagParseError::EndTagWithoutName);
        }
    }

    let name_start = scan.pos;
    scan.advance_while(|b| !is_space_byte(b) && char::from(b) != EMPTY_TAG_MARKER);
    tag.set_name(scan.slice(name_start, scan.pos));

    trim_tail(&mut scan, tag);
    parse_attributes(&mut scan, unescape_values, tag);
    Ok(())
}

/// Drop trailing whitespace and a trailing empty-tag `/` from the region
/// left after the name.
fn trim_tail<T: TagSink + ?Sized>(scan: &mut Scanner<'_>, tag: &mut T) {
    if scan.at_end() {
        return;
    }
    let bytes = scan.text.as_bytes();
    let mut last = scan.end - 1;
    while last > scan.pos && is_space_byte(bytes[last]) {
        last -= 1;
    }
    if char::from(bytes[last]) == EMPTY_TAG_MARKER {
        tag.set_empty(true);
        scan.end = last;
    } else {
        scan.end = last + 1;
    }
}

fn parse_attributes<T: TagSink + ?Sized>(
    scan: &mut Scanner<'_>,
    unescape_values: bool,
    tag: &mut T,
) {
    while !scan.at_end() {
        scan.skip_space();
        let Some(first) = scan.peek() else {
            break;
        };

        let name_start = scan.pos;
        let name = if is_quote_byte(first) {
            if scan.quoted(first).is_none() {
                abandon(scan.text);
                break;
            }
            // Quoted names keep their quotes.
            scan.slice(name_start, scan.pos)
        } else {
            scan.advance_while(|b| !is_space_byte(b) && b != b'=');
            scan.slice(name_start, scan.pos)
        };

        scan.skip_space();
        if scan.peek() != Some(b'=') {
            // SGML minimization: `<option selected>` means selected="selected".
            tag.add_attribute(name, name);
            continue;
        }
        scan.pos += 1;

        if scan.at_end() {
            // `name=` with nothing after it is dropped.
            break;
        }
        scan.skip_space();
        let Some(first) = scan.peek() else {
            tag.add_attribute(name, name);
            break;
        };

        let value = if is_quote_byte(first) {
            let Some((start, end)) = scan.quoted(first) else {
                abandon(scan.text);
                break;
            };
            scan.slice(start, end)
        } else {
            let start = scan.pos;
            scan.advance_while(|b| !is_space_byte(b));
            scan.slice(start, scan.pos)
        };

        let value = if unescape_values {
            unescape(value)
        } else {
            Cow::Borrowed(value)
        };
        tag.add_attribute(name, &value);
    }
}

fn abandon(interior: &str) {
    warn_once(
        "TagParser",
        &format!("unterminated quote in <{interior}>; remaining attributes skipped"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl TagSink for Recorder {
        fn reset(&mut self) {
            self.events.push("reset".to_owned());
        }
        fn set_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }
        fn set_end_tag(&mut self, end_tag: bool) {
            self.events.push(format!("end {end_tag}"));
        }
        fn set_empty(&mut self, empty: bool) {
            self.events.push(format!("empty {empty}"));
        }
        fn add_attribute(&mut self, name: &str, value: &str) {
            self.events.push(format!("attr {name}={value}"));
        }
    }

    #[test]
    fn test_sink_sees_calls_in_order() {
        let mut sink = Recorder::default();
        parse_tag("/a href=x", false, &mut sink).unwrap();
        assert_eq!(sink.events, ["reset", "end true", "name a", "attr href=x"]);
    }

    #[test]
    fn test_trim_tail_stops_at_name() {
        let mut sink = Recorder::default();
        parse_tag("br/", false, &mut sink).unwrap();
        assert_eq!(sink.events, ["reset", "name br", "empty true"]);
    }
}
