//! Entity unescaping.
//!
//! Scanning runs left to right with a read cursor and a write cursor that
//! trails it. An `&` starts a tentative reference that runs up to the next
//! terminator (see [`is_entity_terminator`]). A resolved reference is written
//! back as its single character; the terminator is swallowed only when it is
//! `;`, so `&lt&gt` resolves both halves. An unresolved one (`AT&T`) is
//! copied through untouched.
//!
//! The replacement character never takes more UTF-8 bytes than the `&name`
//! it replaces, so the output always fits in the input's storage.

use std::borrow::Cow;

use crate::chars::is_entity_terminator;

use super::named_character_references::lookup_entity;

/// Resolve the text between `&` and its terminator.
///
/// `#` followed by ASCII decimal digits is a numeric reference to that code
/// point; anything else is looked up in the named table. Returns `None` for
/// unknown names, a bare `#`, non-digits after `#`, and numbers that are not
/// Unicode scalar values.
#[must_use]
pub fn resolve_reference(span: &str) -> Option<char> {
    let Some(digits) = span.strip_prefix('#') else {
        return lookup_entity(span);
    };
    if digits.is_empty() {
        return None;
    }
    let mut code: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10)?;
        code = code.checked_mul(10)?.checked_add(digit)?;
    }
    char::from_u32(code)
}

/// Return `text` with entity references resolved.
///
/// Borrows the input when it contains no `&`.
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut owned = text.to_owned();
    unescape_in_place(&mut owned);
    Cow::Owned(owned)
}

/// Resolve entity references in `buf`, compacting it in place.
pub fn unescape_in_place(buf: &mut String) {
    if !buf.contains('&') {
        return;
    }

    let mut bytes = std::mem::take(buf).into_bytes();
    let len = bytes.len();
    let mut read = 0;
    let mut write = 0;

    while read < len {
        if bytes[read] != b'&' {
            bytes[write] = bytes[read];
            write += 1;
            read += 1;
            continue;
        }

        let name_start = read + 1;
        let name_end = find_terminator(&bytes, name_start);
        let resolved = std::str::from_utf8(&bytes[name_start..name_end])
            .ok()
            .and_then(resolve_reference);

        if let Some(c) = resolved {
            let mut scratch = [0u8; 4];
            let encoded = c.encode_utf8(&mut scratch).as_bytes();
            bytes[write..write + encoded.len()].copy_from_slice(encoded);
            write += encoded.len();
            read = if bytes.get(name_end) == Some(&b';') {
                name_end + 1
            } else {
                name_end
            };
        } else {
            bytes.copy_within(read..name_end, write);
            write += name_end - read;
            read = name_end;
        }
    }

    bytes.truncate(write);
    *buf = String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
}

/// Byte offset of the first entity terminator at or after `start`, or the
/// end of the buffer.
fn find_terminator(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while let Some((c, width)) = decode_char(bytes, pos) {
        if is_entity_terminator(c) {
            return pos;
        }
        pos += width;
    }
    bytes.len()
}

/// Decode the character starting at `pos` of a region that is still valid
/// UTF-8 (everything at or after the read cursor).
fn decode_char(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    let lead = *bytes.get(pos)?;
    let width = match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    };
    let encoded = bytes.get(pos..pos + width)?;
    let c = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((c, width))
}
