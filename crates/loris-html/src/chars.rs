//! Character classification shared by the tokenizer, the unescaper and the
//! tag parser.
//!
//! Whitespace is a fixed table over the first 256 code units: space, tab,
//! CR, LF and the control range `0x0E..=0x1F`. Vertical tab and form feed are
//! deliberately absent, and nothing above `0xFF` counts as whitespace.

/// Size of the classification table.
const CTYPE_LEN: usize = 256;

/// Built at compile time; never mutated.
static WHITESPACE: [bool; CTYPE_LEN] = build_whitespace_table();

const fn build_whitespace_table() -> [bool; CTYPE_LEN] {
    let mut table = [false; CTYPE_LEN];
    table[b' ' as usize] = true;
    table[b'\r' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\t' as usize] = true;
    let mut i = 0x0E;
    while i <= 0x1F {
        table[i] = true;
        i += 1;
    }
    table
}

/// Slash that marks an end tag (`</p>`).
pub const END_TAG_MARKER: char = '/';
/// Slash that marks an empty, self-closing tag (`<br/>`).
pub const EMPTY_TAG_MARKER: char = '/';
/// Single quote.
pub const SINGLE_QUOTE: char = '\'';
/// Double quote.
pub const DOUBLE_QUOTE: char = '"';

/// Returns true if `c` is markup whitespace.
#[must_use]
pub fn is_space(c: char) -> bool {
    usize::try_from(u32::from(c))
        .ok()
        .and_then(|index| WHITESPACE.get(index))
        .copied()
        .unwrap_or(false)
}

/// Byte form of [`is_space`], for scanning UTF-8 text. Continuation and lead
/// bytes of multi-byte sequences are `>= 0x80` and never match.
#[must_use]
pub fn is_space_byte(b: u8) -> bool {
    WHITESPACE[usize::from(b)]
}

/// Returns true if `c` is punctuation, i.e. anything that is not a letter or
/// a digit (whitespace and symbols included).
///
/// Letter numbers (`Ⅷ`) and the Latin-1 superscripts and fractions (`²`,
/// `½`) are not letters or digits. Other numeric symbols, such as circled
/// digits, still count as digits.
#[must_use]
pub fn is_punct(c: char) -> bool {
    !(is_letter(c) || is_digit(c))
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

fn is_digit(c: char) -> bool {
    c.is_numeric()
        && !c.is_alphabetic()
        && !matches!(c, '\u{B2}' | '\u{B3}' | '\u{B9}' | '\u{BC}'..='\u{BE}')
}

/// Returns true if `c` terminates an entity reference: `;`, `<`, any
/// punctuation other than `#`, or whitespace.
#[must_use]
pub fn is_entity_terminator(c: char) -> bool {
    c == ';' || c == '<' || (is_punct(c) && c != '#') || is_space(c)
}

/// Returns true if `c` is one of the two attribute quote characters.
#[must_use]
pub const fn is_quote(c: char) -> bool {
    matches!(c, SINGLE_QUOTE | DOUBLE_QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_table() {
        for c in [' ', '\t', '\r', '\n', '\u{0E}', '\u{1F}'] {
            assert!(is_space(c), "{c:?} should be whitespace");
        }
        for c in ['\u{0B}', '\u{0C}', '\u{A0}', 'a', '\u{3000}'] {
            assert!(!is_space(c), "{c:?} should not be whitespace");
        }
    }

    #[test]
    fn test_space_byte_agrees_with_char() {
        for b in 0u8..0x80 {
            assert_eq!(is_space_byte(b), is_space(char::from(b)));
        }
        assert!(!is_space_byte(0xC2));
    }

    #[test]
    fn test_entity_terminators() {
        assert!(is_entity_terminator(';'));
        assert!(is_entity_terminator('<'));
        assert!(is_entity_terminator('&'));
        assert!(is_entity_terminator(' '));
        assert!(!is_entity_terminator('#'));
        assert!(!is_entity_terminator('a'));
        assert!(!is_entity_terminator('7'));
        assert!(!is_entity_terminator('é'));
        assert!(!is_entity_terminator('٣'));
    }

    #[test]
    fn test_numeric_symbols_are_punctuation() {
        for c in ['\u{2167}', '\u{BD}', '\u{B2}', '\u{BE}'] {
            assert!(is_punct(c), "{c:?} should be punctuation");
            assert!(is_entity_terminator(c), "{c:?} should end a reference");
        }
        for c in ['a', 'Z', '7', 'ß', '\u{663}'] {
            assert!(!is_punct(c), "{c:?} should not be punctuation");
        }
    }
}
