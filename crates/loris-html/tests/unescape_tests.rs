//! Integration tests for entity unescaping.

use std::borrow::Cow;

use loris_html::escape::resolve_reference;
use loris_html::{unescape, unescape_in_place};

#[test]
fn test_text_without_ampersand_is_borrowed() {
    assert!(matches!(unescape("plain text"), Cow::Borrowed("plain text")));
}

#[test]
fn test_named_references() {
    assert_eq!(unescape("a &amp; b"), "a & b");
    assert_eq!(unescape("&lt;p&gt;"), "<p>");
    assert_eq!(unescape("caf&eacute;"), "café");
    assert_eq!(unescape("&quot;q&quot;"), "\"q\"");
    assert_eq!(unescape("x&nbsp;y"), "x\u{a0}y");
}

#[test]
fn test_unresolved_reference_is_literal() {
    assert_eq!(unescape("AT&T"), "AT&T");
    assert_eq!(unescape("&bogus; stays"), "&bogus; stays");
    assert_eq!(unescape("&AMP;"), "&AMP;");
    assert_eq!(unescape("fish & chips"), "fish & chips");
    assert_eq!(unescape("&"), "&");
}

#[test]
fn test_terminator_other_than_semicolon_is_kept() {
    assert_eq!(unescape("a &amp&amp b"), "a && b");
    assert_eq!(unescape("&lt&gt"), "<>");
    assert_eq!(unescape("&copy 2024"), "\u{a9} 2024");
    assert_eq!(unescape("&amp<b>"), "&<b>");
}

#[test]
fn test_numeric_symbols_terminate_references() {
    assert_eq!(unescape("&frac12\u{BD}"), "\u{BD}\u{BD}");
    assert_eq!(unescape("&sup2\u{2167}"), "\u{B2}\u{2167}");
    assert_eq!(unescape("&amp\u{663}"), "&amp\u{663}");
}

#[test]
fn test_reference_at_end_of_text() {
    assert_eq!(unescape("x &amp"), "x &");
    assert_eq!(unescape("x &#65"), "x A");
}

#[test]
fn test_double_ampersand() {
    assert_eq!(unescape("&&amp;"), "&&");
}

#[test]
fn test_decimal_references() {
    assert_eq!(unescape("&#65;&#66;C"), "ABC");
    assert_eq!(unescape("&#169;"), "\u{a9}");
    assert_eq!(unescape("&#9731;"), "\u{2603}");
}

#[test]
fn test_invalid_numeric_references_are_literal() {
    assert_eq!(unescape("&#x41;"), "&#x41;");
    assert_eq!(unescape("&#;"), "&#;");
    assert_eq!(unescape("&#12a;"), "&#12a;");
    assert_eq!(unescape("&#55296;"), "&#55296;");
    assert_eq!(unescape("&#99999999999999;"), "&#99999999999999;");
}

#[test]
fn test_resolve_reference() {
    assert_eq!(resolve_reference("amp"), Some('&'));
    assert_eq!(resolve_reference("#38"), Some('&'));
    assert_eq!(resolve_reference("#"), None);
    assert_eq!(resolve_reference(""), None);
    assert_eq!(resolve_reference("Amp"), None);
}

#[test]
fn test_in_place_reuses_buffer() {
    let mut buf = String::with_capacity(64);
    buf.push_str("&lt;b&gt; &eacute;t&eacute;");
    let capacity = buf.capacity();
    unescape_in_place(&mut buf);
    assert_eq!(buf, "<b> été");
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_non_ascii_around_references() {
    assert_eq!(unescape("☃&amp;☃ &ü;"), "☃&☃ &ü;");
}
