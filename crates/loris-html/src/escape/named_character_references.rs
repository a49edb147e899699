//! Named character reference lookup table.
//!
//! Names are matched case-sensitively (`Auml` and `auml` are different
//! letters) and without the leading `&` or trailing `;`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The named character reference table.
/// Maps entity names to their single replacement character.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    HashMap::from([
        // Markup delimiters
        ("amp", '&'),
        ("lt", '<'),
        ("gt", '>'),
        ("quot", '"'),
        ("nbsp", '\u{00A0}'),
        // Punctuation and symbols
        ("iexcl", '\u{00A1}'),  // ¡
        ("cent", '\u{00A2}'),   // ¢
        ("pound", '\u{00A3}'),  // £
        ("yen", '\u{00A5}'),    // ¥
        ("brvbar", '\u{00A6}'), // ¦
        ("sect", '\u{00A7}'),   // §
        ("copy", '\u{00A9}'),   // ©
        ("laquo", '\u{00AB}'),  // «
        ("not", '\u{00AC}'),    // ¬
        ("reg", '\u{00AE}'),    // ®
        ("deg", '\u{00B0}'),    // °
        ("plusmn", '\u{00B1}'), // ±
        ("sup2", '\u{00B2}'),   // ²
        ("sup3", '\u{00B3}'),   // ³
        ("para", '\u{00B6}'),   // ¶
        ("middot", '\u{00B7}'), // ·
        ("sup1", '\u{00B9}'),   // ¹
        ("frac14", '\u{00BC}'), // ¼
        ("frac12", '\u{00BD}'), // ½
        ("frac34", '\u{00BE}'), // ¾
        ("iquest", '\u{00BF}'), // ¿
        // Uppercase Latin-1 letters
        ("Agrave", '\u{00C0}'),
        ("Aacute", '\u{00C1}'),
        ("Acirc", '\u{00C2}'),
        ("Atilde", '\u{00C3}'),
        ("Auml", '\u{00C4}'),
        ("AElig", '\u{00C6}'),
        ("Ccedil", '\u{00C7}'),
        ("Egrave", '\u{00C8}'),
        ("Eacute", '\u{00C9}'),
        ("Ecirc", '\u{00CA}'),
        ("Euml", '\u{00CB}'),
        ("Igrave", '\u{00CC}'),
        ("Icirc", '\u{00CE}'),
        ("Iuml", '\u{00CF}'),
        ("ETH", '\u{00D0}'),
        ("Ntilde", '\u{00D1}'),
        ("Ograve", '\u{00D2}'),
        ("Oacute", '\u{00D3}'),
        ("Ocirc", '\u{00D4}'),
        ("Otilde", '\u{00D5}'),
        ("Ouml", '\u{00D6}'),
        ("Oslash", '\u{00D8}'),
        ("Ugrave", '\u{00D9}'),
        ("Uacute", '\u{00DA}'),
        ("Ucirc", '\u{00DB}'),
        ("Uuml", '\u{00DC}'),
        ("Yacute", '\u{00DD}'),
        ("THORN", '\u{00DE}'),
        // Lowercase Latin-1 letters
        ("szlig", '\u{00DF}'),
        ("agrave", '\u{00E0}'),
        ("aacute", '\u{00E1}'),
        ("acirc", '\u{00E2}'),
        ("atilde", '\u{00E3}'),
        ("auml", '\u{00E4}'),
        ("aring", '\u{00E5}'),
        ("aelig", '\u{00E6}'),
        ("ccedil", '\u{00E7}'),
        ("egrave", '\u{00E8}'),
        ("eacute", '\u{00E9}'),
        ("ecirc", '\u{00EA}'),
        ("euml", '\u{00EB}'),
        ("igrave", '\u{00EC}'),
        ("iacute", '\u{00ED}'),
        ("icirc", '\u{00EE}'),
        ("iuml", '\u{00EF}'),
        ("eth", '\u{00F0}'),
        ("ntilde", '\u{00F1}'),
        ("ograve", '\u{00F2}'),
        ("oacute", '\u{00F3}'),
        ("ocirc", '\u{00F4}'),
        ("otilde", '\u{00F5}'),
        ("ouml", '\u{00F6}'),
        ("oslash", '\u{00F8}'),
        ("ugrave", '\u{00F9}'),
        ("uacute", '\u{00FA}'),
        ("ucirc", '\u{00FB}'),
        ("uuml", '\u{00FC}'),
        ("yacute", '\u{00FD}'),
        ("thorn", '\u{00FE}'),
        ("yuml", '\u{00FF}'),
    ])
});

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&' or a trailing ';'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp")   // Returns Some('&')
/// lookup_entity("AMP")   // Returns None - names are case-sensitive
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<char> {
    NAMED_ENTITIES.get(name).copied()
}

/// Number of named references the table knows.
#[must_use]
pub fn entity_count() -> usize {
    NAMED_ENTITIES.len()
}
