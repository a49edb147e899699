//! Entity reference resolution.
//!
//! Covers the Latin-1 named references of HTML 3.2 plus decimal numeric
//! references (`&#169;`). Hexadecimal references and the HTML5 named set are
//! not recognized; they pass through as literal text.

/// Named character reference lookup table.
pub mod named_character_references;
/// Text unescaping over a read cursor and a trailing write cursor.
pub mod unescape;

pub use named_character_references::lookup_entity;
pub use unescape::{resolve_reference, unescape, unescape_in_place};
