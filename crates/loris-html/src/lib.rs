//! Lenient streaming HTML tokenizer for the Loris toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Stream tokenizer** ([`HTMLStreamTokenizer`])
//!   - Text, tags, `<! >` declarations, comments and entity references
//!   - One character of pushback, line counting
//!   - CDATA capture, both `<![CDATA[ ... ]]>` and caller-armed sessions
//!     for raw-text elements such as `<script>`
//!
//! - **Entity unescaping** ([`escape`])
//!   - The 86 Latin-1 named references and decimal `&#NNN;`
//!
//! - **Tag parsing** ([`tag`])
//!   - Name, end/empty markers and ordered attributes, with the legacy
//!     leniency rules (bare attributes, unquoted values, unterminated quotes)
//!
//! - **Document events** ([`events`])
//!
//! # Not Implemented
//!
//! - Tree construction and implicit tag closing
//! - Character set decoding beyond UTF-8 byte sources
//! - Hexadecimal and HTML5 named character references

/// Character classification.
pub mod chars;
/// Error types.
pub mod error;
/// Entity reference resolution.
pub mod escape;
/// Callback-style document events.
pub mod events;
/// Tokenizer configuration.
pub mod options;
/// Character sources.
pub mod source;
/// Tag decomposition.
pub mod tag;
/// The stream tokenizer.
pub mod tokenizer;

pub use error::{TagParseError, TokenizerError};
pub use escape::{unescape, unescape_in_place};
pub use events::{DocumentHandler, parse_document};
pub use options::TokenizerOptions;
pub use source::{CharSource, ReadSource, StrSource};
pub use tag::{Attribute, HtmlTag, TagKind, TagSink, parse_tag};
pub use tokenizer::{
    HTMLStreamTokenizer, OwnedToken, Token, TokenKind, TokenizerState, collect_tokens,
};
