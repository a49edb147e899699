//! Tokenizer configuration.

use serde::{Deserialize, Serialize};

/// Flags supplied by the embedding application.
///
/// Deserializes from partial documents: missing fields keep their defaults.
///
/// ```ignore
/// let options: TokenizerOptions = serde_json::from_str(r#"{ "unescape": true }"#)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Resolve entity references in text runs and attribute values.
    pub unescape: bool,
    /// Surface `&name;` as separate entity-reference tokens instead of
    /// folding them into text.
    pub report_entities_as_tokens: bool,
}

impl TokenizerOptions {
    /// Options with unescaping switched on.
    #[must_use]
    pub const fn unescaped() -> Self {
        Self {
            unescape: true,
            report_entities_as_tokens: false,
        }
    }
}
