//! Tag decomposition.

/// The parsed tag container and the sink trait it implements.
pub mod html_tag;
/// Legacy element-name classification.
pub mod kind;
/// The attribute scanner.
pub mod parser;

pub use html_tag::{Attribute, HtmlTag, TagSink};
pub use kind::TagKind;
pub use parser::parse_tag;
