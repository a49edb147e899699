use core::fmt;
use std::num::ParseIntError;

use serde::Serialize;

use super::kind::TagKind;
use crate::chars::{DOUBLE_QUOTE, END_TAG_MARKER, SINGLE_QUOTE};

/// Receiver for the pieces of a parsed tag.
///
/// [`parse_tag`](super::parse_tag) calls `reset` first and then reports the
/// name, the end/empty markers and each attribute in source order. Implement
/// this to collect tags into your own representation; [`HtmlTag`] is the
/// stock implementation.
pub trait TagSink {
    /// Clear everything from a previous parse.
    fn reset(&mut self);
    /// The tag name, exactly as written.
    fn set_name(&mut self, name: &str);
    /// The tag had a leading `/`.
    fn set_end_tag(&mut self, end_tag: bool);
    /// The tag had a trailing `/`.
    fn set_empty(&mut self, empty: bool);
    /// One attribute, in source order. Duplicates are reported as found.
    fn add_attribute(&mut self, name: &str, value: &str);
}

/// A single `name="value"` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Name as written, surrounding quotes included when it was quoted.
    pub name: String,
    /// Value with quotes removed; a bare attribute carries its own name.
    pub value: String,
}

/// A parsed start or end tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HtmlTag {
    name: String,
    kind: TagKind,
    end_tag: bool,
    empty: bool,
    attributes: Vec<Attribute>,
}

impl HtmlTag {
    /// An empty tag, ready to be filled by a parse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tag name as written in the source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag name classified against the known element names.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        self.kind
    }

    /// `</name>`.
    #[must_use]
    pub const fn is_end_tag(&self) -> bool {
        self.end_tag
    }

    /// `<name/>`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// All attributes in source order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Number of attributes, duplicates included.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Value of the first attribute called `name`, ignoring ASCII case.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// The attribute at `index`, in source order.
    #[must_use]
    pub fn attribute_at(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    /// Whether an attribute called `name` exists, ignoring ASCII case.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Parse the value of `name` as an integer.
    ///
    /// `None` if the attribute is absent; otherwise the parse result.
    #[must_use]
    pub fn int_attribute(&self, name: &str) -> Option<Result<i64, ParseIntError>> {
        self.attribute(name).map(|value| value.trim().parse())
    }

    /// Remove the first attribute called `name`, returning its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.position(name)
            .map(|i| self.attributes.remove(i).value)
    }

    /// Append an attribute.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
    }
}

impl TagSink for HtmlTag {
    fn reset(&mut self) {
        self.name.clear();
        self.kind = TagKind::Unknown;
        self.end_tag = false;
        self.empty = false;
        self.attributes.clear();
    }

    fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
        self.kind = TagKind::from_name(name);
    }

    fn set_end_tag(&mut self, end_tag: bool) {
        self.end_tag = end_tag;
    }

    fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
    }

    fn add_attribute(&mut self, name: &str, value: &str) {
        self.push_attribute(name, value);
    }
}

impl fmt::Display for HtmlTag {
    /// Renders `<[/]name a="v" [/]>`. A value containing `"` is wrapped in
    /// single quotes instead. A value holding both quote characters cannot be
    /// written back faithfully.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        if self.end_tag {
            write!(f, "{END_TAG_MARKER}")?;
        }
        f.write_str(&self.name)?;
        for attr in &self.attributes {
            let quote = if attr.value.contains(DOUBLE_QUOTE) {
                SINGLE_QUOTE
            } else {
                DOUBLE_QUOTE
            };
            write!(f, " {}={quote}{}{quote}", attr.name, attr.value)?;
        }
        if self.empty {
            f.write_str(" /")?;
        }
        f.write_str(">")
    }
}
