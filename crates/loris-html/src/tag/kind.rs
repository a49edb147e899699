use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Classification of a tag name against the legacy HTML element vocabulary.
///
/// Lookup ignores ASCII case; anything outside the table is
/// [`TagKind::Unknown`].
///
/// ```ignore
/// assert_eq!(TagKind::from_name("h6"), TagKind::H6);
/// assert_eq!(TagKind::from_name("h7"), TagKind::Unknown);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum TagKind {
    #[default]
    Unknown,
    A,
    Abbrev,
    Acronym,
    Address,
    Applet,
    Area,
    Au,
    B,
    Banner,
    Base,
    Basefont,
    Bgsound,
    Big,
    Blink,
    Blockquote,
    Body,
    Br,
    Caption,
    Center,
    Cite,
    Code,
    Col,
    Colgroup,
    Credit,
    Dd,
    Del,
    Dfn,
    Dir,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fig,
    Fn,
    Font,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Html,
    Hr,
    I,
    Img,
    Input,
    Ins,
    Isindex,
    Kbd,
    Lang,
    Lh,
    Li,
    Link,
    Map,
    Marquee,
    Menu,
    Meta,
    Nextid,
    Nobr,
    Noembed,
    Noframe,
    Noframes,
    Note,
    Object,
    Ol,
    Option,
    Overlay,
    P,
    Param,
    Person,
    Pre,
    Q,
    Range,
    S,
    Samp,
    Script,
    Select,
    Small,
    Spot,
    Strong,
    Style,
    Sub,
    Sup,
    Tab,
    Table,
    Tbody,
    Td,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    Tt,
    U,
    Ul,
    Var,
    Wbr,
    Iframe,
    #[strum(serialize = "!DOCTYPE")]
    Doctype,
}

impl TagKind {
    /// Classify a tag name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns true for the catch-all variant.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}
