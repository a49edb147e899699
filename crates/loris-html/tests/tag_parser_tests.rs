//! Integration tests for tag parsing.

use loris_html::{
    Attribute, HTMLStreamTokenizer, HtmlTag, StrSource, TagKind, TagParseError, TokenKind,
    TokenizerOptions, parse_tag,
};
use pretty_assertions::assert_eq;

/// Helper to parse a tag interior into a fresh `HtmlTag`.
fn parse(interior: &str) -> HtmlTag {
    let mut tag = HtmlTag::new();
    parse_tag(interior, false, &mut tag).unwrap();
    tag
}

fn pairs(tag: &HtmlTag) -> Vec<(&str, &str)> {
    tag.attributes()
        .iter()
        .map(|attr| (attr.name.as_str(), attr.value.as_str()))
        .collect()
}

#[test]
fn test_start_tag() {
    let tag = parse("p");
    assert_eq!(tag.name(), "p");
    assert_eq!(tag.kind(), TagKind::P);
    assert!(!tag.is_end_tag());
    assert!(!tag.is_empty());
    assert_eq!(tag.attribute_count(), 0);
}

#[test]
fn test_end_tag() {
    let tag = parse("/TABLE");
    assert!(tag.is_end_tag());
    assert_eq!(tag.name(), "TABLE");
    assert_eq!(tag.kind(), TagKind::Table);
}

#[test]
fn test_empty_tag_with_unquoted_value() {
    let tag = parse("img src=x/");
    assert_eq!(tag.name(), "img");
    assert!(tag.is_empty());
    assert_eq!(pairs(&tag), [("src", "x")]);
}

#[test]
fn test_empty_tag_markers() {
    for interior in ["br/", "br /", "br / ", "  br/"] {
        let tag = parse(interior);
        assert_eq!(tag.name(), "br", "{interior:?}");
        assert!(tag.is_empty(), "{interior:?}");
        assert_eq!(tag.attribute_count(), 0, "{interior:?}");
    }
}

#[test]
fn test_blank_tag_is_malformed() {
    let mut tag = HtmlTag::new();
    for interior in ["", "   ", "\t\n"] {
        let err = parse_tag(interior, false, &mut tag).unwrap_err();
        assert_eq!(err, TagParseError::Empty);
        assert!(err.is_malformed_tag());
    }
}

#[test]
fn test_lone_slash_is_malformed() {
    let mut tag = HtmlTag::new();
    assert_eq!(parse_tag("/", false, &mut tag), Err(TagParseError::EndTagWithoutName));
    assert_eq!(parse_tag("  /", false, &mut tag), Err(TagParseError::EndTagWithoutName));
}

#[test]
fn test_slash_then_space_gives_nameless_end_tag() {
    let tag = parse("/ ");
    assert!(tag.is_end_tag());
    assert_eq!(tag.name(), "");
    assert_eq!(tag.kind(), TagKind::Unknown);
}

#[test]
fn test_bare_attributes_take_their_name() {
    let tag = parse("input type=\"checkbox\" checked disabled");
    assert_eq!(
        pairs(&tag),
        [("type", "checkbox"), ("checked", "checked"), ("disabled", "disabled")]
    );
}

#[test]
fn test_whitespace_around_equals() {
    let tag = parse("a href = \"x y\"  title=  't' rel\t=next");
    assert_eq!(pairs(&tag), [("href", "x y"), ("title", "t"), ("rel", "next")]);
}

#[test]
fn test_unquoted_values_end_at_whitespace() {
    let tag = parse("a href=/path/to?q=1&r=2 class=x\"y");
    assert_eq!(pairs(&tag), [("href", "/path/to?q=1&r=2"), ("class", "x\"y")]);
}

#[test]
fn test_quoted_values_keep_inner_quotes_and_gt() {
    let tag = parse("a title='say \"hi\"' alt=\"it's\"");
    assert_eq!(pairs(&tag), [("title", "say \"hi\""), ("alt", "it's")]);
}

#[test]
fn test_empty_quoted_value() {
    let tag = parse("option value=\"\"");
    assert_eq!(tag.attribute("value"), Some(""));
}

#[test]
fn test_unterminated_value_stops_the_scan() {
    let tag = parse("a b=1 c=\"oops d=2");
    assert_eq!(pairs(&tag), [("b", "1")]);
}

#[test]
fn test_unterminated_quoted_name_stops_the_scan() {
    let tag = parse("a b=1 \"c=2");
    assert_eq!(pairs(&tag), [("b", "1")]);
}

#[test]
fn test_quoted_name_keeps_quotes() {
    let tag = parse("x \"odd name\"=v");
    assert_eq!(pairs(&tag), [("\"odd name\"", "v")]);
}

#[test]
fn test_equals_at_end_drops_attribute() {
    let tag = parse("a href=/");
    assert!(tag.is_empty());
    assert_eq!(tag.attribute_count(), 0);
}

#[test]
fn test_attribute_values_unescaped_on_request() {
    let mut tag = HtmlTag::new();
    parse_tag("a title=\"a &amp; b\" href=x&amp;y", true, &mut tag).unwrap();
    assert_eq!(pairs(&tag), [("title", "a & b"), ("href", "x&y")]);

    parse_tag("a title=\"a &amp; b\"", false, &mut tag).unwrap();
    assert_eq!(pairs(&tag), [("title", "a &amp; b")]);
}

#[test]
fn test_parse_resets_previous_contents() {
    let mut tag = HtmlTag::new();
    parse_tag("/img src=x /", false, &mut tag).unwrap();
    parse_tag("p", false, &mut tag).unwrap();
    assert_eq!(tag, parse("p"));
}

#[test]
fn test_duplicate_attributes_first_match_wins() {
    let mut tag = parse("meta NAME=a name=b");
    assert_eq!(tag.attribute_count(), 2);
    assert_eq!(tag.attribute("name"), Some("a"));
    assert_eq!(tag.remove_attribute("Name"), Some("a".to_owned()));
    assert_eq!(tag.attribute("name"), Some("b"));
    assert_eq!(tag.remove_attribute("missing"), None);
}

#[test]
fn test_attribute_lookup() {
    let tag = parse("td colspan=2 width=wide nowrap");
    assert_eq!(tag.int_attribute("COLSPAN"), Some(Ok(2)));
    assert!(matches!(tag.int_attribute("width"), Some(Err(_))));
    assert_eq!(tag.int_attribute("rowspan"), None);
    assert!(tag.has_attribute("NoWrap"));
    assert!(!tag.has_attribute("align"));
    assert_eq!(
        tag.attribute_at(0),
        Some(&Attribute {
            name: "colspan".to_owned(),
            value: "2".to_owned(),
        })
    );
    assert_eq!(tag.attribute_at(3), None);
}

#[test]
fn test_tag_kind_lookup() {
    assert_eq!(parse("H6").kind(), TagKind::H6);
    assert_eq!(parse("h7").kind(), TagKind::Unknown);
    assert_eq!(parse("blink").kind(), TagKind::Blink);
    assert_eq!(parse("!DOCTYPE html").kind(), TagKind::Doctype);
    assert_eq!(parse("custom-element").kind(), TagKind::Unknown);
}

#[test]
fn test_display() {
    assert_eq!(parse("p").to_string(), "<p>");
    assert_eq!(parse("/p").to_string(), "</p>");
    assert_eq!(parse("img src=x/").to_string(), "<img src=\"x\" />");
    assert_eq!(parse("input checked").to_string(), "<input checked=\"checked\">");
    assert_eq!(parse("option value=''").to_string(), "<option value=\"\">");
    assert_eq!(parse("a title='say \"hi\"'").to_string(), "<a title='say \"hi\"'>");
}

#[test]
fn test_display_parses_back_to_the_same_tag() {
    for interior in [
        "p",
        "/div",
        "img src=x alt='a b' /",
        "input type=checkbox checked",
        "a href=\"/x?y=1\" target=_blank",
        "a href=\"\" title='say \"hi\"'",
        "option value='' selected",
    ] {
        let tag = parse(interior);
        let rendered = tag.to_string();
        let inner = &rendered[1..rendered.len() - 1];
        assert_eq!(parse(inner), tag, "{rendered}");
    }
}

#[test]
fn test_tokenizer_parse_tag_uses_its_unescape_flag() {
    let mut tokenizer = HTMLStreamTokenizer::with_options(
        StrSource::new("<a title=\"&lt;\">"),
        TokenizerOptions::unescaped(),
    );
    assert_eq!(tokenizer.next_token().unwrap(), TokenKind::Tag);
    let mut tag = HtmlTag::new();
    tokenizer.parse_tag(&mut tag).unwrap();
    assert_eq!(tag.attribute("title"), Some("<"));
}

#[test]
fn test_empty_angle_brackets_fail_to_parse() {
    let mut tokenizer = HTMLStreamTokenizer::from_text("<>");
    assert_eq!(tokenizer.next_token().unwrap(), TokenKind::Tag);
    assert_eq!(tokenizer.text(), "");
    let mut tag = HtmlTag::new();
    assert_eq!(tokenizer.parse_tag(&mut tag), Err(TagParseError::Empty));
}
