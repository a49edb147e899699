//! Integration tests for named character reference lookup.

use loris_html::escape::lookup_entity;
use loris_html::escape::named_character_references::entity_count;

#[test]
fn test_lookup_markup_entities() {
    assert_eq!(lookup_entity("amp"), Some('&'));
    assert_eq!(lookup_entity("lt"), Some('<'));
    assert_eq!(lookup_entity("gt"), Some('>'));
    assert_eq!(lookup_entity("quot"), Some('"'));
    assert_eq!(lookup_entity("nbsp"), Some('\u{00A0}'));
}

#[test]
fn test_lookup_latin1_entities() {
    assert_eq!(lookup_entity("copy"), Some('\u{00A9}'));
    assert_eq!(lookup_entity("reg"), Some('\u{00AE}'));
    assert_eq!(lookup_entity("Agrave"), Some('\u{00C0}'));
    assert_eq!(lookup_entity("agrave"), Some('\u{00E0}'));
    assert_eq!(lookup_entity("THORN"), Some('\u{00DE}'));
    assert_eq!(lookup_entity("szlig"), Some('\u{00DF}'));
    assert_eq!(lookup_entity("yuml"), Some('\u{00FF}'));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("AMP"), None);
    assert_eq!(lookup_entity("Copy"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity"), None);
    assert_eq!(lookup_entity("amp;"), None);
    assert_eq!(lookup_entity(""), None);
    // HTML 4 additions are outside the table.
    assert_eq!(lookup_entity("euro"), None);
    assert_eq!(lookup_entity("apos"), None);
}

#[test]
fn test_table_size() {
    assert_eq!(entity_count(), 86);
}
