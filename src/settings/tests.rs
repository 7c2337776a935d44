//! Tests for the settings registry

use super::*;

#[test]
fn test_defaults() {
    let s = RegionSettings::default();
    assert_eq!(s.tab_size, 4);
    assert!(!s.translate_tabs_to_spaces);
    assert!(s.word_separators.contains('('));
    assert!(!s.word_separators.contains('_'));
}

#[test]
fn test_indent_unit() {
    let mut s = RegionSettings::default();
    assert_eq!(s.indent_unit(), "\t");
    s.translate_tabs_to_spaces = true;
    s.tab_size = 2;
    assert_eq!(s.indent_unit(), "  ");
}

#[test]
fn test_indent_width_counts_tabs() {
    let s = RegionSettings::default();
    assert_eq!(s.indent_width("\t  x"), 6);
    assert_eq!(s.indent_width("x"), 0);
    assert_eq!(s.indent_width("   "), 3);
}

#[test]
fn test_match_option() {
    let reg = create_settings_registry();
    assert_eq!(reg.match_option("tab_size"), MatchResult::Exact("tab_size"));
    assert_eq!(reg.match_option("et"), MatchResult::Exact("translate_tabs_to_spaces"));
    assert_eq!(reg.match_option("word"), MatchResult::Prefix("word_separators"));
    assert!(matches!(reg.match_option("t"), MatchResult::Ambiguous { .. }));
    assert_eq!(reg.match_option("nope"), MatchResult::Unknown("nope".to_string()));
}

#[test]
fn test_apply_typed_values() {
    let reg = create_settings_registry();
    let mut s = RegionSettings::default();
    reg.apply(&mut s, "ts", "8").unwrap();
    reg.apply(&mut s, "expandtab", "on").unwrap();
    reg.apply(&mut s, "wordsep", "()").unwrap();
    assert_eq!(s.tab_size, 8);
    assert!(s.translate_tabs_to_spaces);
    assert_eq!(s.word_separators, "()");
}

#[test]
fn test_apply_rejects_bad_values() {
    let reg = create_settings_registry();
    let mut s = RegionSettings::default();
    assert!(matches!(
        reg.apply(&mut s, "tab_size", "0"),
        Err(SettingError::ValidationError(_))
    ));
    assert!(matches!(
        reg.apply(&mut s, "tab_size", "four"),
        Err(SettingError::ParseError(_))
    ));
    assert!(matches!(
        reg.apply(&mut s, "et", "maybe"),
        Err(SettingError::ParseError(_))
    ));
    assert!(matches!(
        reg.apply(&mut s, "wordsep", "a b"),
        Err(SettingError::ValidationError(_))
    ));
    assert_eq!(s, RegionSettings::default());
}

#[test]
fn test_apply_pairs() {
    let reg = create_settings_registry();
    let mut s = RegionSettings::default();
    reg.apply_pairs(&mut s, &["tab_size=2", "et=true"]).unwrap();
    assert_eq!(s.tab_size, 2);
    assert!(s.translate_tabs_to_spaces);

    let err = reg.apply_pairs(&mut s, &["tab_size"]).unwrap_err();
    assert_eq!(err.code, "SETTING_SYNTAX");

    let err = reg.apply_pairs(&mut s, &["bogus=1"]).unwrap_err();
    assert_eq!(err.code, "UNKNOWN_SETTING");
}
