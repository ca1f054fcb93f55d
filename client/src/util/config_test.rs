use super::*;

#[test]
fn parse_flag_true_variants() {
    for val in ["1", "true", "YES", " on "] {
        assert!(parse_flag(Some(val), false), "expected true for {val:?}");
    }
}

#[test]
fn parse_flag_false_variants() {
    for val in ["0", "false", "No", "off"] {
        assert!(!parse_flag(Some(val), true), "expected false for {val:?}");
    }
}

#[test]
fn parse_flag_falls_back_to_default() {
    assert!(parse_flag(None, true));
    assert!(!parse_flag(Some("maybe"), false));
    assert!(parse_flag(Some(""), true));
}
