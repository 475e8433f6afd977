use loanwise::domain::resolve_language_code;

#[test]
fn given_no_hint_when_resolving_then_defaults_to_english() {
    assert_eq!(resolve_language_code(None), "en");
}

#[test]
fn given_iso_code_when_resolving_then_returns_same_code() {
    assert_eq!(resolve_language_code(Some("hi")), "hi");
    assert_eq!(resolve_language_code(Some("ta")), "ta");
}

#[test]
fn given_language_name_when_resolving_then_returns_iso_code() {
    assert_eq!(resolve_language_code(Some("Hindi")), "hi");
    assert_eq!(resolve_language_code(Some("english")), "en");
    assert_eq!(resolve_language_code(Some("FRENCH")), "fr");
}

#[test]
fn given_unmapped_hint_when_resolving_then_defaults_to_english() {
    assert_eq!(resolve_language_code(Some("klingon")), "en");
    assert_eq!(resolve_language_code(Some("")), "en");
}

#[test]
fn given_padded_hint_when_resolving_then_whitespace_is_ignored() {
    assert_eq!(resolve_language_code(Some("  tamil ")), "ta");
}
