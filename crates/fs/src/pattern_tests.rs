use super::*;

#[test]
fn wildcards_match_names() {
    let cases: &[(&str, &str, bool)] = &[
        ("*", "anything.txt", true),
        ("*", ".hidden", true),
        ("*.txt", "notes.txt", true),
        ("*.txt", "notes.md", false),
        ("*a*", "data", true),
        ("*a*", "lib", false),
        ("?.rs", "a.rs", true),
        ("?.rs", "ab.rs", false),
        ("report-??.csv", "report-07.csv", true),
        ("Dir1", "Dir1", true),
        ("Dir1", "Dir10", false),
        ("XXX", "bin", false),
    ];

    for (pattern, name, expected) in cases {
        let p = NamePattern::new(pattern).expect("valid pattern");
        assert_eq!(
            p.is_match(name),
            *expected,
            "pattern {pattern:?} against {name:?}"
        );
    }
}

#[test]
fn star_dot_star_matches_names_without_a_dot() {
    let p = NamePattern::new("*.*").expect("valid pattern");
    assert!(p.is_match("README"));
    assert!(p.is_match("notes.txt"));
    assert!(p.is_match(".hidden"));
    assert_eq!(p.as_str(), "*.*");

    let dotted = NamePattern::new("a*.*").expect("valid pattern");
    assert!(!dotted.is_match("abc"));
}

#[test]
fn brackets_and_braces_are_literal() {
    let p = NamePattern::new("[draft]{v2}.txt").expect("valid pattern");
    assert!(p.is_match("[draft]{v2}.txt"));
    assert!(!p.is_match("d.txt"));
    assert!(!p.is_match("v2.txt"));
}

#[cfg(unix)]
#[test]
fn backslash_is_literal_on_unix() {
    let p = NamePattern::new(r"a\*").expect("valid pattern");
    assert!(p.is_match(r"a\b"));
    assert!(!p.is_match("a*"));
}

#[test]
fn separators_are_rejected() {
    let err = NamePattern::new("sub/*.txt").expect_err("separator");
    assert!(matches!(err, FsError::InvalidPattern { .. }));
}

#[test]
fn case_sensitivity_follows_platform() {
    let p = NamePattern::new("*.TXT").expect("valid pattern");
    assert_eq!(p.is_match("notes.txt"), CASE_INSENSITIVE);
    assert!(p.is_match("NOTES.TXT"));
}

#[test]
fn as_str_returns_the_pattern_as_given() {
    let p = NamePattern::new("[x]*").expect("valid pattern");
    assert_eq!(p.as_str(), "[x]*");
}
