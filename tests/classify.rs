//! Token descriptions.

use regularish::{Bounds, TokenClass, classify, describe, tokenize};

fn describe_all(pattern: &str) -> Vec<String> {
    tokenize(pattern).iter().map(describe).collect()
}

#[test]
fn every_well_known_token() {
    let cases = [
        (".", "Matches any character except new line"),
        (r"\w", "Matches any word character (letters, numbers, underscore)"),
        (r"\W", "Matches any non-word character"),
        (r"\d", "Matches any digit (0-9)"),
        (r"\D", "Matches any non-digit"),
        (r"\s", "Matches whitespace (space, tab, newline)"),
        (r"\S", "Matches any non-whitespace"),
        (r"\b", "Word boundary anchor"),
        ("^", "Start of input"),
        ("$", "End of input"),
        ("*", "Previous token 0 or more times"),
        ("+", "Previous token 1 or more times"),
        ("?", "Previous token 0 or 1 times"),
    ];

    for (pattern, expected) in cases {
        assert_eq!(describe_all(pattern), vec![expected], "pattern {pattern:?}");
    }
}

#[test]
fn structural_fallbacks() {
    assert_eq!(
        describe_all(r"([^a]|[xyz])\x{4,7}"),
        vec![
            "Start of capture group",
            "Negated character set",
            "Alternation",
            "Character set",
            "End of capture group",
            "Escape sequence",
            "4 to 7",
        ]
    );
}

#[test]
fn literal_runs_are_literal() {
    // `.` inside a longer run is not the wildcard on its own.
    assert_eq!(describe_all("a.b"), vec!["Literal match"]);
}

#[test]
fn unterminated_tokens_read_as_literals() {
    assert_eq!(describe_all("[abc"), vec!["Literal match"]);
    assert_eq!(describe_all("{3"), vec!["Literal match"]);
    assert_eq!(describe_all("\\"), vec!["Literal match"]);
}

#[test]
fn repetition_bounds_are_exposed() {
    let tokens = tokenize("{4}{4,}{4,7}{a,b}");
    let classes: Vec<_> = tokens.iter().map(classify).collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::Repetition(Some(Bounds::Exactly(4))),
            TokenClass::Repetition(Some(Bounds::AtLeast(4))),
            TokenClass::Repetition(Some(Bounds::Between(4, 7))),
            TokenClass::Repetition(None),
        ]
    );
}

#[test]
fn empty_class_is_a_set() {
    assert_eq!(
        classify(&tokenize("[]")[0]),
        TokenClass::CharacterSet { negated: false }
    );
}

#[test]
fn escaped_closing_bracket_reads_as_set() {
    assert_eq!(describe_all(r"[ab\]"), vec!["Character set"]);
    assert_eq!(describe_all(r"[\]"), vec!["Character set"]);
    assert_eq!(describe_all(r"[^\]"), vec!["Negated character set"]);
}
