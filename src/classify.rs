//! Short human-readable descriptions for pattern tokens.
//!
//! Well-known metacharacters are looked up exactly; anything else falls
//! back to a description derived from the token's kind.

use std::fmt;

use crate::token::{Token, TokenKind};

/// What a token means inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// `.`
    Wildcard,
    /// `\w`
    WordChar,
    /// `\W`
    NonWordChar,
    /// `\d`
    Digit,
    /// `\D`
    NonDigit,
    /// `\s`
    Whitespace,
    /// `\S`
    NonWhitespace,
    /// `\b`
    WordBoundary,
    /// `^`
    StartAnchor,
    /// `$`
    EndAnchor,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    Optional,
    /// Bracketed class, possibly negated.
    CharacterSet { negated: bool },
    /// Counted repetition; `None` when the braces hold no valid bounds.
    Repetition(Option<Bounds>),
    GroupStart,
    GroupEnd,
    Alternation,
    /// Any other backslash escape.
    Escape,
    Literal,
}

/// Bounds of a counted repetition: `{min}`, `{min,}` or `{min,max}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    Exactly(u32),
    AtLeast(u32),
    Between(u32, u32),
}

const WELL_KNOWN: &[(&str, TokenClass)] = &[
    (".", TokenClass::Wildcard),
    ("\\w", TokenClass::WordChar),
    ("\\W", TokenClass::NonWordChar),
    ("\\d", TokenClass::Digit),
    ("\\D", TokenClass::NonDigit),
    ("\\s", TokenClass::Whitespace),
    ("\\S", TokenClass::NonWhitespace),
    ("\\b", TokenClass::WordBoundary),
    ("^", TokenClass::StartAnchor),
    ("$", TokenClass::EndAnchor),
    ("*", TokenClass::ZeroOrMore),
    ("+", TokenClass::OneOrMore),
    ("?", TokenClass::Optional),
];

/// Classify a token produced by [`tokenize`](crate::tokenize).
#[must_use]
pub fn classify(token: &Token) -> TokenClass {
    if let Some((_, class)) = WELL_KNOWN.iter().find(|(text, _)| *text == token.text) {
        return *class;
    }

    match token.kind {
        TokenKind::CharacterClass {
            negated,
            closed: true,
        } => TokenClass::CharacterSet { negated },
        // `[ab\]` never closes but still has the bracketed shape.
        TokenKind::CharacterClass {
            negated,
            closed: false,
        } if token.text.ends_with(']') => TokenClass::CharacterSet { negated },
        TokenKind::CountedQuantifier { closed: true } => {
            TokenClass::Repetition(parse_bounds(&token.text))
        }
        TokenKind::GroupOpen => TokenClass::GroupStart,
        TokenKind::GroupClose => TokenClass::GroupEnd,
        TokenKind::Alternation => TokenClass::Alternation,
        TokenKind::Escape => TokenClass::Escape,
        // Other unterminated classes and quantifiers read as plain text.
        TokenKind::Literal
        | TokenKind::Quantifier
        | TokenKind::CharacterClass { closed: false, .. }
        | TokenKind::CountedQuantifier { closed: false } => TokenClass::Literal,
    }
}

/// Describe a token in a few words.
#[must_use]
pub fn describe(token: &Token) -> String {
    classify(token).to_string()
}

fn parse_bounds(text: &str) -> Option<Bounds> {
    let body = text.strip_prefix('{')?.strip_suffix('}')?;
    match body.split_once(',') {
        None => body.parse().ok().map(Bounds::Exactly),
        Some((min, "")) => min.parse().ok().map(Bounds::AtLeast),
        Some((min, max)) => {
            let min = min.parse().ok()?;
            let max = max.parse().ok()?;
            Some(Bounds::Between(min, max))
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "Exactly {n}"),
            Self::AtLeast(n) => write!(f, "{n} or more"),
            Self::Between(min, max) => write!(f, "{min} to {max}"),
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Wildcard => "Matches any character except new line",
            Self::WordChar => "Matches any word character (letters, numbers, underscore)",
            Self::NonWordChar => "Matches any non-word character",
            Self::Digit => "Matches any digit (0-9)",
            Self::NonDigit => "Matches any non-digit",
            Self::Whitespace => "Matches whitespace (space, tab, newline)",
            Self::NonWhitespace => "Matches any non-whitespace",
            Self::WordBoundary => "Word boundary anchor",
            Self::StartAnchor => "Start of input",
            Self::EndAnchor => "End of input",
            Self::ZeroOrMore => "Previous token 0 or more times",
            Self::OneOrMore => "Previous token 1 or more times",
            Self::Optional => "Previous token 0 or 1 times",
            Self::CharacterSet { negated: true } => "Negated character set",
            Self::CharacterSet { negated: false } => "Character set",
            Self::Repetition(Some(bounds)) => return write!(f, "{bounds}"),
            Self::Repetition(None) => "Exact repetition",
            Self::GroupStart => "Start of capture group",
            Self::GroupEnd => "End of capture group",
            Self::Alternation => "Alternation",
            Self::Escape => "Escape sequence",
            Self::Literal => "Literal match",
        };
        f.write_str(text)
    }
}
