/// Token kinds produced by the pattern lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of ordinary characters (`abc`, `^foo$`).
    Literal,
    /// Backslash plus the character it escapes (`\d`, `\.`).
    Escape,
    /// Bracketed class (`[a-z]`, `[^xy]`).
    CharacterClass {
        /// Class starts with `[^`.
        negated: bool,
        /// The closing `]` was found before end of input.
        closed: bool,
    },
    /// Counted repetition (`{4}`, `{2,5}`).
    CountedQuantifier {
        /// The closing `}` was found before end of input.
        closed: bool,
    },
    /// One of `*`, `+`, `?`.
    Quantifier,
    /// Opening paren `(`.
    GroupOpen,
    /// Closing paren `)`.
    GroupClose,
    /// Alternation bar `|`.
    Alternation,
}

/// A single token with its kind, raw text, and byte offset in the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    /// Byte offset one past the last character of this token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}
