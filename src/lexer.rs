use crate::token::{Token, TokenKind};

/// Tokenize a regular expression source string for display.
///
/// The scan never fails: every input, including malformed patterns
/// such as an unterminated `[`, produces a token sequence whose texts
/// concatenate back to the input.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    Lexer::new(pattern).tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// Start of the pending literal run, if one is open.
    literal_start: Option<usize>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            literal_start: None,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek() {
            match ch {
                '\\' => self.read_escape(),
                '[' => self.read_class(),
                '{' => self.read_counted_quantifier(),
                '*' | '+' | '?' => self.read_single(TokenKind::Quantifier),
                '(' => self.read_single(TokenKind::GroupOpen),
                ')' => self.read_single(TokenKind::GroupClose),
                '|' => self.read_single(TokenKind::Alternation),
                _ => {
                    self.literal_start.get_or_insert(self.pos);
                    self.advance();
                }
            }
        }

        self.flush_literal();
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            text: self.input[start..self.pos].to_string(),
            offset: start,
        });
    }

    fn flush_literal(&mut self) {
        if let Some(start) = self.literal_start.take() {
            self.push(TokenKind::Literal, start);
        }
    }

    fn read_single(&mut self, kind: TokenKind) {
        self.flush_literal();
        let start = self.pos;
        self.advance();
        self.push(kind, start);
    }

    fn read_escape(&mut self) {
        if self.peek_second().is_none() {
            // trailing backslash stays part of the literal run
            self.literal_start.get_or_insert(self.pos);
            self.advance();
            return;
        }

        self.flush_literal();
        let start = self.pos;
        self.advance(); // skip backslash
        self.advance(); // escaped character
        self.push(TokenKind::Escape, start);
    }

    fn read_class(&mut self) {
        self.flush_literal();
        let start = self.pos;
        self.advance(); // skip [

        let negated = self.peek() == Some('^');
        let mut closed = false;

        while let Some(ch) = self.peek() {
            match ch {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                ']' => {
                    self.advance();
                    closed = true;
                    break;
                }
                _ => self.advance(),
            }
        }

        self.push(TokenKind::CharacterClass { negated, closed }, start);
    }

    fn read_counted_quantifier(&mut self) {
        self.flush_literal();
        let start = self.pos;
        self.advance(); // skip {

        let mut closed = false;
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '}' {
                closed = true;
                break;
            }
        }

        self.push(TokenKind::CountedQuantifier { closed }, start);
    }
}
