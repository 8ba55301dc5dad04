pub mod token;

use std::str::Chars;

pub use token::{PosToken, Token};

/// Splits a pattern string into tokens.
///
/// Every character is classified on its own; there is no escaping and no
/// multi-character operator, so lexing cannot fail.
pub struct Lexer<'a> {
    input: Chars<'a>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars(),
            pos: 0,
        }
    }

    /// The character index of the next token.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Option<PosToken> {
        let c = self.input.next()?;
        let token = PosToken {
            pos: self.pos,
            token: Token::from_char(c),
        };
        self.pos += 1;
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = PosToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.input.size_hint()
    }
}

/// Tokenizes the whole of `pattern`, in input order.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<PosToken> {
    Lexer::new(pattern).collect()
}
