use crate::ast::Quantifier;

/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Any character without a special meaning.
    Literal(char),
    /// `.`
    Dot,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Question,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `^`
    Caret,
    /// `$`
    Dollar,
}

impl Token {
    /// Classifies a single pattern character.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            '.' => Token::Dot,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Question,
            '|' => Token::Pipe,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '^' => Token::Caret,
            '$' => Token::Dollar,
            c => Token::Literal(c),
        }
    }

    /// Returns the character the token was read from.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Dot => '.',
            Token::Star => '*',
            Token::Plus => '+',
            Token::Question => '?',
            Token::Pipe => '|',
            Token::LParen => '(',
            Token::RParen => ')',
            Token::Caret => '^',
            Token::Dollar => '$',
        }
    }

    /// The quantifier this token denotes, if any.
    #[must_use]
    pub const fn quantifier(self) -> Option<Quantifier> {
        match self {
            Token::Star => Some(Quantifier::ZeroOrMore),
            Token::Plus => Some(Quantifier::OneOrMore),
            Token::Question => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The character index of the token in the pattern string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl PartialEq<Token> for PosToken {
    #[inline]
    fn eq(&self, other: &Token) -> bool {
        self.token == *other
    }
}
