//! A small regular expression matcher.
//!
//! Patterns support literals, `.`, the `*`, `+` and `?` quantifiers,
//! alternation with `|`, grouping with parentheses, and the `^`/`$` anchors.
//! A pattern is tokenized, parsed into an immutable AST, and then matched by
//! tracking the set of suffixes of the text each node can reach.
//!
//! ```
//! assert!(matchbox::fullmatch("a(b|c)+d", "abccbd").unwrap());
//! assert!(matchbox::search("a*b", "xxaaabyy").unwrap());
//! ```

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod ast;
pub mod engine;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod trace;

pub use self::{
    ast::{Anchor, AstNode, AstRoot, Quantifier, Symbol},
    engine::{Matcher, SuffixSet},
    eval::{Mode, Regex, fullmatch, search},
    lexer::{Lexer, PosToken, Token, tokenize},
    parser::{Parser, parse_pattern},
    trace::{NoTrace, Trace, WriteTrace},
};

/// A pattern syntax error. Positions are character indices into the pattern.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A group has nothing between its parentheses.
    #[error("empty group at {pos}")]
    EmptyGroup { pos: usize },

    /// The pattern, a group, or an alternative starts with a quantifier or `|`.
    #[error("nothing to repeat before '{lit}' at {pos}")]
    LeadingQuantifier { pos: usize, lit: char },

    /// A `|` with nothing after it.
    #[error("missing alternative after '|' at {pos}")]
    DanglingAlternation { pos: usize },

    /// A `(` without a `)`, or a `)` without a `(`.
    #[error("unmatched '{lit}' at {pos}")]
    UnmatchedParen { pos: usize, lit: char },

    /// A quantifier applied to an already quantified atom.
    #[error("multiple repeat '{lit}' at {pos}")]
    DoubleQuantifier { pos: usize, lit: char },

    /// An anchor or operator where an atom was expected.
    #[error("unexpected '{lit}' at {pos}")]
    UnexpectedToken { pos: usize, lit: char },

    /// Input left over once the grammar was satisfied.
    ///
    /// The grammar stops early only at a `)`, which is reported as
    /// [`Error::UnmatchedParen`], so this is a catch-all that valid token
    /// streams never produce.
    #[error("unexpected trailing '{lit}' at {pos}")]
    TrailingTokens { pos: usize, lit: char },

    #[error("unexpected end of pattern at {pos}")]
    UnexpectedEndOfPattern { pos: usize },

    /// Groups nested deeper than `limit`.
    #[error("groups nested deeper than {limit} at {pos}")]
    NestingTooDeep { pos: usize, limit: usize },
}

impl Error {
    /// The character position the error was detected at.
    #[must_use]
    pub fn pos(&self) -> usize {
        match *self {
            Error::EmptyGroup { pos }
            | Error::LeadingQuantifier { pos, .. }
            | Error::DanglingAlternation { pos }
            | Error::UnmatchedParen { pos, .. }
            | Error::DoubleQuantifier { pos, .. }
            | Error::UnexpectedToken { pos, .. }
            | Error::TrailingTokens { pos, .. }
            | Error::UnexpectedEndOfPattern { pos }
            | Error::NestingTooDeep { pos, .. } => pos,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The deepest parenthesis nesting a pattern may use.
pub const MAX_GROUP_DEPTH: usize = 256;
