use super::{
    Error, MAX_GROUP_DEPTH, Result,
    ast::{Anchor, AstNode, AstRoot, Symbol},
    lexer::{PosToken, Token, tokenize},
};

/// Parses a pattern string into an AST.
///
/// # Errors
///
/// If the pattern string cannot be parsed, an [`Error`] is returned.
pub fn parse_pattern(pattern: &str) -> Result<AstRoot> {
    Parser::new(pattern).parse()
}

/// Converts a pattern string into an AST.
///
/// The grammar, tightest binding first:
///
/// ```text
/// atom     := LITERAL | '.' | '(' expr ')'   [ quantifier ]
/// concat   := atom+
/// expr     := concat ( '|' concat )*
/// toplevel := '^'? expr '$'?  |  '^$'  |  ''
/// ```
pub struct Parser {
    tokens: Vec<PosToken>,
    cursor: usize,
    /// Tokens at or past `end` are invisible to the expression grammar. The
    /// trailing `$` anchor lives there.
    end: usize,
    len: usize,
    depth: usize,
}

impl Parser {
    /// Creates a new parser for the given `pattern`.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let tokens = tokenize(pattern);
        let end = tokens.len();
        Parser {
            tokens,
            cursor: 0,
            end,
            len: pattern.chars().count(),
            depth: 0,
        }
    }

    /// Converts the pattern into an [`AstRoot`], consuming the parser.
    ///
    /// # Errors
    ///
    /// If the pattern string is invalid, an [`Error`] is returned.
    pub fn parse(mut self) -> Result<AstRoot> {
        if self.tokens.is_empty() {
            return Ok(AstRoot::new(None));
        }

        let start = self.next_if(Token::Caret).is_some();
        let end = self.tokens.len() > self.cursor
            && self.tokens.last().is_some_and(|t| t.token == Token::Dollar);
        if end {
            self.end -= 1;
        }

        let expr = if self.peek().is_none() {
            if !(start && end) {
                return Err(Error::UnexpectedEndOfPattern { pos: self.tell() });
            }
            None
        } else {
            Some(self.parse_expr()?)
        };

        match self.peek() {
            Some(PosToken {
                pos,
                token: Token::RParen,
            }) => return Err(Error::UnmatchedParen { pos, lit: ')' }),
            Some(PosToken { pos, token }) => {
                return Err(Error::TrailingTokens {
                    pos,
                    lit: token.to_char(),
                });
            }
            None => {}
        }

        let root = [
            start.then_some(AstNode::Anchor(Anchor::Start)),
            expr,
            end.then_some(AstNode::Anchor(Anchor::End)),
        ]
        .into_iter()
        .flatten()
        .reduce(AstNode::concat);

        Ok(AstRoot::new(root))
    }

    fn peek(&self) -> Option<PosToken> {
        self.tokens[..self.end].get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<PosToken> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn next_if(&mut self, expected: Token) -> Option<PosToken> {
        if self.peek().is_some_and(|t| t.token == expected) {
            self.advance()
        } else {
            None
        }
    }

    /// The position of the next token, including a hidden trailing `$`.
    fn tell(&self) -> usize {
        self.tokens.get(self.cursor).map_or(self.len, |t| t.pos)
    }

    fn parse_expr(&mut self) -> Result<AstNode> {
        let mut node = self.parse_concat()?;

        while let Some(PosToken { pos, .. }) = self.next_if(Token::Pipe) {
            if matches!(self.peek().map(|t| t.token), None | Some(Token::RParen)) {
                return Err(Error::DanglingAlternation { pos });
            }
            node = AstNode::alternation(node, self.parse_concat()?);
        }

        Ok(node)
    }

    fn parse_concat(&mut self) -> Result<AstNode> {
        if let Some(PosToken { pos, token }) = self.peek()
            && (token.quantifier().is_some() || token == Token::Pipe)
        {
            return Err(Error::LeadingQuantifier {
                pos,
                lit: token.to_char(),
            });
        }

        let mut node = self.parse_atom()?;

        while let Some(PosToken { token, .. }) = self.peek()
            && !matches!(token, Token::Pipe | Token::RParen)
        {
            node = AstNode::concat(node, self.parse_atom()?);
        }

        Ok(node)
    }

    fn parse_atom(&mut self) -> Result<AstNode> {
        let Some(PosToken { pos, token }) = self.advance() else {
            return Err(Error::UnexpectedEndOfPattern { pos: self.tell() });
        };

        let mut node = match token {
            Token::Literal(c) => AstNode::Literal(Symbol::Char(c)),
            Token::Dot => AstNode::Literal(Symbol::Any),
            Token::LParen => self.parse_group(pos)?,
            Token::RParen => return Err(Error::UnmatchedParen { pos, lit: ')' }),
            Token::Star
            | Token::Plus
            | Token::Question
            | Token::Pipe
            | Token::Caret
            | Token::Dollar => {
                return Err(Error::UnexpectedToken {
                    pos,
                    lit: token.to_char(),
                });
            }
        };

        if let Some(quantifier) = self.peek().and_then(|t| t.token.quantifier()) {
            self.advance();
            node = AstNode::repeat(node, quantifier);

            if let Some(PosToken { pos, token }) = self.peek()
                && token.quantifier().is_some()
            {
                return Err(Error::DoubleQuantifier {
                    pos,
                    lit: token.to_char(),
                });
            }
        }

        Ok(node)
    }

    /// Parses the body of a group whose `(` is at `open`.
    fn parse_group(&mut self, open: usize) -> Result<AstNode> {
        match self.peek() {
            None => return Err(Error::UnmatchedParen { pos: open, lit: '(' }),
            Some(PosToken {
                token: Token::RParen,
                ..
            }) => return Err(Error::EmptyGroup { pos: open }),
            Some(_) => {}
        }

        if self.depth == MAX_GROUP_DEPTH {
            return Err(Error::NestingTooDeep {
                pos: open,
                limit: MAX_GROUP_DEPTH,
            });
        }

        self.depth += 1;
        let inner = self.parse_expr()?;
        self.depth -= 1;

        if self.next_if(Token::RParen).is_none() {
            return Err(Error::UnmatchedParen { pos: open, lit: '(' });
        }

        Ok(inner)
    }
}
