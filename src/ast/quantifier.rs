use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore, // *
    OneOrMore,  // +
    ZeroOrOne,  // ?
}

impl Quantifier {
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
            Quantifier::ZeroOrOne => '?',
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
