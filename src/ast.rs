pub mod node;
pub mod quantifier;

use std::fmt;

pub use self::{
    node::{Anchor, AstNode, NodeKind, Symbol},
    quantifier::Quantifier,
};

/// A parsed pattern.
///
/// The empty pattern has no root node and matches without consuming
/// anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AstRoot {
    root: Option<AstNode>,
}

impl AstRoot {
    #[must_use]
    pub(crate) fn new(root: Option<AstNode>) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn node(&self) -> Option<&AstNode> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl PartialEq<AstNode> for AstRoot {
    fn eq(&self, other: &AstNode) -> bool {
        self.root.as_ref() == Some(other)
    }
}

impl fmt::Display for AstRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(node) => write!(f, "{node}"),
            None => Ok(()),
        }
    }
}
