use super::Quantifier;
use std::{fmt, mem};

/// What a [`AstNode::Literal`] accepts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    Char(char),
    Any, // .
}

impl Symbol {
    #[inline]
    #[must_use]
    pub fn matches(self, c: char) -> bool {
        match self {
            Symbol::Char(expected) => expected == c,
            Symbol::Any => true,
        }
    }
}

/// Zero-width assertions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    Start, // ^
    End,   // $
}

/// A pattern tree node. Each node owns its children.
///
/// Concatenation chains grow one level per atom, so `Clone`, `PartialEq`,
/// `Drop` and `Display` walk the tree with explicit stacks.
#[derive(Debug)]
pub enum AstNode {
    Anchor(Anchor),
    Literal(Symbol),
    Concat(Box<AstNode>, Box<AstNode>),
    Alternation(Box<AstNode>, Box<AstNode>),
    Repeat {
        item: Box<AstNode>, // The node being repeated
        quantifier: Quantifier,
    },
}

impl AstNode {
    #[must_use]
    pub fn concat(left: AstNode, right: AstNode) -> Self {
        AstNode::Concat(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn alternation(left: AstNode, right: AstNode) -> Self {
        AstNode::Alternation(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn repeat(item: AstNode, quantifier: Quantifier) -> Self {
        AstNode::Repeat {
            item: Box::new(item),
            quantifier,
        }
    }

    /// The node's own kind, without its children.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::Anchor(anchor) => NodeKind::Anchor(*anchor),
            AstNode::Literal(symbol) => NodeKind::Literal(*symbol),
            AstNode::Concat(..) => NodeKind::Concat,
            AstNode::Alternation(..) => NodeKind::Alternation,
            AstNode::Repeat { quantifier, .. } => NodeKind::Repeat(*quantifier),
        }
    }
}

/// Left behind in a parent when its children are detached.
const DETACHED: AstNode = AstNode::Literal(Symbol::Any);

impl AstNode {
    /// Moves the node's children into `into`.
    fn detach_children(&mut self, into: &mut Vec<AstNode>) {
        match self {
            AstNode::Anchor(_) | AstNode::Literal(_) => {}
            AstNode::Concat(left, right) | AstNode::Alternation(left, right) => {
                into.push(mem::replace(&mut **left, DETACHED));
                into.push(mem::replace(&mut **right, DETACHED));
            }
            AstNode::Repeat { item, .. } => into.push(mem::replace(&mut **item, DETACHED)),
        }
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl Clone for AstNode {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Copy(&'a AstNode),
            Concat,
            Alternation,
            Repeat(Quantifier),
        }

        let mut steps = vec![Step::Copy(self)];
        let mut built: Vec<AstNode> = Vec::new();

        while let Some(step) = steps.pop() {
            let node = match step {
                Step::Copy(AstNode::Anchor(anchor)) => AstNode::Anchor(*anchor),
                Step::Copy(AstNode::Literal(symbol)) => AstNode::Literal(*symbol),
                Step::Copy(AstNode::Concat(left, right)) => {
                    steps.extend([Step::Concat, Step::Copy(right), Step::Copy(left)]);
                    continue;
                }
                Step::Copy(AstNode::Alternation(left, right)) => {
                    steps.extend([Step::Alternation, Step::Copy(right), Step::Copy(left)]);
                    continue;
                }
                Step::Copy(AstNode::Repeat { item, quantifier }) => {
                    steps.extend([Step::Repeat(*quantifier), Step::Copy(item)]);
                    continue;
                }
                Step::Concat | Step::Alternation => {
                    let (Some(right), Some(left)) = (built.pop(), built.pop()) else {
                        unreachable!("both operands are built before their parent");
                    };
                    if matches!(step, Step::Concat) {
                        AstNode::concat(left, right)
                    } else {
                        AstNode::alternation(left, right)
                    }
                }
                Step::Repeat(quantifier) => {
                    let Some(item) = built.pop() else {
                        unreachable!("the item is built before its repeat");
                    };
                    AstNode::repeat(item, quantifier)
                }
            };
            built.push(node);
        }

        built.pop().unwrap_or(DETACHED)
    }
}

impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (AstNode::Anchor(a), AstNode::Anchor(b)) if a == b => {}
                (AstNode::Literal(a), AstNode::Literal(b)) if a == b => {}
                (AstNode::Concat(a_left, a_right), AstNode::Concat(b_left, b_right))
                | (
                    AstNode::Alternation(a_left, a_right),
                    AstNode::Alternation(b_left, b_right),
                ) => {
                    pending.push((&**a_right, &**b_right));
                    pending.push((&**a_left, &**b_left));
                }
                (
                    AstNode::Repeat {
                        item: a,
                        quantifier: qa,
                    },
                    AstNode::Repeat {
                        item: b,
                        quantifier: qb,
                    },
                ) if qa == qb => pending.push((&**a, &**b)),
                _ => return false,
            }
        }

        true
    }
}

impl Eq for AstNode {}

/// A flat description of a node, used to label trace events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Anchor(Anchor),
    Literal(Symbol),
    Concat,
    Alternation,
    Repeat(Quantifier),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Anchor(Anchor::Start) => f.write_str("Anchor('^')"),
            NodeKind::Anchor(Anchor::End) => f.write_str("Anchor('$')"),
            NodeKind::Literal(Symbol::Char(c)) => write!(f, "Char({c:?})"),
            NodeKind::Literal(Symbol::Any) => f.write_str("Any"),
            NodeKind::Concat => f.write_str("Concat"),
            NodeKind::Alternation => f.write_str("Or"),
            NodeKind::Repeat(quantifier) => write!(f, "Repeat {quantifier}"),
        }
    }
}

/// Renders the node back into pattern syntax, adding only the parentheses
/// needed to reproduce the same tree.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Quantifier(quantifier) => write!(f, "{quantifier}")?,
                Piece::Node(node) => match node {
                    AstNode::Anchor(Anchor::Start) => f.write_str("^")?,
                    AstNode::Anchor(Anchor::End) => f.write_str("$")?,
                    AstNode::Literal(Symbol::Char(c)) => write!(f, "{c}")?,
                    AstNode::Literal(Symbol::Any) => f.write_str(".")?,
                    AstNode::Concat(left, right) => {
                        push_grouped(
                            &mut pending,
                            right,
                            matches!(**right, AstNode::Alternation(..) | AstNode::Concat(..)),
                        );
                        push_grouped(
                            &mut pending,
                            left,
                            matches!(**left, AstNode::Alternation(..)),
                        );
                    }
                    AstNode::Alternation(left, right) => {
                        push_grouped(
                            &mut pending,
                            right,
                            matches!(**right, AstNode::Alternation(..)),
                        );
                        pending.push(Piece::Text("|"));
                        pending.push(Piece::Node(left));
                    }
                    AstNode::Repeat { item, quantifier } => {
                        pending.push(Piece::Quantifier(*quantifier));
                        push_grouped(&mut pending, item, !matches!(**item, AstNode::Literal(_)));
                    }
                },
            }
        }

        Ok(())
    }
}

/// Output still to be written by [`AstNode`]'s `Display`, last item first.
enum Piece<'a> {
    Node(&'a AstNode),
    Text(&'static str),
    Quantifier(Quantifier),
}

fn push_grouped<'a>(pending: &mut Vec<Piece<'a>>, node: &'a AstNode, group: bool) {
    if group {
        pending.push(Piece::Text(")"));
        pending.push(Piece::Node(node));
        pending.push(Piece::Text("("));
    } else {
        pending.push(Piece::Node(node));
    }
}
