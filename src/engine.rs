//! The suffix-set matcher.
//!
//! Evaluating a node against a state yields every suffix of the text the
//! node can leave behind, in the order they were found. An empty set means
//! the node does not match. Nondeterminism is handled by carrying the whole
//! set forward instead of backtracking.
//!
//! The tree is walked with an explicit task stack rather than native
//! recursion, and results are memoized per `(node, offset)` for the lifetime
//! of a [`Matcher`].

mod state;
mod suffix_set;


pub use self::{state::MatchState, suffix_set::SuffixSet};

use super::{
    ast::{Anchor, AstNode, AstRoot, Quantifier},
    trace::{NoTrace, Outcome, Trace, TraceEvent},
};
use std::{
    collections::{HashMap, VecDeque},
    ptr,
    rc::Rc,
};

/// Matches one parsed pattern against one text, from any number of start
/// offsets.
pub struct Matcher<'p, 't, T = NoTrace> {
    root: &'p AstRoot,
    text: &'t str,
    memo: HashMap<(*const AstNode, usize), Rc<SuffixSet>>,
    trace: T,
}

/// A unit of pending work. Every `Visit` eventually pushes exactly one
/// result onto the value stack; the other tasks consume the results of the
/// visits they scheduled.
enum Task<'p, 't> {
    Visit {
        node: &'p AstNode,
        state: MatchState<'t>,
    },
    ConcatLeft {
        node: &'p AstNode,
        right: &'p AstNode,
        state: MatchState<'t>,
    },
    ConcatRight {
        node: &'p AstNode,
        right: &'p AstNode,
        state: MatchState<'t>,
        pending: std::vec::IntoIter<usize>,
        acc: SuffixSet,
    },
    Alternation {
        node: &'p AstNode,
        state: MatchState<'t>,
    },
    Repeat {
        node: &'p AstNode,
        item: &'p AstNode,
        quantifier: Quantifier,
        state: MatchState<'t>,
        frontier: VecDeque<usize>,
        /// Seeded with the zero-repetition offset, so that offset is always
        /// first.
        acc: SuffixSet,
    },
}

impl<'p, 't> Matcher<'p, 't> {
    #[must_use]
    pub fn new(root: &'p AstRoot, text: &'t str) -> Self {
        Self::with_trace(root, text, NoTrace)
    }
}

impl<'p, 't, T: Trace> Matcher<'p, 't, T> {
    pub fn with_trace(root: &'p AstRoot, text: &'t str, trace: T) -> Self {
        Self {
            root,
            text,
            memo: HashMap::new(),
            trace,
        }
    }

    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Matches the pattern against the suffix starting at byte offset
    /// `start`, returning the offsets of every suffix it can leave behind,
    /// or `None` if it does not match.
    ///
    /// `^` only holds at offset 0 of the full text, whatever `start` is.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of the text or not on a character
    /// boundary.
    pub fn run(&mut self, start: usize) -> Option<Rc<SuffixSet>> {
        assert!(
            self.text.is_char_boundary(start),
            "start offset {start} is not a character boundary"
        );

        let result = match self.root.node() {
            None => Rc::new(SuffixSet::singleton(start)),
            Some(node) => self.evaluate(node, MatchState::new(self.text, start)),
        };

        (!result.is_empty()).then_some(result)
    }

    fn evaluate(&mut self, root: &'p AstNode, state: MatchState<'t>) -> Rc<SuffixSet> {
        let mut tasks = vec![Task::Visit { node: root, state }];
        let mut values: Vec<Rc<SuffixSet>> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit { node, state } => self.visit(node, state, &mut tasks, &mut values),

                Task::ConcatLeft { node, right, state } => {
                    let left = values.pop().unwrap_or_default();
                    let mut pending = left.as_slice().to_vec().into_iter();
                    if let Some(next) = pending.next() {
                        tasks.push(Task::ConcatRight {
                            node,
                            right,
                            state,
                            pending,
                            acc: SuffixSet::new(),
                        });
                        tasks.push(Task::Visit {
                            node: right,
                            state: state.descend_to(next),
                        });
                    } else {
                        self.finish(node, state, SuffixSet::new(), &mut values);
                    }
                }

                Task::ConcatRight {
                    node,
                    right,
                    state,
                    mut pending,
                    mut acc,
                } => {
                    acc.extend(&values.pop().unwrap_or_default());
                    if let Some(next) = pending.next() {
                        tasks.push(Task::ConcatRight {
                            node,
                            right,
                            state,
                            pending,
                            acc,
                        });
                        tasks.push(Task::Visit {
                            node: right,
                            state: state.descend_to(next),
                        });
                    } else {
                        self.finish(node, state, acc, &mut values);
                    }
                }

                Task::Alternation { node, state } => {
                    let right = values.pop().unwrap_or_default();
                    let left = values.pop().unwrap_or_default();
                    let mut acc = SuffixSet::clone(&left);
                    acc.extend(&right);
                    self.finish(node, state, acc, &mut values);
                }

                Task::Repeat {
                    node,
                    item,
                    quantifier,
                    state,
                    mut frontier,
                    mut acc,
                } => {
                    for pos in values.pop().unwrap_or_default().iter() {
                        if acc.insert(pos) {
                            frontier.push_back(pos);
                        }
                    }

                    // `?` stops after the first application of the item.
                    let next = match quantifier {
                        Quantifier::ZeroOrOne => None,
                        Quantifier::ZeroOrMore | Quantifier::OneOrMore => frontier.pop_front(),
                    };

                    if let Some(next) = next {
                        tasks.push(Task::Repeat {
                            node,
                            item,
                            quantifier,
                            state,
                            frontier,
                            acc,
                        });
                        tasks.push(Task::Visit {
                            node: item,
                            state: state.descend_to(next),
                        });
                    } else {
                        let result = match quantifier {
                            Quantifier::ZeroOrMore | Quantifier::ZeroOrOne => acc,
                            Quantifier::OneOrMore => acc.without_first(),
                        };
                        self.finish(node, state, result, &mut values);
                    }
                }
            }
        }

        values.pop().unwrap_or_default()
    }

    fn visit(
        &mut self,
        node: &'p AstNode,
        state: MatchState<'t>,
        tasks: &mut Vec<Task<'p, 't>>,
        values: &mut Vec<Rc<SuffixSet>>,
    ) {
        if let Some(known) = self.memo.get(&(ptr::from_ref(node), state.pos)) {
            self.trace.record(&TraceEvent {
                node: node.kind(),
                text: self.text,
                pos: state.pos,
                depth: state.depth,
                outcome: Outcome::Cached(known),
            });
            values.push(Rc::clone(known));
            return;
        }

        self.trace.record(&TraceEvent {
            node: node.kind(),
            text: self.text,
            pos: state.pos,
            depth: state.depth,
            outcome: Outcome::Enter,
        });

        match node {
            AstNode::Literal(symbol) => {
                let result = state
                    .advance_if(|c| symbol.matches(c))
                    .map_or_else(SuffixSet::new, |next| SuffixSet::singleton(next.pos));
                self.finish(node, state, result, values);
            }
            AstNode::Anchor(anchor) => {
                let holds = match anchor {
                    Anchor::Start => state.at_start(),
                    Anchor::End => state.at_end(),
                };
                let result = if holds {
                    SuffixSet::singleton(state.pos)
                } else {
                    SuffixSet::new()
                };
                self.finish(node, state, result, values);
            }
            AstNode::Concat(left, right) => {
                tasks.push(Task::ConcatLeft {
                    node,
                    right,
                    state,
                });
                tasks.push(Task::Visit {
                    node: left,
                    state: state.descend(),
                });
            }
            AstNode::Alternation(left, right) => {
                tasks.push(Task::Alternation { node, state });
                tasks.push(Task::Visit {
                    node: right,
                    state: state.descend(),
                });
                tasks.push(Task::Visit {
                    node: left,
                    state: state.descend(),
                });
            }
            AstNode::Repeat { item, quantifier } => {
                tasks.push(Task::Repeat {
                    node,
                    item,
                    quantifier: *quantifier,
                    state,
                    frontier: VecDeque::new(),
                    acc: SuffixSet::singleton(state.pos),
                });
                tasks.push(Task::Visit {
                    node: item,
                    state: state.descend(),
                });
            }
        }
    }

    fn finish(
        &mut self,
        node: &'p AstNode,
        state: MatchState<'t>,
        result: SuffixSet,
        values: &mut Vec<Rc<SuffixSet>>,
    ) {
        self.trace.record(&TraceEvent {
            node: node.kind(),
            text: self.text,
            pos: state.pos,
            depth: state.depth,
            outcome: if result.is_empty() {
                Outcome::Failed
            } else {
                Outcome::Matched(&result)
            },
        });

        let result = Rc::new(result);
        self.memo
            .insert((ptr::from_ref(node), state.pos), Rc::clone(&result));
        values.push(result);
    }
}
