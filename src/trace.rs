//! Step-by-step diagnostics for match attempts.
//!
//! A [`Trace`] sink sees every node visit the matcher makes. Sinks only
//! observe: nothing they do changes the outcome of a match, and running with
//! [`NoTrace`] is the same as running with no sink at all.

use crate::{ast::NodeKind, engine::SuffixSet, eval::Mode};
use std::io::Write;

/// What happened at a node visit.
#[derive(Clone, Copy, Debug)]
pub enum Outcome<'a> {
    /// The node is about to be evaluated.
    Enter,
    /// The node matched and can leave any of these suffixes.
    Matched(&'a SuffixSet),
    /// The node did not match.
    Failed,
    /// The node was already evaluated at this offset. An empty set is a
    /// remembered failure. No `Enter` precedes this event.
    Cached(&'a SuffixSet),
}

#[derive(Clone, Copy, Debug)]
pub struct TraceEvent<'a> {
    pub node: NodeKind,
    /// The complete text being matched.
    pub text: &'a str,
    /// Byte offset of the suffix the node was evaluated against.
    pub pos: usize,
    pub depth: usize,
    pub outcome: Outcome<'a>,
}

impl<'a> TraceEvent<'a> {
    #[must_use]
    pub fn suffix(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

pub trait Trace {
    fn record(&mut self, event: &TraceEvent<'_>);

    /// A run of `pattern` over `text` is starting.
    fn begin(&mut self, _pattern: &str, _text: &str, _mode: Mode) {}

    /// A search is trying the match at byte offset `start`.
    fn attempt(&mut self, _text: &str, _start: usize) {}

    fn verdict(&mut self, _matched: bool) {}
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn record(&mut self, event: &TraceEvent<'_>) {
        (**self).record(event);
    }

    fn begin(&mut self, pattern: &str, text: &str, mode: Mode) {
        (**self).begin(pattern, text, mode);
    }

    fn attempt(&mut self, text: &str, start: usize) {
        (**self).attempt(text, start);
    }

    fn verdict(&mut self, matched: bool) {
        (**self).verdict(matched);
    }
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    #[inline]
    fn record(&mut self, _event: &TraceEvent<'_>) {}
}

/// Writes a human-readable, indented trace to `W`.
///
/// Write failures are ignored.
#[derive(Debug)]
pub struct WriteTrace<W> {
    out: W,
}

impl<W: Write> WriteTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Trace for WriteTrace<W> {
    fn record(&mut self, event: &TraceEvent<'_>) {
        let pad = "  ".repeat(event.depth);
        let _ = match event.outcome {
            Outcome::Enter => writeln!(
                self.out,
                "{pad}[{}] text='{}'",
                event.node,
                event.suffix()
            ),
            Outcome::Matched(rest) => writeln!(
                self.out,
                "{pad}  ok {} rest={}",
                event.node,
                quoted(rest, event.text)
            ),
            Outcome::Failed => writeln!(self.out, "{pad}  FAIL {}", event.node),
            Outcome::Cached(rest) if rest.is_empty() => writeln!(
                self.out,
                "{pad}[{}] text='{}' cached FAIL",
                event.node,
                event.suffix()
            ),
            Outcome::Cached(rest) => writeln!(
                self.out,
                "{pad}[{}] text='{}' cached rest={}",
                event.node,
                event.suffix(),
                quoted(rest, event.text)
            ),
        };
    }

    fn begin(&mut self, pattern: &str, text: &str, mode: Mode) {
        let _ = writeln!(self.out, "=== TRACE for /{pattern}/ on '{text}' ({mode}) ===");
    }

    fn attempt(&mut self, text: &str, start: usize) {
        let _ = writeln!(self.out, "--- try at {start}: '{}' ---", &text[start..]);
    }

    fn verdict(&mut self, matched: bool) {
        let _ = writeln!(self.out, "{}", if matched { "SUCCESS" } else { "FAIL" });
    }
}

fn quoted(rest: &SuffixSet, text: &str) -> String {
    rest.suffixes(text)
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
