use super::{
    Result,
    ast::AstRoot,
    engine::Matcher,
    parser::parse_pattern,
    trace::{NoTrace, Trace},
};
use std::{fmt, iter, str::FromStr};

/// How a pattern has to fit the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Some branch of the pattern must consume the entire text.
    #[default]
    Fullmatch,
    /// The pattern must match starting at some offset; it need not reach the
    /// end of the text.
    Search,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Fullmatch => "fullmatch",
            Mode::Search => "search",
        })
    }
}

/// A parsed pattern, ready to be matched against any number of texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Regex {
    source: String,
    ast: AstRoot,
}

impl Regex {
    /// Parses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the syntax error if `pattern` is not valid.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            source: pattern.to_owned(),
            ast: parse_pattern(pattern)?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn ast(&self) -> &AstRoot {
        &self.ast
    }

    #[must_use]
    pub fn is_match(&self, text: &str, mode: Mode) -> bool {
        self.is_match_with(text, mode, NoTrace)
    }

    pub fn is_match_with<T: Trace>(&self, text: &str, mode: Mode, trace: T) -> bool {
        match mode {
            Mode::Fullmatch => self.fullmatch_with(text, trace),
            Mode::Search => self.search_with(text, trace),
        }
    }

    /// Whether the pattern can consume all of `text`.
    #[must_use]
    pub fn fullmatch(&self, text: &str) -> bool {
        self.fullmatch_with(text, NoTrace)
    }

    pub fn fullmatch_with<T: Trace>(&self, text: &str, mut trace: T) -> bool {
        trace.begin(&self.source, text, Mode::Fullmatch);

        let matched = Matcher::with_trace(&self.ast, text, &mut trace)
            .run(0)
            .is_some_and(|ends| ends.contains(text.len()));

        trace.verdict(matched);
        matched
    }

    /// Whether the pattern matches starting at some offset of `text`.
    #[must_use]
    pub fn search(&self, text: &str) -> bool {
        self.search_start(text).is_some()
    }

    pub fn search_with<T: Trace>(&self, text: &str, trace: T) -> bool {
        self.search_start_with(text, trace).is_some()
    }

    /// The first byte offset of `text` at which the pattern matches.
    #[must_use]
    pub fn search_start(&self, text: &str) -> Option<usize> {
        self.search_start_with(text, NoTrace)
    }

    pub fn search_start_with<T: Trace>(&self, text: &str, mut trace: T) -> Option<usize> {
        trace.begin(&self.source, text, Mode::Search);

        // Every attempt is anchored against the whole text, so `^` only
        // holds at offset 0 and results can be shared between attempts.
        let mut matcher = Matcher::with_trace(&self.ast, text, &mut trace);
        let found = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(text.len()))
            .find(|&start| {
                matcher.trace_mut().attempt(text, start);
                matcher.run(start).is_some()
            });

        trace.verdict(found.is_some());
        found
    }
}

impl FromStr for Regex {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Whether `pattern` can consume all of `text`.
///
/// # Errors
///
/// Returns the syntax error if `pattern` is not valid.
pub fn fullmatch(pattern: &str, text: &str) -> Result<bool> {
    Ok(Regex::new(pattern)?.fullmatch(text))
}

/// Whether `pattern` matches starting at some offset of `text`.
///
/// # Errors
///
/// Returns the syntax error if `pattern` is not valid.
pub fn search(pattern: &str, text: &str) -> Result<bool> {
    Ok(Regex::new(pattern)?.search(text))
}
