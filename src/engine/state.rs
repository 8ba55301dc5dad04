/// Where a match attempt currently stands: the full text being matched, a
/// byte offset into it, and the nesting depth used for tracing.
///
/// The suffix still to be matched is `input[pos..]`. States are cheap to copy
/// and are never updated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchState<'a> {
    pub input: &'a str,
    pub pos: usize,
    pub depth: usize,
}

impl<'a> MatchState<'a> {
    #[must_use]
    pub fn new(input: &'a str, pos: usize) -> Self {
        debug_assert!(input.is_char_boundary(pos));
        Self {
            input,
            pos,
            depth: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Nothing has been consumed from the start of the text.
    #[inline]
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Consumes the current character if `accept` allows it.
    #[must_use]
    pub fn advance_if(self, accept: impl FnOnce(char) -> bool) -> Option<Self> {
        let c = self.current_char()?;
        accept(c).then(|| Self {
            pos: self.pos + c.len_utf8(),
            depth: self.depth + 1,
            ..self
        })
    }

    #[inline]
    #[must_use]
    pub fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Moves on to a suffix reached from this state.
    #[inline]
    #[must_use]
    pub fn descend_to(self, pos: usize) -> Self {
        debug_assert!(pos >= self.pos, "offsets never move backwards");
        Self {
            pos,
            depth: self.depth + 1,
            ..self
        }
    }
}
