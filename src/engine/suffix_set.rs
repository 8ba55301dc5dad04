use std::collections::HashSet;

/// A set of suffixes, stored as byte offsets into the matched text, that
/// remembers the order in which offsets were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuffixSet {
    order: Vec<usize>,
    seen: HashSet<usize>,
}

impl SuffixSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn singleton(pos: usize) -> Self {
        let mut set = Self::new();
        set.insert(pos);
        set
    }

    /// Adds `pos`, returning whether it was not already present.
    pub fn insert(&mut self, pos: usize) -> bool {
        let fresh = self.seen.insert(pos);
        if fresh {
            self.order.push(pos);
        }
        fresh
    }

    pub fn extend(&mut self, other: &SuffixSet) {
        for pos in other.iter() {
            self.insert(pos);
        }
    }

    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.seen.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The offsets in first-insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// The suffixes of `text` named by this set, in insertion order.
    pub fn suffixes<'t>(
        &self,
        text: &'t str,
    ) -> impl Iterator<Item = &'t str> + use<'_, 't> {
        self.iter().map(move |pos| &text[pos..])
    }

    /// Drops the first inserted offset.
    #[must_use]
    pub fn without_first(self) -> Self {
        let mut rest = Self::new();
        for pos in self.order.into_iter().skip(1) {
            rest.insert(pos);
        }
        rest
    }
}

impl FromIterator<usize> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
