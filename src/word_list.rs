use crate::config::LengthBounds;

/// An ordered, immutable list of candidate words.
///
/// Order matters: sampling picks by index, so the same list and the same
/// random stream always yield the same words.
#[derive(Debug, Clone, Copy)]
pub struct WordList<'a> {
    words: &'a [&'a str],
}

impl WordList<'static> {
    /// English nouns, bundled with the `names` crate.
    pub const ENGLISH: WordList<'static> = WordList::new(names::NOUNS);
}

impl<'a> WordList<'a> {
    #[must_use]
    pub const fn new(words: &'a [&'a str]) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &'a [&'a str] {
        self.words
    }

    /// The candidate pool: every word within `bounds`, in list order.
    #[must_use]
    pub fn filter(&self, bounds: &LengthBounds) -> Vec<&'a str> {
        if bounds.is_unbounded() {
            return self.words.to_vec();
        }
        self.words
            .iter()
            .copied()
            .filter(|word| bounds.contains(word))
            .collect()
    }

    /// Number of words within `bounds`.
    #[must_use]
    pub fn count(&self, bounds: &LengthBounds) -> usize {
        self.words
            .iter()
            .filter(|word| bounds.contains(word))
            .count()
    }
}
