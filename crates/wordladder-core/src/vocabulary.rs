// Vocabulary: the closed, immutable set of graph nodes

use hashbrown::HashMap;

use crate::alphabet::SAMPLE_WORDS;
use crate::word::Word;
use crate::{LadderError, Result};

/// A fixed set of unique words.
///
/// Words are kept in lexicographic order, and a word's position in that
/// order is its index. Every graph, distance matrix and export built from
/// a vocabulary uses these indices, so row `i` of a matrix always belongs
/// to `vocabulary.word(i)`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: HashMap<Word, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from already-validated words. Duplicates collapse.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words.dedup();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Self { words, index }
    }

    /// Validate each string with [`Word::new`] and build a vocabulary.
    ///
    /// Fails on the first invalid entry.
    pub fn from_strs<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|s| Word::new(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(words))
    }

    /// The bundled sample vocabulary.
    pub fn sample() -> Self {
        Self::new(
            SAMPLE_WORDS
                .iter()
                .filter_map(|&w| Word::new(w).ok()),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Stable index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Stable index of `word`, or [`LadderError::WordNotFound`].
    pub fn require(&self, word: &str) -> Result<usize> {
        self.index_of(word)
            .ok_or_else(|| LadderError::WordNotFound(word.to_string()))
    }

    /// The word at stable index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn word(&self, i: usize) -> &Word {
        &self.words[i]
    }

    /// All words in stable order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let vocab = Vocabulary::from_strs(["cut", "cat", "bat", "cat"]).unwrap();
        assert_eq!(vocab.len(), 3);
        let words: Vec<&str> = vocab.iter().map(Word::as_str).collect();
        assert_eq!(words, ["bat", "cat", "cut"]);
    }

    #[test]
    fn indices_are_stable_positions() {
        let vocab = Vocabulary::from_strs(["cut", "cat", "bat"]).unwrap();
        for (i, w) in vocab.iter().enumerate() {
            assert_eq!(vocab.index_of(w.as_str()), Some(i));
            assert_eq!(vocab.word(i), w);
        }
    }

    #[test]
    fn require_reports_missing_word() {
        let vocab = Vocabulary::from_strs(["cat"]).unwrap();
        assert_eq!(vocab.require("cat").unwrap(), 0);
        match vocab.require("dog") {
            Err(LadderError::WordNotFound(w)) => assert_eq!(w, "dog"),
            other => panic!("expected WordNotFound, got {other:?}"),
        }
    }

    #[test]
    fn from_strs_rejects_invalid_entry() {
        let result = Vocabulary::from_strs(["cat", ""]);
        assert!(matches!(result, Err(LadderError::InvalidWord(_, _))));
    }

    #[test]
    fn sample_collapses_duplicate_care() {
        let vocab = Vocabulary::sample();
        assert_eq!(vocab.len(), SAMPLE_WORDS.len() - 1);
        assert!(vocab.contains("care"));
        assert!(vocab.contains("cat's"));
        assert!(vocab.contains("parts"));
    }

    #[test]
    fn empty_vocabulary_is_allowed() {
        let vocab = Vocabulary::new(Vec::new());
        assert!(vocab.is_empty());
        assert!(!vocab.contains("cat"));
    }
}
