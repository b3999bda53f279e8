//! Whitespace tokenizer and stop-word set.
//!
//! Text is split on single ASCII spaces only; runs of spaces produce empty
//! tokens which the tokenizer discards. Words are byte sequences — no
//! lowercasing, no Unicode normalisation — and a word is valid unless it
//! contains a control character (byte value below 32).

use crate::error::{Result, SearchError};
use std::collections::BTreeSet;

/// Splits `text` on single spaces, yielding the non-empty words lazily.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// Returns `true` if `word` contains no control character.
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|byte| byte >= 32)
}

/// An ordered set of words excluded from indexing and from query plus-words.
///
/// Immutable after construction. Empty words are discarded silently; a word
/// containing a control character rejects the whole construction.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    /// Builds the set from a container of words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(SearchError::InvalidStopWord(word.to_string()));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Builds the set from a single space-separated string.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_words(text))
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
