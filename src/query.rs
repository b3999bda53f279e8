//! Query parsing.
//!
//! A raw query is a space-separated sequence of words; a word prefixed with a
//! single `-` is a minus-word and vetoes every document containing it. The
//! parsed [`Query`] borrows the raw string and holds its words deduplicated
//! and ordered.

use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_words, StopWordSet};
use std::collections::BTreeSet;

/// A parsed query: deduplicated, ordered plus- and minus-words borrowed from
/// the raw query string.
#[derive(Debug, Default)]
pub struct Query<'a> {
    /// Words that contribute tf·idf relevance.
    pub plus_words: BTreeSet<&'a str>,
    /// Words that veto any document containing them.
    pub minus_words: BTreeSet<&'a str>,
}

struct QueryWord<'a> {
    word: &'a str,
    is_minus: bool,
    is_stop: bool,
}

impl<'a> Query<'a> {
    /// Parses `raw_query`, validating each token.
    ///
    /// A stop word is dropped from the plus-words; a minus token keeps its
    /// veto even when the stripped word is a stop word. A raw query with no
    /// tokens parses to an empty query.
    pub fn parse(raw_query: &'a str, stop_words: &StopWordSet) -> Result<Self> {
        let mut query = Query::default();
        for token in split_words(raw_query) {
            let parsed = parse_query_word(token, stop_words)?;
            if parsed.is_minus {
                query.minus_words.insert(parsed.word);
            } else if !parsed.is_stop {
                query.plus_words.insert(parsed.word);
            }
        }
        Ok(query)
    }
}

fn parse_query_word<'a>(token: &'a str, stop_words: &StopWordSet) -> Result<QueryWord<'a>> {
    if token.is_empty() {
        return Err(SearchError::EmptyQueryWord);
    }
    let (word, is_minus) = match token.strip_prefix('-') {
        Some(stripped) if stripped.starts_with('-') => {
            return Err(SearchError::DoubleMinus(token.to_string()));
        }
        Some("") => return Err(SearchError::TrailingMinus),
        Some(stripped) => (stripped, true),
        None => (token, false),
    };
    if !is_valid_word(word) {
        return Err(SearchError::InvalidCharacter(word.to_string()));
    }
    Ok(QueryWord {
        word,
        is_minus,
        is_stop: stop_words.contains(word),
    })
}
