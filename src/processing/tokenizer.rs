//! Keyword tokenization

use crate::processing::vocabulary::StopWords;
use std::collections::HashSet;

pub struct Tokenizer {
    stop_words: StopWords,
    min_token_len: usize,
}

/// Unique tokens in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl TokenSet {
    pub fn insert(&mut self, token: String) -> bool {
        if self.index.contains(&token) {
            return false;
        }
        self.index.insert(token.clone());
        self.ordered.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::default();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWords::default(), 2)
    }
}

impl Tokenizer {
    /// Tokens need more than `min_token_len` characters to be kept
    pub fn new(stop_words: StopWords, min_token_len: usize) -> Self {
        Self {
            stop_words,
            min_token_len,
        }
    }

    /// Lower-case, blank out punctuation, split on whitespace, then drop
    /// short tokens and stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if is_word_char(c) || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() > self.min_token_len)
            .filter(|word| !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }

    pub fn token_set(&self, text: &str) -> TokenSet {
        self.tokenize(text).into_iter().collect()
    }
}

/// Unicode letters and digits count, so `diseño` stays one token. This is wider
/// than an ASCII-only `\w` class, which would split it at the `ñ`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
