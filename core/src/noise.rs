//! Words that carry no interest for the index: English stopwords plus the
//! most frequent words of the language.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const STOPWORDS_EN: &str = include_str!("../data/stopwords_en.txt");
const COMMON_WORDS_EN: &str = include_str!("../data/common_words.txt");

lazy_static! {
    static ref STOPWORDS: Vec<String> = word_list(STOPWORDS_EN);
    // Ordered by frequency, most common first.
    static ref COMMON_WORDS: Vec<String> = word_list(COMMON_WORDS_EN);
}

fn word_list(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_lowercase).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// How many of the most common English words count as noise.
    pub common_words: usize,
    pub extra_words: Vec<String>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { common_words: 1000, extra_words: Vec::new() }
    }
}

/// The noise set a lemma is checked against. Matching is exact and
/// case-sensitive; every entry is stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn english() -> Self {
        Self::from_config(&NoiseConfig::default())
    }

    pub fn from_config(config: &NoiseConfig) -> Self {
        let words = STOPWORDS
            .iter()
            .chain(COMMON_WORDS.iter().take(config.common_words))
            .cloned()
            .chain(config.extra_words.iter().map(|w| w.trim().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_set_has_stopwords_and_common_words() {
        let noise = NoiseWords::english();
        for w in ["the", "s", "ve", "didn", "i", "let", "say", "travel", "heart", "country", "thank"] {
            assert!(noise.contains(w), "{w} should be noise");
        }
        for w in ["brave", "today", "thanks", "journey", "humble", "peace", "despair"] {
            assert!(!noise.contains(w), "{w} should not be noise");
        }
    }

    #[test]
    fn common_word_cutoff() {
        let none = NoiseWords::from_config(&NoiseConfig { common_words: 0, extra_words: vec![] });
        assert!(none.contains("the"));
        assert!(!none.contains("travel"));
        assert_eq!(none.len(), STOPWORDS.iter().collect::<HashSet<_>>().len());
    }

    #[test]
    fn extra_words_are_lowercased() {
        let noise = NoiseWords::from_config(&NoiseConfig { common_words: 0, extra_words: vec![" Journey ".into()] });
        assert!(noise.contains("journey"));
    }
}
