use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Splits a sentence into lowercase word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Tokenize into maximal runs of word characters after NFKC normalization and
/// lowercasing. Punctuation and whitespace only separate tokens, so
/// "who've" yields `["who", "ve"]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexTokenizer;

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        WORD.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
    }
}
