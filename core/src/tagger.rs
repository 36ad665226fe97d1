//! Penn Treebank part-of-speech tagging.
//!
//! `RuleTagger` assigns an initial tag from a closed-class lexicon or from
//! word shape, then revisits each token in the light of its left neighbour.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Assigns one Penn Treebank tag per token. Tagging sees the whole sequence so
/// a tag may depend on the surrounding tokens.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<String>;
}

lazy_static! {
    static ref LEXICON: HashMap<&'static str, &'static str> = {
        let groups: &[(&str, &[&str])] = &[
            ("DT", &["the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no", "another", "all", "both", "either", "neither"]),
            ("PRP", &["i", "me", "you", "he", "she", "it", "we", "they", "him", "her", "us", "them", "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves"]),
            ("PRP$", &["my", "your", "his", "its", "our", "their"]),
            ("WP", &["who", "whom", "what"]),
            ("WP$", &["whose"]),
            ("WDT", &["which", "whatever"]),
            ("WRB", &["how", "when", "where", "why"]),
            ("EX", &["there"]),
            ("CC", &["and", "or", "but", "nor"]),
            ("IN", &["of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before", "after", "above", "below", "from", "up", "down", "over", "under", "until", "while", "because", "as", "if", "than", "since", "though", "although", "unless", "upon", "within", "without", "toward", "towards", "across", "behind", "beyond", "like", "near", "off", "out"]),
            ("TO", &["to"]),
            ("MD", &["can", "could", "will", "would", "shall", "should", "may", "might", "must", "won", "wouldn", "couldn", "shouldn", "ll", "d"]),
            ("CD", &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "hundred", "thousand", "million"]),
            ("VB", &["be", "let", "come", "tell", "begin", "make", "go", "get", "see", "say", "take", "give", "find", "become", "try", "ask", "call", "help", "keep"]),
            ("VBP", &["am", "are", "have", "do", "don", "aren", "haven", "ve", "re", "m", "know", "believe", "think", "want", "need", "feel", "seem"]),
            ("VBZ", &["is", "has", "does", "doesn", "isn", "hasn", "s"]),
            ("VBD", &["was", "were", "had", "did", "didn", "wasn", "weren", "hadn", "made", "came", "went", "took", "gave", "knew", "got", "said", "told", "thought", "felt", "brought", "began", "kept", "held", "wrote", "stood", "heard", "meant", "ran", "paid", "spoke", "grew", "sent", "built", "understood", "drew", "spent", "drove", "bought", "wore", "chose", "threw", "caught", "sold", "fought", "taught", "ate", "flew", "slept"]),
            ("VBN", &["been", "done", "gone", "taken", "given", "seen", "known", "written", "spoken", "grown", "fallen", "drawn", "broken", "driven", "chosen", "thrown", "eaten", "forgotten", "hidden", "stolen", "frozen"]),
            ("VBG", &["being", "having", "doing", "going"]),
            ("RB", &["not", "t", "very", "just", "also", "too", "here", "now", "then", "only", "still", "even", "never", "always", "often", "already", "again", "soon", "ever", "yet", "so", "quite", "rather", "almost", "far", "perhaps", "maybe"]),
            ("JJ", &["good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right", "big", "high", "different", "small", "large", "next", "early", "young", "important", "few", "public", "bad", "same", "able"]),
            ("NN", &["today", "tonight", "tomorrow", "yesterday", "thing", "nothing", "something", "anything", "everything", "morning", "evening", "king", "ring", "spring", "string", "wing", "building", "meeting", "feeling", "ceiling", "wedding", "news"]),
            ("NNS", &["thanks", "things", "people"]),
            ("UH", &["hello", "hi", "oh", "yes", "please"]),
        ];
        let mut lexicon = HashMap::new();
        for (tag, words) in groups {
            for word in *words {
                lexicon.insert(*word, *tag);
            }
        }
        lexicon
    };

    static ref ARTICLES: HashSet<&'static str> =
        ["the", "a", "an", "this", "these", "those", "every", "each", "another"].into_iter().collect();

    static ref SUBJECTS: HashSet<&'static str> =
        ["i", "you", "we", "they", "he", "she", "it"].into_iter().collect();
}

const ADJECTIVE_SUFFIXES: [&str; 10] = ["ous", "ful", "able", "ible", "ive", "less", "ish", "ical", "ic", "al"];
const NOUN_SUFFIXES: [&str; 11] = ["ness", "ment", "tion", "sion", "ity", "ism", "ist", "ance", "ence", "ship", "hood"];

/// Guess a tag for a word the lexicon does not know, from its shape alone.
fn guess(word: &str) -> &'static str {
    let len = word.chars().count();
    if word.chars().all(|c| c.is_numeric()) {
        return "CD";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return "VBD";
    }
    if len > 4 && word.ends_with("ly") {
        return "RB";
    }
    if len > 3 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "NN";
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return "NNS";
    }
    "NN"
}

/// Lexicon lookup, shape heuristics, then left-context corrections:
/// - a guessed noun after `to` or a modal is a base verb ("to brave");
/// - a guessed noun after a subject pronoun is a present verb ("they walk");
/// - a guessed verb form after an article or possessive is nominal
///   ("the building", "my tired feet").
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        let words: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            if let Some(&tag) = LEXICON.get(word.as_str()) {
                tags.push(tag);
                continue;
            }
            let mut tag = guess(word);
            if let Some(prev) = i.checked_sub(1) {
                let prev_tag = tags[prev];
                let prev_word = words[prev].as_str();
                tag = match tag {
                    "NN" if matches!(prev_tag, "TO" | "MD") => "VB",
                    "NN" if SUBJECTS.contains(prev_word) => {
                        if matches!(prev_word, "he" | "she" | "it") {
                            "VBZ"
                        } else {
                            "VBP"
                        }
                    }
                    "NNS" if matches!(prev_word, "he" | "she" | "it") => "VBZ",
                    "VBG" if ARTICLES.contains(prev_word) || prev_tag == "PRP$" => "NN",
                    "VBD" if ARTICLES.contains(prev_word) || prev_tag == "PRP$" => "JJ",
                    other => other,
                };
            }
            tags.push(tag);
        }

        tags.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sentence: &str) -> Vec<String> {
        let tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        RuleTagger.tag(&tokens)
    }

    #[test]
    fn tags_one_per_token() {
        assert_eq!(tag("hello I am an engineer"), vec!["UH", "PRP", "VBP", "DT", "NN"]);
        assert!(tag("").is_empty());
    }

    #[test]
    fn uses_word_shape_for_unknown_words() {
        assert_eq!(tag("saying traveled quickly dangerous cats 42"), vec!["VBG", "VBD", "RB", "JJ", "NNS", "CD"]);
    }

    #[test]
    fn base_verb_after_to() {
        assert_eq!(tag("to brave the cold"), vec!["TO", "VB", "DT", "NN"]);
    }

    #[test]
    fn present_verb_after_subject() {
        assert_eq!(tag("they walk"), vec!["PRP", "VBP"]);
        assert_eq!(tag("she walks"), vec!["PRP", "VBZ"]);
    }

    #[test]
    fn gerund_after_article_is_noun() {
        assert_eq!(tag("the painting"), vec!["DT", "NN"]);
        assert_eq!(tag("it s humbling"), vec!["PRP", "VBZ", "VBG"]);
    }
}
