use lazy_static::lazy_static;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::corpus::RawDocument;
use crate::{DocumentId, SentenceId};

/// Splits a text into its sentences, in reading order.
pub trait SentenceSplitter: Send + Sync {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

lazy_static! {
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "rev", "gen", "col", "capt", "lt", "sgt", "gov", "sen", "rep",
            "vs", "etc", "e.g", "i.e", "cf", "al", "approx", "dept", "est", "inc", "ltd", "co", "corp", "no", "vol", "fig", "pp",
            "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
        ];
        words.iter().copied().collect()
    };
}

/// UAX #29 sentence boundaries with abbreviation handling: a boundary right
/// after "Mr.", "e.g." or a single-letter initial does not end the sentence.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    fn ends_with_abbreviation(fragment: &str) -> bool {
        let Some(word) = fragment.trim_end().rsplit(char::is_whitespace).next() else {
            return false;
        };
        let Some(word) = word.strip_suffix('.') else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
        let mut chars = word.chars();
        let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        single_letter || ABBREVIATIONS.contains(word.as_str())
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, fragment) in text.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(offset);
            let end = offset + fragment.len();
            if Self::ends_with_abbreviation(fragment) && end < text.len() {
                continue;
            }
            let sentence = text[begin..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = None;
        }
        if let Some(begin) = start {
            let sentence = text[begin..].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }
        sentences
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub document: DocumentId,
    pub id: SentenceId,
    pub text: String,
}

/// Split every document and number its sentences corpus-wide, starting at 0
/// and following document order. Splitting may run in parallel; numbering
/// always happens afterwards in a single ordered pass.
pub fn segment_corpus(docs: &[RawDocument], splitter: &dyn SentenceSplitter, parallel: bool) -> Vec<Sentence> {
    let split = |doc: &RawDocument| -> Vec<String> {
        splitter.split(&doc.text).into_iter().map(str::to_string).collect()
    };
    let per_doc: Vec<Vec<String>> = if parallel {
        docs.par_iter().map(split).collect()
    } else {
        docs.iter().map(split).collect()
    };

    let mut sentences = Vec::with_capacity(per_doc.iter().map(Vec::len).sum());
    for (doc, texts) in docs.iter().zip(per_doc) {
        for text in texts {
            let id = sentences.len();
            sentences.push(Sentence { document: doc.id, id, text });
        }
    }
    tracing::debug!(documents = docs.len(), sentences = sentences.len(), "segmented corpus");
    sentences
}
