use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{IndexError, Result};
use crate::normalize::NormalizedSentence;
use crate::SentenceId;

pub type TermIdx = usize;

/// Distinct terms of the corpus in byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<TermIdx> {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }
}

/// Sentence × term counts. Row `s` belongs to sentence `s` and lists
/// `(term, count)` pairs with nonzero count, sorted by term index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceMatrix {
    rows: Vec<Vec<(TermIdx, u32)>>,
    columns: usize,
}

impl OccurrenceMatrix {
    pub fn rows(&self) -> &[Vec<(TermIdx, u32)>] {
        &self.rows
    }

    pub fn num_sentences(&self) -> usize {
        self.rows.len()
    }

    pub fn num_terms(&self) -> usize {
        self.columns
    }

    pub fn get(&self, sentence: SentenceId, term: TermIdx) -> u32 {
        self.rows
            .get(sentence)
            .and_then(|row| row.binary_search_by_key(&term, |&(t, _)| t).ok().map(|i| row[i].1))
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndexEntry {
    pub term: String,
    pub frequency: u64,
    /// Ascending, each sentence once.
    pub sentences: Vec<SentenceId>,
}

/// Collect the vocabulary and count every term per sentence. `sentences`
/// must be ordered by `SentenceId` and dense from 0.
pub fn build_vocabulary(sentences: &[NormalizedSentence]) -> Result<(Vocabulary, OccurrenceMatrix)> {
    let distinct: BTreeSet<&str> = sentences.iter().flat_map(NormalizedSentence::terms).collect();
    if distinct.is_empty() {
        return Err(IndexError::EmptyVocabulary);
    }
    let vocabulary = Vocabulary { terms: distinct.into_iter().map(str::to_string).collect() };
    let lookup: HashMap<&str, TermIdx> =
        vocabulary.terms.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect();

    let rows: Vec<Vec<(TermIdx, u32)>> = sentences
        .iter()
        .map(|s| {
            let mut counts: BTreeMap<TermIdx, u32> = BTreeMap::new();
            for term in s.terms() {
                *counts.entry(lookup[term]).or_insert(0) += 1;
            }
            counts.into_iter().collect::<Vec<_>>()
        })
        .collect();

    let matrix = OccurrenceMatrix { rows, columns: vocabulary.len() };
    tracing::debug!(terms = vocabulary.len(), sentences = matrix.num_sentences(), "built vocabulary");
    Ok((vocabulary, matrix))
}

/// Per-term postings in vocabulary order: the column sum and the rows where
/// the column is nonzero.
pub fn build_inverted_index(vocabulary: &Vocabulary, matrix: &OccurrenceMatrix) -> Vec<InvertedIndexEntry> {
    let mut frequencies = vec![0u64; vocabulary.len()];
    let mut postings: Vec<Vec<SentenceId>> = vec![Vec::new(); vocabulary.len()];

    // Walking rows in order keeps every posting list ascending.
    for (sentence, row) in matrix.rows.iter().enumerate() {
        for &(term, count) in row {
            frequencies[term] += u64::from(count);
            postings[term].push(sentence);
        }
    }

    vocabulary
        .terms
        .iter()
        .zip(frequencies)
        .zip(postings)
        .map(|((term, frequency), sentences)| InvertedIndexEntry { term: term.clone(), frequency, sentences })
        .collect()
}
