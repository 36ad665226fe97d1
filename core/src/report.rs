use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::index::InvertedIndexEntry;
use crate::segment::Sentence;
use crate::DocumentId;

/// One line of the final index: a term, how often it occurs, the original
/// sentences it occurs in and the documents those sentences belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "lemma")]
    pub term: String,
    pub frequency: u64,
    pub sentences: Vec<String>,
    pub documents: BTreeSet<DocumentId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub documents: usize,
    pub sentences: usize,
    pub vocabulary: usize,
    pub rows: Vec<ReportRow>,
}

/// Join postings back to sentence text and owning documents, most frequent
/// term first. Equal frequencies keep the order of `entries`.
///
/// `sentences` is indexed by `SentenceId`.
pub fn map_results(entries: Vec<InvertedIndexEntry>, sentences: &[Sentence]) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = entries
        .into_iter()
        .map(|entry| {
            let owned: Vec<&Sentence> = entry.sentences.iter().filter_map(|&id| sentences.get(id)).collect();
            ReportRow {
                term: entry.term,
                frequency: entry.frequency,
                sentences: owned.iter().map(|s| s.text.clone()).collect(),
                documents: owned.iter().map(|s| s.document).collect(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    rows
}
