//! Sentence-level inverted index over a corpus of numbered text documents.
//!
//! Documents are split into sentences, each sentence is reduced to its
//! "interesting" lemmas, and every lemma is reported with its corpus frequency
//! and the sentences (and documents) it occurs in.

pub mod corpus;
pub mod error;
pub mod index;
pub mod lemmatizer;
pub mod noise;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod segment;
pub mod tagger;
pub mod tokenizer;

pub type DocumentId = u64;
pub type SentenceId = usize;

pub use corpus::{validate_corpus, RawDocument, SourceFile};
pub use error::{IndexError, Result};
pub use index::{build_inverted_index, build_vocabulary, InvertedIndexEntry, OccurrenceMatrix, Vocabulary};
pub use lemmatizer::{CoarsePos, Lemmatizer, RuleLemmatizer};
pub use noise::{NoiseConfig, NoiseWords};
pub use normalize::{normalize_sentences, NormalizedSentence, TextNormalizer};
pub use pipeline::{build_index, IndexConfig, LanguageModels};
pub use report::{map_results, Report, ReportRow};
pub use segment::{segment_corpus, Sentence, SentenceSplitter, UnicodeSentenceSplitter};
pub use tagger::{PosTagger, RuleTagger};
pub use tokenizer::{RegexTokenizer, Tokenizer};
