use serde::{Deserialize, Serialize};

use crate::corpus::{validate_corpus, SourceFile};
use crate::error::Result;
use crate::index::{build_inverted_index, build_vocabulary};
use crate::lemmatizer::{Lemmatizer, RuleLemmatizer};
use crate::noise::{NoiseConfig, NoiseWords};
use crate::normalize::normalize_sentences;
use crate::report::{map_results, Report};
use crate::segment::{segment_corpus, SentenceSplitter, UnicodeSentenceSplitter};
use crate::tagger::{PosTagger, RuleTagger};
use crate::tokenizer::{RegexTokenizer, Tokenizer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Extension (without the dot) a file needs to count as text.
    pub text_extension: String,
    /// Segment and normalize on the rayon pool.
    pub parallel: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { text_extension: "txt".to_string(), parallel: true }
    }
}

/// The language resources the pipeline runs on. Built once, then shared
/// read-only by every worker.
pub struct LanguageModels {
    pub splitter: Box<dyn SentenceSplitter>,
    pub tokenizer: Box<dyn Tokenizer>,
    pub tagger: Box<dyn PosTagger>,
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub noise: NoiseWords,
}

impl LanguageModels {
    pub fn english() -> Self {
        Self {
            splitter: Box::new(UnicodeSentenceSplitter::new()),
            tokenizer: Box::new(RegexTokenizer),
            tagger: Box::new(RuleTagger::new()),
            lemmatizer: Box::new(RuleLemmatizer::new()),
            noise: NoiseWords::english(),
        }
    }

    pub fn with_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Box::new(splitter);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn with_tagger(mut self, tagger: impl PosTagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    pub fn with_noise(mut self, noise: NoiseWords) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_noise_config(self, config: &NoiseConfig) -> Self {
        self.with_noise(NoiseWords::from_config(config))
    }
}

impl Default for LanguageModels {
    fn default() -> Self {
        Self::english()
    }
}

/// Run the whole pipeline over an already-read corpus. Fails on the first
/// stage that rejects its input; nothing partial is returned.
pub fn build_index(files: &[SourceFile], models: &LanguageModels, config: &IndexConfig) -> Result<Report> {
    let docs = validate_corpus(files, &config.text_extension)?;
    let sentences = segment_corpus(&docs, models.splitter.as_ref(), config.parallel);
    let normalized = normalize_sentences(sentences, models, config.parallel);
    let (vocabulary, matrix) = build_vocabulary(&normalized)?;
    let entries = build_inverted_index(&vocabulary, &matrix);

    let sentences: Vec<_> = normalized.into_iter().map(|n| n.sentence).collect();
    let rows = map_results(entries, &sentences);

    tracing::info!(
        documents = docs.len(),
        sentences = sentences.len(),
        terms = vocabulary.len(),
        "index built"
    );
    Ok(Report { documents: docs.len(), sentences: sentences.len(), vocabulary: vocabulary.len(), rows })
}
