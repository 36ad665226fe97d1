use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lemmatizer::CoarsePos;
use crate::pipeline::LanguageModels;
use crate::segment::Sentence;

/// A sentence together with its interesting lemmas, space separated.
/// `normalized` is empty when nothing in the sentence survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSentence {
    pub sentence: Sentence,
    pub normalized: String,
}

impl NormalizedSentence {
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.normalized.split_whitespace()
    }
}

/// Tokenize, tag, lemmatize and filter a single sentence.
pub struct TextNormalizer<'a> {
    models: &'a LanguageModels,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(models: &'a LanguageModels) -> Self {
        Self { models }
    }

    /// Lemmas that survive filtering, in sentence order.
    pub fn lemmas(&self, text: &str) -> Vec<String> {
        let tokens = self.models.tokenizer.tokenize(&text.to_lowercase());
        let tags = self.models.tagger.tag(&tokens);

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                // A tagger that comes up short leaves the rest as nouns.
                let pos = tags.get(i).map_or(CoarsePos::Noun, |t| CoarsePos::from_treebank(t));
                self.models.lemmatizer.lemmatize(token, pos)
            })
            .filter(|lemma| self.is_interesting(lemma))
            .collect()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.lemmas(text).join(" ")
    }

    fn is_interesting(&self, lemma: &str) -> bool {
        !lemma.is_empty() && lemma.chars().all(char::is_alphabetic) && !self.models.noise.contains(lemma)
    }
}

/// Normalize every sentence, keeping `SentenceId` order in the output.
pub fn normalize_sentences(sentences: Vec<Sentence>, models: &LanguageModels, parallel: bool) -> Vec<NormalizedSentence> {
    let normalizer = TextNormalizer::new(models);
    let normalize = |sentence: Sentence| {
        let normalized = normalizer.normalize(&sentence.text);
        NormalizedSentence { sentence, normalized }
    };
    let out: Vec<NormalizedSentence> = if parallel {
        sentences.into_par_iter().map(normalize).collect()
    } else {
        sentences.into_iter().map(normalize).collect()
    };
    tracing::debug!(
        sentences = out.len(),
        empty = out.iter().filter(|s| s.normalized.is_empty()).count(),
        "normalized sentences"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        let models = LanguageModels::english();
        TextNormalizer::new(&models).normalize(text)
    }

    #[test]
    fn keeps_interesting_lemmas() {
        assert_eq!(
            normalize("Let me begin by saying thanks to all you who've traveled, from far and wide, to brave the cold today."),
            "thanks brave today"
        );
        assert_eq!(normalize("It's humbling, but in my heart I know you didn't come here just for me."), "humble");
    }

    #[test]
    fn drops_numbers_and_noise() {
        assert_eq!(normalize("In 1984 there were 2 of them."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn extra_noise_words_are_removed() {
        let config = crate::NoiseConfig { extra_words: vec!["journey".into()], ..Default::default() };
        let models = LanguageModels::english().with_noise_config(&config);
        assert_eq!(TextNormalizer::new(&models).normalize("We all made this journey for a reason."), "");

        let models = LanguageModels::english().with_noise(crate::NoiseWords::from_words(["we", "all", "this", "for", "a"]));
        assert_eq!(
            TextNormalizer::new(&models).normalize("We all made this journey for a reason."),
            "make journey reason"
        );
    }

    #[test]
    fn output_follows_sentence_order() {
        let models = LanguageModels::english();
        let sentences: Vec<Sentence> = ["In the face of war.", "Despair.", "Peace today."]
            .iter()
            .enumerate()
            .map(|(id, text)| Sentence { document: 1, id, text: text.to_string() })
            .collect();
        let out = normalize_sentences(sentences, &models, true);
        let got: Vec<&str> = out.iter().map(|s| s.normalized.as_str()).collect();
        assert_eq!(got, vec!["", "despair", "peace today"]);
        assert!(out.iter().enumerate().all(|(i, s)| s.sentence.id == i));
    }
}
