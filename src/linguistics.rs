//! Linguistic capabilities the analysis pipeline relies on.
//!
//! The pipeline only talks to [`LinguisticService`], so the bundled rule-based
//! provider can be replaced without touching normalization or metrics.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{info, warn};

use crate::lemmatizer::Lemmatizer;
use crate::resources::{self, Bundle, ResourceStore};
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
}

pub trait LinguisticService {
    /// Splits text into word and punctuation tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Best-effort dictionary form of a single token.
    fn lemmatize(&self, word: &str) -> String;

    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn stopwords_for(&self, language: Language) -> &HashSet<String>;
}

/// Default provider backed by the three resource bundles.
#[derive(Debug, Clone)]
pub struct BundledLinguistics {
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    english_stopwords: HashSet<String>,
}

impl BundledLinguistics {
    pub fn from_sources(sentence_rules: &str, lemma_dictionary: &str, stopwords: &str) -> Self {
        Self {
            tokenizer: Tokenizer::from_bundle(sentence_rules),
            lemmatizer: Lemmatizer::from_bundle(lemma_dictionary),
            english_stopwords: resources::entries(stopwords)
                .map(|(_, word)| word.to_lowercase())
                .collect(),
        }
    }

    /// Loads every bundle from a bootstrapped store.
    pub fn from_store(store: &ResourceStore) -> Result<Self> {
        let start_time = Instant::now();

        let service = Self::from_sources(
            &store.read(Bundle::SentenceRules)?,
            &store.read(Bundle::LemmaDictionary)?,
            &store.read(Bundle::Stopwords)?,
        );

        info!(
            action = "loaded",
            component = "linguistics",
            source = "data_dir",
            abbreviations = service.tokenizer.abbreviation_count(),
            lemma_exceptions = service.lemmatizer.exception_count(),
            stopwords = service.english_stopwords.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Loaded linguistic resources"
        );
        Ok(service)
    }

    /// Startup path: bootstraps the store, then loads from it. When the data
    /// directory cannot be prepared the compiled-in copies are used instead.
    pub fn initialize(store: &ResourceStore) -> Result<Self> {
        match store.bootstrap().and_then(|_| Self::from_store(store)) {
            Ok(service) => Ok(service),
            Err(e) => {
                warn!(action = "fallback", component = "linguistics", root = ?store.root(), error = %e, "Data directory unavailable, using embedded resources");
                Self::embedded()
            }
        }
    }

    /// Uses the copies compiled into the binary, bypassing the data directory.
    pub fn embedded() -> Result<Self> {
        let service = Self::from_sources(
            Bundle::SentenceRules.embedded_text()?,
            Bundle::LemmaDictionary.embedded_text()?,
            Bundle::Stopwords.embedded_text()?,
        );
        info!(
            action = "loaded",
            component = "linguistics",
            source = "embedded",
            stopwords = service.english_stopwords.len(),
            "Loaded embedded linguistic resources"
        );
        Ok(service)
    }
}

impl LinguisticService for BundledLinguistics {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.words(text)
    }

    fn lemmatize(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }

    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenizer.sentences(text)
    }

    fn stopwords_for(&self, language: Language) -> &HashSet<String> {
        match language {
            Language::English => &self.english_stopwords,
        }
    }
}
