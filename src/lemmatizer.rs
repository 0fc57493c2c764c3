use std::collections::HashMap;

use crate::resources::{self, Bundle};

/// Suffixes reduced by dropping a trailing "es". Nouns ending in -che or -ie
/// (`caches`, `movies`) are listed in the dictionary bundle instead.
const ES_SUFFIXES: [&str; 5] = ["sses", "xes", "zzes", "ches", "shes"];

/// Endings of words that look plural but usually are not.
const SINGULAR_ENDINGS: [&str; 3] = ["ss", "us", "is"];

/// Noun lemmatizer: irregular forms come from the dictionary bundle, regular
/// plurals go through detachment rules. Unknown shapes are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    pub fn new<I>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            exceptions: exceptions.into_iter().collect(),
        }
    }

    pub fn from_bundle(content: &str) -> Self {
        Self::new(resources::pairs(content, Bundle::LemmaDictionary))
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        if word.chars().count() <= 3 || !word.ends_with('s') {
            return word.to_string();
        }
        if SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return word.to_string();
        }

        if word.len() > 4 && word.ends_with("ies") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if ES_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
            return word[..word.len() - 2].to_string();
        }
        word[..word.len() - 1].to_string()
    }
}
