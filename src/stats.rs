use serde::Serialize;

use crate::frequency::{FrequencyTable, WordFrequency};
use crate::metrics::Metrics;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub metrics: Metrics,
    pub top_words: Vec<WordFrequency>,
    pub frequencies: FrequencyTable,
    #[serde(skip)]
    pub tokens: Vec<String>,
}

impl AnalysisResult {
    /// Normalized tokens joined by spaces, the input of the word cloud.
    pub fn cloud_text(&self) -> String {
        self.tokens.join(" ")
    }
}
