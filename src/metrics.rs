use serde::Serialize;

use crate::linguistics::LinguisticService;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Meaningful words only: the length of the normalized token sequence.
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub reading_time_minutes: f64,
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

pub fn reading_time(word_count: usize, words_per_minute: u32) -> f64 {
    word_count as f64 / f64::from(words_per_minute)
}

/// Sentence count always comes from `raw`, never from the lowercased copy.
pub fn compute_metrics(
    raw: &str,
    tokens: &[String],
    service: &dyn LinguisticService,
    words_per_minute: u32,
) -> Metrics {
    Metrics {
        word_count: tokens.len(),
        character_count: character_count(raw),
        sentence_count: service.split_sentences(raw).len(),
        reading_time_minutes: reading_time(tokens.len(), words_per_minute),
    }
}
