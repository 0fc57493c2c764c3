use crate::linguistics::Language;

/// Fixed analysis defaults; not exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub language: Language,
    pub top_words: usize,
    pub words_per_minute: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            top_words: 10,
            words_per_minute: 200,
        }
    }
}
