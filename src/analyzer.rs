use std::time::Instant;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;
use crate::linguistics::LinguisticService;
use crate::metrics;
use crate::normalize;
use crate::stats::AnalysisResult;

/// Sample prose shown by `--example`; never analysed.
pub const EXAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

pub fn analyze_text(
    text: &str,
    service: &dyn LinguisticService,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    if text.is_empty() {
        warn!(action = "reject", component = "analysis", "No input text provided");
        return Err(AnalysisError::EmptyInput);
    }

    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "analysis",
        input_chars = text.chars().count(),
        "Starting text analysis"
    );

    let tokens = normalize::normalize_text(text, service, config.language);
    info!(
        action = "complete",
        component = "normalization",
        token_count = tokens.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Normalized input text"
    );

    let metrics = metrics::compute_metrics(text, &tokens, service, config.words_per_minute);
    let frequencies = FrequencyTable::from_tokens(&tokens);
    let top_words = frequencies.most_common(config.top_words);

    info!(
        action = "complete",
        component = "analysis",
        word_count = metrics.word_count,
        sentence_count = metrics.sentence_count,
        distinct_words = frequencies.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        metrics,
        top_words,
        frequencies,
        tokens,
    })
}
