use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::args::OutputFormat;
use crate::linguistics::Language;
use crate::stats::AnalysisResult;
use crate::utils::format_number;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    language: Language,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

/// Plain-text rendering of an analysis: the four metrics, then the top-words table.
pub struct TextReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let metrics = &result.metrics;

        writeln!(f, "\n--- Text Analysis ---")?;
        writeln!(f, "Word count: {}", format_number(metrics.word_count))?;
        writeln!(f, "Character count: {}", format_number(metrics.character_count))?;
        writeln!(f, "Sentence count: {}", format_number(metrics.sentence_count))?;
        writeln!(f, "Reading time (minutes): {}", metrics.reading_time_minutes)?;

        writeln!(f, "\nMost common words:")?;
        if result.top_words.is_empty() {
            return writeln!(f, "(no words to show)");
        }

        let word_width = result
            .top_words
            .iter()
            .map(|w| w.word.chars().count())
            .max()
            .unwrap_or(0)
            .max("Word".len());

        writeln!(f, "{:<word_width$}  Frequency", "Word")?;
        for entry in &result.top_words {
            writeln!(
                f,
                "{:<word_width$}  {:>9}",
                entry.word,
                format_number(entry.count)
            )?;
        }
        Ok(())
    }
}

pub fn render_text(result: &AnalysisResult) -> String {
    TextReport(result).to_string()
}

pub fn render_json(
    result: &AnalysisResult,
    language: Language,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let report = JsonReport {
        generated_at,
        language,
        result,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize analysis report")
}

pub fn print_analysis_results(
    result: &AnalysisResult,
    format: OutputFormat,
    language: Language,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", render_json(result, language, Utc::now())?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_text;
    use crate::config::AnalysisConfig;
    use crate::linguistics::BundledLinguistics;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn analyze(text: &str) -> AnalysisResult {
        let service = BundledLinguistics::embedded().unwrap();
        analyze_text(text, &service, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn text_report_lists_metrics_and_table() {
        let report = render_text(&analyze("Cats cats dogs. Dogs run fast!"));

        let expected = "
--- Text Analysis ---
Word count: 6
Character count: 30
Sentence count: 2
Reading time (minutes): 0.03

Most common words:
Word  Frequency
cat           2
dog           2
run           1
fast          1
";
        assert_eq!(report, expected);
    }

    #[test]
    fn text_report_handles_no_words() {
        let report = render_text(&analyze("the and of"));

        assert!(report.contains("Word count: 0"));
        assert!(report.contains("Reading time (minutes): 0"));
        assert!(report.ends_with("(no words to show)\n"));
    }

    #[test]
    fn json_report_carries_all_fields() {
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let json = render_json(
            &analyze("Cats cats dogs. Dogs run fast!"),
            Language::English,
            generated_at,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["generated_at"], "2024-05-01T12:00:00Z");
        assert_eq!(value["language"], "english");
        assert_eq!(value["metrics"]["word_count"], 6);
        assert_eq!(value["metrics"]["character_count"], 30);
        assert_eq!(value["metrics"]["sentence_count"], 2);
        assert_eq!(value["metrics"]["reading_time_minutes"], 0.03);
        assert_eq!(value["top_words"][0]["word"], "cat");
        assert_eq!(value["top_words"][0]["count"], 2);
        assert_eq!(value["frequencies"]["words"].as_array().unwrap().len(), 4);
        assert!(value.get("tokens").is_none());
    }
}
