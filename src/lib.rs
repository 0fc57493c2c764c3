pub mod analyzer;
pub mod args;
pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod lemmatizer;
pub mod linguistics;
pub mod metrics;
pub mod normalize;
pub mod report;
pub mod resources;
pub mod stats;
pub mod tokenizer;
pub mod utils;

pub use analyzer::{analyze_text, EXAMPLE_TEXT};
pub use args::{Args, OutputFormat};
pub use cloud::{CloudOptions, WordCloud};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use frequency::{FrequencyTable, WordFrequency};
pub use linguistics::{BundledLinguistics, Language, LinguisticService};
pub use metrics::Metrics;
pub use resources::{Bundle, ResourceStore};
pub use stats::AnalysisResult;
