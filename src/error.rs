use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing was submitted; the pipeline never starts.
    #[error("Please enter or paste some text")]
    EmptyInput,

    #[error("linguistic resource '{bundle}' not found at {path:?}")]
    MissingResource { bundle: &'static str, path: PathBuf },
}
