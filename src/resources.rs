use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::error::AnalysisError;

// Copies compiled into the binary; installed when the data directory lacks them
const ABBREVIATIONS_BYTES: &[u8] = include_bytes!("../data/abbreviations.txt");
const NOUN_EXCEPTIONS_BYTES: &[u8] = include_bytes!("../data/noun_exceptions.txt");
const STOPWORDS_BYTES: &[u8] = include_bytes!("../data/stopwords_english.txt");

const DATA_DIR_NAME: &str = "wordscope_data";

/// One of the linguistic resource files the analyzer depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bundle {
    /// Abbreviations the sentence splitter must not break after.
    SentenceRules,
    /// Irregular noun forms used by the lemmatizer.
    LemmaDictionary,
    /// English stop-word list.
    Stopwords,
}

impl Bundle {
    pub const ALL: [Bundle; 3] = [Bundle::SentenceRules, Bundle::LemmaDictionary, Bundle::Stopwords];

    pub fn name(self) -> &'static str {
        match self {
            Bundle::SentenceRules => "punkt",
            Bundle::LemmaDictionary => "wordnet",
            Bundle::Stopwords => "stopwords",
        }
    }

    /// Location of the bundle relative to the data directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            Bundle::SentenceRules => "tokenizers/punkt/abbreviations.txt",
            Bundle::LemmaDictionary => "corpora/wordnet/noun.exc",
            Bundle::Stopwords => "corpora/stopwords/english",
        }
    }

    fn embedded_bytes(self) -> &'static [u8] {
        match self {
            Bundle::SentenceRules => ABBREVIATIONS_BYTES,
            Bundle::LemmaDictionary => NOUN_EXCEPTIONS_BYTES,
            Bundle::Stopwords => STOPWORDS_BYTES,
        }
    }

    pub fn embedded_text(self) -> Result<&'static str> {
        std::str::from_utf8(self.embedded_bytes())
            .with_context(|| format!("Failed to decode embedded '{}' bundle", self.name()))
    }
}

/// Outcome of a bootstrap pass over every bundle.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub installed: Vec<Bundle>,
    pub present: Vec<Bundle>,
}

/// On-disk cache of linguistic resources, laid out like an NLTK data directory.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$HOME/wordscope_data`, falling back to `%USERPROFILE%` on Windows.
    pub fn default_root() -> Result<PathBuf> {
        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .context("Neither HOME nor USERPROFILE is set")?;
        Ok(PathBuf::from(home).join(DATA_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, bundle: Bundle) -> PathBuf {
        self.root.join(bundle.relative_path())
    }

    pub fn find(&self, bundle: Bundle) -> Result<PathBuf, AnalysisError> {
        let path = self.path_of(bundle);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AnalysisError::MissingResource {
                bundle: bundle.name(),
                path,
            })
        }
    }

    /// Writes the compiled-in copy of `bundle` into the data directory.
    pub fn install(&self, bundle: Bundle) -> Result<PathBuf> {
        let path = self.path_of(bundle);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        fs::write(&path, bundle.embedded_bytes())
            .with_context(|| format!("Failed to install '{}' into {:?}", bundle.name(), path))?;

        info!(action = "install", component = "resource_store", bundle = bundle.name(), path = ?path, "Installed resource bundle");
        Ok(path)
    }

    /// Ensures every bundle exists locally, installing only the missing ones.
    pub fn bootstrap(&self) -> Result<BootstrapReport> {
        let start_time = Instant::now();
        info!(action = "start", component = "resource_bootstrap", root = ?self.root, "Checking linguistic resources");

        let mut report = BootstrapReport::default();
        for bundle in Bundle::ALL {
            match self.find(bundle) {
                Ok(_) => report.present.push(bundle),
                Err(e) => {
                    info!(action = "missing", component = "resource_bootstrap", error = %e, "Resource bundle missing");
                    self.install(bundle)?;
                    report.installed.push(bundle);
                }
            }
        }

        info!(
            action = "complete",
            component = "resource_bootstrap",
            installed = report.installed.len(),
            present = report.present.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Linguistic resources ready"
        );
        Ok(report)
    }

    pub fn read(&self, bundle: Bundle) -> Result<String> {
        let path = self.find(bundle)?;
        fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))
    }
}

/// Non-empty, non-comment lines of a bundle, with 1-based line numbers.
pub fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(line_num, line)| (line_num + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parses a two-column bundle such as the lemma dictionary, skipping malformed lines.
pub fn pairs(content: &str, bundle: Bundle) -> Vec<(String, String)> {
    let mut result = Vec::new();
    for (line_number, line) in entries(content) {
        let mut columns = line.split_whitespace();
        match (columns.next(), columns.next(), columns.next()) {
            (Some(from), Some(to), None) => result.push((from.to_lowercase(), to.to_lowercase())),
            _ => {
                warn!(action = "parse", component = "resource_bundle", bundle = bundle.name(), line_number, "Malformed entry skipped")
            }
        }
    }
    result
}
