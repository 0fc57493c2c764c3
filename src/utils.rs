use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use time::macros::format_description;
use tracing::info;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::resources::ResourceStore;

/// Logs go to stderr so that stdout only carries the report.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

pub fn validate_args(args: &Args) -> Result<()> {
    if let Some(cloud) = &args.cloud {
        let is_svg = cloud
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            anyhow::bail!("--cloud must point to an .svg file, got {:?}", cloud);
        }
    }

    if let Some(data_dir) = &args.data_dir {
        if data_dir.as_os_str().is_empty() {
            anyhow::bail!("--data-dir must not be empty");
        }
    }

    Ok(())
}

pub fn resolve_data_dir(args: &Args) -> Result<PathBuf> {
    match &args.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => ResourceStore::default_root(),
    }
}

/// Text from `--text`, `--file`, or stdin, in that order.
pub fn read_input(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path))?;
        info!(action = "read", component = "input", source = "file", path = ?path, bytes = text.len(), "Read input text");
        return Ok(text);
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter or paste your text, then press Ctrl-D (Ctrl-Z on Windows):");
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    info!(action = "read", component = "input", source = "stdin", bytes = text.len(), "Read input text");
    Ok(strip_final_newline(text))
}

/// Drops the single line ending that `echo` and terminals append to piped text.
pub fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
