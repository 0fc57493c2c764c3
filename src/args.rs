use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "wordscope",
    about = "Analyze text for word, character and sentence counts, reading time and its most common words",
    version,
    long_about = None
)]
pub struct Args {
    /// Text to analyze (reads stdin when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the text to analyze
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write a word cloud SVG to this path
    #[arg(short, long)]
    pub cloud: Option<PathBuf>,

    /// Directory holding the linguistic resources
    #[arg(long, env = "WORDSCOPE_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Show an example text and exit
    #[arg(long)]
    pub example: bool,

    /// Install missing linguistic resources and exit
    #[arg(long)]
    pub init: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
