//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Embed a directory of static web assets into a generated PROGMEM header
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input directory containing the web assets
    #[arg(short, long, default_value = "www", value_hint = clap::ValueHint::DirPath)]
    pub input: PathBuf,

    /// Output header path
    #[arg(short, long, default_value = "include/webpages.h", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Minify HTML/CSS/JS content before embedding
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_value_t = true, default_missing_value = "true", require_equals = false)]
    pub minify: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
