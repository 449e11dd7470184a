use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "jsoncmp",
    about = "jsoncmp — structural comparison of JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// When to use colors (defaults to the configured mode)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents
    Diff(DiffArgs),
    /// Pretty-print a JSON document
    Format(FormatArgs),
    /// Show the built-in example documents
    Sample(SampleArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// First document: a file path, `-` for stdin, or JSON text with --literal
    pub first: String,
    /// Second document: a file path, `-` for stdin, or JSON text with --literal
    pub second: String,
    /// Treat the arguments as JSON text instead of paths
    #[arg(short, long)]
    pub literal: bool,
    /// Compare in the opposite direction
    #[arg(long)]
    pub swap: bool,
    /// Also show a line diff of the pretty-printed documents
    #[arg(long)]
    pub text: bool,
    /// Context lines for --text (defaults to the configured value)
    #[arg(short = 'U', long)]
    pub context: Option<usize>,
    /// Print nothing; report the result through the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct FormatArgs {
    /// A file path, `-` for stdin, or JSON text with --literal
    pub input: String,
    #[arg(short, long)]
    pub literal: bool,
}

#[derive(Args)]
pub struct SampleArgs {}

#[derive(Args)]
pub struct ConfigArgs {}
