//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured, human-readable routing and advice
    Text,
    /// JSON object with tier, specialist, contact and advisory
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => triage_domain::OutputFormat::Text,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for triage-assistant
#[derive(Parser, Debug)]
#[command(name = "triage-assistant")]
#[command(author, version, about = "Medical triage assistant - routes health concerns to the right care")]
#[command(long_about = r#"
Triage Assistant assesses a health concern and points you to the right care.

Each query goes through:
1. Emergency check: known emergency phrases route straight to emergency services
2. Severity assessment: emergency, urgent, moderate or mild
3. Routing: the matching specialist, or volunteers for mild concerns
4. Advice: general information from the language model

This tool does not diagnose and is not a substitute for emergency services.

The API key is read from GEMINI_API_KEY (a .env file is honoured).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./triage.toml       Project-level config
3. ~/.config/triage-assistant/config.toml   Global config

Example:
  triage-assistant "I've had a rash on my arm for two days"
  triage-assistant --output json "persistent cough and mild fever"
  triage-assistant --chat
"#)]
pub struct Cli {
    /// The health concern to triage (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use instead of automatic selection
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List generation-capable models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
