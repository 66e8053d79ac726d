//! Command-line interface definitions.

pub mod analyze;
pub mod check;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hedgebook - paired surebet tracking with AI slip extraction.
#[derive(Parser, Debug)]
#[command(name = "hedgebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (foreground)
    Serve(ServeArgs),

    /// Analyze one slip image and print the extraction
    Analyze(AnalyzeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Override the bind address from the config file
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the slip screenshot (PNG or JPEG)
    pub image: PathBuf,

    /// Print the extraction as plain text instead of JSON
    #[arg(long)]
    pub raw: bool,
}

/// Subcommands for `hedgebook check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}
