//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for brandpack using clap.

pub mod commands;

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// brandpack - rasterize brand pack SVG logos to size-keyed PNGs
#[derive(Parser, Debug)]
#[command(name = "brandpack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (built-in defaults apply if the default file is absent)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "BRANDPACK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BRANDPACK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every source at every width
    Export(commands::export::ExportArgs),

    /// List the conversions an export would attempt
    Plan(commands::plan::PlanArgs),

    /// Show which expected PNGs already exist
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a configuration file with the default layout
    Init(commands::init::InitArgs),
}
