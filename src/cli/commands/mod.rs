//! CLI command implementations
//!
//! Commands return the process exit code:
//! - 0: command completed (an export with failed pairs still completes)
//! - 2: configuration error
//! - 5: fatal error (output tree could not be prepared)
//! - 130: export interrupted by a signal

pub mod export;
pub mod init;
pub mod plan;
pub mod status;
pub mod validate;

use crate::config::BrandpackConfig;
use crate::domain::ids::{PixelWidth, SourceToken};
use clap::Args;
use std::str::FromStr;

/// Exit code for a completed command
pub const EXIT_OK: i32 = 0;
/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;
/// Exit code after SIGINT/SIGTERM
pub const EXIT_INTERRUPTED: i32 = 130;

/// Narrow a run to some sources and widths
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Only these source tokens (comma-separated, e.g. icon,wordmark)
    #[arg(long)]
    pub source: Option<String>,

    /// Only these widths (comma-separated, e.g. 32,64)
    #[arg(long)]
    pub width: Option<String>,
}

impl SelectionArgs {
    /// Restrict `config` to the selected sources and widths
    ///
    /// Categories left without widths are dropped. Order follows the
    /// configuration, not the command line.
    ///
    /// # Errors
    ///
    /// Returns a message if a value cannot be parsed or nothing is left.
    pub fn apply(&self, config: &mut BrandpackConfig) -> Result<(), String> {
        if let Some(raw) = &self.source {
            let tokens = split_list(raw)
                .map(SourceToken::from_str)
                .collect::<Result<Vec<_>, _>>()?;
            tracing::info!(sources = ?tokens, "Restricting sources from CLI");

            config
                .sources
                .retain(|entry| tokens.iter().any(|t| t.as_str() == entry.token));
            if config.sources.is_empty() {
                return Err(format!("No configured source matches --source {raw}"));
            }
        }

        if let Some(raw) = &self.width {
            let widths = split_list(raw)
                .map(PixelWidth::from_str)
                .collect::<Result<Vec<_>, _>>()?;
            tracing::info!(widths = ?widths, "Restricting widths from CLI");

            for category in &mut config.sizes {
                category
                    .widths
                    .retain(|w| widths.iter().any(|sel| sel.get() == *w));
            }
            config.sizes.retain(|category| !category.widths.is_empty());
            if config.sizes.is_empty() {
                return Err(format!("No configured width matches --width {raw}"));
            }
        }

        Ok(())
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
