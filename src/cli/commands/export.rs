//! Export command implementation
//!
//! Runs the conversion sweep. Notices go to stdout; everything else is
//! logged through tracing on stderr.

use super::{SelectionArgs, EXIT_CONFIG, EXIT_FATAL, EXIT_INTERRUPTED, EXIT_OK};
use crate::config::load_config_or_default;
use crate::core::export::ExportCoordinator;
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Print the targets without creating directories or launching tools
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Override the SVG source directory
    #[arg(long, value_name = "DIR")]
    pub svg_dir: Option<String>,

    /// Override the PNG output root
    #[arg(long, value_name = "DIR")]
    pub png_dir: Option<String>,

    /// Write the run summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if let Some(dir) = &self.svg_dir {
            tracing::info!(svg_dir = %dir, "Overriding SVG directory from CLI");
            config.paths.svg_dir = dir.clone();
        }
        if let Some(dir) = &self.png_dir {
            tracing::info!(png_dir = %dir, "Overriding PNG directory from CLI");
            config.paths.png_dir = dir.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }

        if let Err(e) = self.selection.apply(&mut config) {
            tracing::error!(error = %e, "Invalid selection");
            eprintln!("{e}");
            return Ok(EXIT_CONFIG);
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        let coordinator = match ExportCoordinator::new(&config) {
            Ok(c) => c.with_shutdown_signal(shutdown_signal),
            Err(e) => {
                log_error_with_context!(&e, "Failed to create export coordinator");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let summary = {
            let mut stdout = std::io::stdout();
            match coordinator.execute_export(&mut stdout).await {
                Ok(s) => s,
                Err(e) => {
                    log_error_with_context!(&e, "Export aborted during setup");
                    eprintln!("Export failed: {e}");
                    return Ok(EXIT_FATAL);
                }
            }
        };

        if let Some(path) = &self.report {
            let json = serde_json::to_string_pretty(&summary)?;
            if let Err(e) = tokio::fs::write(path, json).await {
                tracing::error!(path = %path.display(), error = %e, "Failed to write report");
                eprintln!("Failed to write report {}: {e}", path.display());
                return Ok(EXIT_FATAL);
            }
            tracing::info!(path = %path.display(), "Summary report written");
        }

        if summary.interrupted {
            tracing::info!("Export interrupted by user signal");
            return Ok(EXIT_INTERRUPTED);
        }

        Ok(EXIT_OK)
    }
}
