//! Validate config command implementation

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("  Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("  Log Level: {}", config.application.log_level);
        println!("  SVG directory: {}", config.paths.svg_dir);
        println!("  PNG directory: {}", config.paths.png_dir);
        println!("  File prefix: {}", config.output.file_prefix);
        println!("  Sources: {}", config.sources.len());
        for source in &config.sources {
            println!("    {} -> {}", source.file, source.token);
        }
        println!("  Widths: {:?}", config.flattened_widths());
        let chain: Vec<String> = config
            .rasterizers
            .iter()
            .map(|r| format!("{} ({})", r.kind, r.program()))
            .collect();
        println!("  Rasterizers: {}", chain.join(" -> "));
        println!("  Tool timeout: {}s", config.export.tool_timeout_secs);

        Ok(EXIT_OK)
    }
}
