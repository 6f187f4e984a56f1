//! Status command implementation
//!
//! Reports which expected PNGs already exist under the output root.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config_or_default;
use crate::core::export::{take_inventory, ExportLayout};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let layout = match ExportLayout::from_config(&config) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let inventory = take_inventory(&layout);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&inventory)?);
            return Ok(EXIT_OK);
        }

        println!("PNG root: {}", layout.png_dir().display());
        println!();
        for source in &inventory {
            let source_note = if source.source_present {
                ""
            } else {
                " (source missing)"
            };
            println!(
                "  {:<12} {}/{} present{}",
                source.token,
                source.present_count(),
                source.outputs.len(),
                source_note
            );
            for output in source.outputs.iter().filter(|o| !o.present) {
                println!("      missing {}", output.path.display());
            }
        }

        let expected: usize = inventory.iter().map(|s| s.outputs.len()).sum();
        let present: usize = inventory.iter().map(|s| s.present_count()).sum();
        println!();
        println!("{present}/{expected} expected PNGs present");

        Ok(EXIT_OK)
    }
}
