//! Plan command implementation
//!
//! Lists every (source, width) conversion the export would attempt, in
//! processing order, without touching the filesystem.

use super::{SelectionArgs, EXIT_CONFIG, EXIT_OK};
use crate::config::load_config_or_default;
use crate::core::export::ExportLayout;
use clap::Args;

/// Arguments for the plan command
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the job list as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if let Err(e) = self.selection.apply(&mut config) {
            eprintln!("{e}");
            return Ok(EXIT_CONFIG);
        }

        let layout = match ExportLayout::from_config(&config) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };
        let jobs = layout.jobs();
        tracing::debug!(count = jobs.len(), "Planned conversions");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&jobs)?);
            return Ok(EXIT_OK);
        }

        for job in &jobs {
            println!(
                "{} -> {}",
                job.source_path.display(),
                job.output_path.display()
            );
        }
        println!();
        println!(
            "{} conversions ({} sources x {} widths)",
            jobs.len(),
            layout.sources().len(),
            layout.widths().len()
        );

        Ok(EXIT_OK)
    }
}
