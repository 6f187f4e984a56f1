//! Export coordinator - drives the conversion sweep
//!
//! For every registered source, in order, and every flattened width, in
//! order, the coordinator walks the rasterizer chain until one succeeds.
//! Per-pair failures are reported as notice lines and recorded in the
//! summary; only output directory setup can abort a run.

use crate::adapters::rasterizer::{create_rasterizer_chain, Rasterizer};
use crate::config::BrandpackConfig;
use crate::core::export::layout::ExportLayout;
use crate::core::export::summary::{
    AttemptFailure, ConversionOutcome, ConversionRecord, ExportSummary,
};
use crate::domain::job::ConversionJob;
use crate::domain::Result;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// First line of every run
pub const START_NOTICE: &str = "Generating PNG exports...";

/// Last line of every run, whatever happened in between
pub const CLOSING_NOTICE: &str =
    "PNG generation attempted. Some files may need manual conversion if tools are not installed.";

/// Export coordinator
pub struct ExportCoordinator {
    layout: ExportLayout,
    rasterizers: Vec<Arc<dyn Rasterizer + Send + Sync>>,
    dry_run: bool,
    shutdown_signal: Option<watch::Receiver<bool>>,
}

impl ExportCoordinator {
    /// Create a coordinator from configuration, with the configured tool chain
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be built from the configuration.
    pub fn new(config: &BrandpackConfig) -> Result<Self> {
        let layout = ExportLayout::from_config(config)?;
        let rasterizers = create_rasterizer_chain(config);

        tracing::debug!(
            sources = layout.sources().len(),
            widths = layout.widths().len(),
            rasterizers = rasterizers.len(),
            "Export coordinator created"
        );

        Ok(Self::with_rasterizers(layout, rasterizers).dry_run(config.export.dry_run))
    }

    /// Create a coordinator over an explicit layout and rasterizer chain
    pub fn with_rasterizers(
        layout: ExportLayout,
        rasterizers: Vec<Arc<dyn Rasterizer + Send + Sync>>,
    ) -> Self {
        Self {
            layout,
            rasterizers,
            dry_run: false,
            shutdown_signal: None,
        }
    }

    /// Enable or disable dry-run mode
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Stop between pairs once `signal` turns true
    pub fn with_shutdown_signal(mut self, signal: watch::Receiver<bool>) -> Self {
        self.shutdown_signal = Some(signal);
        self
    }

    /// The layout this coordinator exports
    pub fn layout(&self) -> &ExportLayout {
        &self.layout
    }

    /// Execute the export, writing notice lines to `out`
    ///
    /// 1. Ensures every `<width>px` directory exists (skipped in dry run)
    /// 2. For each source:
    ///    - Skips it with one notice if the vector file is missing
    ///    - For each width, tries the rasterizers in order
    /// 3. Prints the closing line and returns the summary
    ///
    /// # Errors
    ///
    /// Only directory setup failures are returned. Every conversion failure
    /// is absorbed into the summary.
    pub async fn execute_export<W: Write + Send>(&self, out: &mut W) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.total_sources = self.layout.sources().len();
        summary.dry_run = self.dry_run;

        tracing::info!(
            svg_dir = %self.layout.svg_dir().display(),
            png_dir = %self.layout.png_dir().display(),
            dry_run = self.dry_run,
            "Starting export process"
        );

        if self.dry_run {
            notice(out, "DRY RUN - no directories or files will be written");
        } else {
            let dirs = self.layout.ensure_output_dirs().await?;
            summary.directories_ready = dirs.len();
        }

        notice(out, START_NOTICE);

        'sources: for source in self.layout.sources() {
            if self.is_shutdown_requested() {
                summary.interrupted = true;
                break;
            }

            if !tokio::fs::try_exists(&source.path).await.unwrap_or(false) {
                tracing::warn!(
                    source = %source.file,
                    path = %source.path.display(),
                    "Source file not found, skipping all widths"
                );
                notice(out, format!("Skipping {} - file not found", source.file));
                summary.add_missing_source(source.file.as_str());
                continue;
            }

            for job in self.layout.jobs_for(source) {
                if self.is_shutdown_requested() {
                    summary.interrupted = true;
                    break 'sources;
                }

                let record = if self.dry_run {
                    notice(out, format!("Would create {}", job.output_path.display()));
                    ConversionRecord {
                        job,
                        outcome: ConversionOutcome::Planned,
                        failed_attempts: Vec::new(),
                    }
                } else {
                    let record = self.convert(job).await;
                    notice(out, self.describe(&record));
                    record
                };
                summary.add_record(record);
            }
        }

        if summary.interrupted {
            tracing::info!("Shutdown requested, stopping before the next conversion");
            notice(out, "Interrupted - remaining conversions were not attempted");
        }

        notice(out, "");
        notice(out, CLOSING_NOTICE);

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Walk the rasterizer chain for one pair
    async fn convert(&self, job: ConversionJob) -> ConversionRecord {
        let mut failed_attempts = Vec::new();

        for (position, rasterizer) in self.rasterizers.iter().enumerate() {
            match rasterizer.rasterize(&job).await {
                Ok(()) => {
                    tracing::info!(
                        token = %job.token,
                        width = job.width.get(),
                        rasterizer = rasterizer.name(),
                        output = %job.output_path.display(),
                        "Created PNG"
                    );
                    return ConversionRecord {
                        job,
                        outcome: ConversionOutcome::Created {
                            rasterizer: rasterizer.name().to_string(),
                            fallback: position > 0,
                        },
                        failed_attempts,
                    };
                }
                Err(e) => {
                    if e.is_unavailable() {
                        tracing::debug!(
                            token = %job.token,
                            width = job.width.get(),
                            rasterizer = rasterizer.name(),
                            error = %e,
                            "Rasterizer not available"
                        );
                    } else {
                        tracing::warn!(
                            token = %job.token,
                            width = job.width.get(),
                            rasterizer = rasterizer.name(),
                            kind = e.kind(),
                            error = %e,
                            "Rasterizer failed"
                        );
                    }
                    failed_attempts.push(AttemptFailure::new(rasterizer.name(), &e));
                }
            }
        }

        tracing::warn!(
            source = %job.source_file,
            width = job.width.get(),
            attempts = failed_attempts.len(),
            "All rasterizers failed"
        );

        ConversionRecord {
            job,
            outcome: ConversionOutcome::Failed,
            failed_attempts,
        }
    }

    /// Notice line for a finished pair
    fn describe(&self, record: &ConversionRecord) -> String {
        match &record.outcome {
            ConversionOutcome::Created {
                fallback: false, ..
            } => format!("Created {}", record.job.output_file_name()),
            ConversionOutcome::Created {
                rasterizer,
                fallback: true,
            } => {
                let label = self
                    .rasterizers
                    .iter()
                    .find(|r| r.name() == rasterizer)
                    .map_or(rasterizer.as_str(), |r| r.label());
                format!("Created {} (with {})", record.job.output_file_name(), label)
            }
            ConversionOutcome::Failed => format!(
                "Could not convert {} to {}px PNG - tools not available",
                record.job.source_file, record.job.width
            ),
            ConversionOutcome::Planned => {
                format!("Would create {}", record.job.output_path.display())
            }
        }
    }

    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_signal
            .as_ref()
            .is_some_and(|signal| *signal.borrow())
    }
}

/// Write one notice line; a broken stdout must not abort the sweep
fn notice<W: Write>(out: &mut W, line: impl Display) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::warn!(error = %e, "Failed to write notice");
    }
}
