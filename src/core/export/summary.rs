//! Export summary and reporting
//!
//! Structures for tracking the outcome of every (source, width) pair. The
//! CLI exit status never depends on these counts; they exist for logging,
//! the optional JSON report and tests.

use crate::domain::errors::RasterizeError;
use crate::domain::job::ConversionJob;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;

/// One failed attempt inside a provider chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptFailure {
    /// Rasterizer name (e.g. `inkscape`)
    pub rasterizer: String,

    /// Failure class: unavailable, failed, timeout or io
    pub kind: String,

    /// Error message
    pub message: String,
}

impl AttemptFailure {
    /// Record a failed attempt of `rasterizer`
    pub fn new(rasterizer: impl Into<String>, error: &RasterizeError) -> Self {
        Self {
            rasterizer: rasterizer.into(),
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Final state of one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// A rasterizer reported success
    Created {
        /// Name of the rasterizer that succeeded
        rasterizer: String,
        /// Whether an earlier rasterizer in the chain failed first
        fallback: bool,
    },
    /// Every rasterizer failed
    Failed,
    /// Dry run: nothing was launched
    Planned,
}

/// Outcome of one (source, width) pair together with its failed attempts
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    /// The pair
    pub job: ConversionJob,

    /// What happened
    pub outcome: ConversionOutcome,

    /// Attempts that failed before the outcome was reached
    pub failed_attempts: Vec<AttemptFailure>,
}

impl ConversionRecord {
    /// Whether a PNG was produced
    pub fn is_created(&self) -> bool {
        matches!(self.outcome, ConversionOutcome::Created { .. })
    }
}

/// Summary of an export run
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Sources in the registry
    pub total_sources: usize,

    /// Registry file names whose vector file was absent
    pub missing_sources: Vec<String>,

    /// Pairs for which conversion was attempted (or planned)
    pub total_pairs: usize,

    /// Pairs converted by the first rasterizer
    pub created: usize,

    /// Pairs converted by a later rasterizer
    pub created_with_fallback: usize,

    /// Pairs where every rasterizer failed
    pub failed: usize,

    /// Output directories ensured during setup
    pub directories_ready: usize,

    /// Dry run: no tools launched, no directories created
    pub dry_run: bool,

    /// Stopped early on a shutdown signal
    pub interrupted: bool,

    /// Duration of the run
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,

    /// Per-pair records in processing order
    pub records: Vec<ConversionRecord>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            total_sources: 0,
            missing_sources: Vec::new(),
            total_pairs: 0,
            created: 0,
            created_with_fallback: 0,
            failed: 0,
            directories_ready: 0,
            dry_run: false,
            interrupted: false,
            duration: Duration::from_secs(0),
            records: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a missing source
    pub fn add_missing_source(&mut self, file: impl Into<String>) {
        self.missing_sources.push(file.into());
    }

    /// Record the outcome of one pair and update the counters
    pub fn add_record(&mut self, record: ConversionRecord) {
        self.total_pairs += 1;
        match &record.outcome {
            ConversionOutcome::Created { fallback: false, .. } => self.created += 1,
            ConversionOutcome::Created { fallback: true, .. } => self.created_with_fallback += 1,
            ConversionOutcome::Failed => self.failed += 1,
            ConversionOutcome::Planned => {}
        }
        self.records.push(record);
    }

    /// Total PNGs produced
    pub fn total_created(&self) -> usize {
        self.created + self.created_with_fallback
    }

    /// Whether every registered source existed and every pair was converted
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.missing_sources.is_empty() && self.failed == 0
    }

    /// Share of attempted pairs that produced a PNG, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_pairs == 0 {
            return 100.0;
        }
        (self.total_created() as f64 / self.total_pairs as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_sources = self.total_sources,
            missing_sources = self.missing_sources.len(),
            total_pairs = self.total_pairs,
            created = self.created,
            created_with_fallback = self.created_with_fallback,
            failed = self.failed,
            dry_run = self.dry_run,
            interrupted = self.interrupted,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export finished"
        );

        for record in self.records.iter().filter(|r| !r.is_created()) {
            for attempt in &record.failed_attempts {
                tracing::debug!(
                    output = %record.job.output_path.display(),
                    rasterizer = %attempt.rasterizer,
                    kind = %attempt.kind,
                    message = %attempt.message,
                    "Failed attempt"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}
