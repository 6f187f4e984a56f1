//! Rasterizer abstraction
//!
//! Every external tool the exporter can drive implements [`Rasterizer`]. The
//! export coordinator only sees trait objects, so tests can substitute
//! in-process fakes for the real binaries.

use crate::domain::errors::RasterizeError;
use crate::domain::job::ConversionJob;
use async_trait::async_trait;

/// A provider able to turn one vector file into one PNG
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Stable identifier used in logs and summaries (e.g. `inkscape`)
    fn name(&self) -> &str;

    /// Human readable name used in user notices (e.g. `ImageMagick`)
    fn label(&self) -> &str;

    /// Render `job.source_path` to `job.output_path` at `job.width`
    ///
    /// # Errors
    ///
    /// Returns a [`RasterizeError`] when the tool cannot be launched, exits
    /// unsuccessfully or exceeds its time budget. `Ok(())` means the tool
    /// reported success; the output file itself is not inspected.
    async fn rasterize(&self, job: &ConversionJob) -> Result<(), RasterizeError>;
}
