//! ImageMagick `convert` fallback

use super::command::run_tool;
use super::traits::Rasterizer;
use crate::domain::errors::RasterizeError;
use crate::domain::job::ConversionJob;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

/// Drives `magick convert -background none -density <dpi> -resize WxW <svg> <png>`
#[derive(Debug, Clone)]
pub struct ImageMagickRasterizer {
    program: String,
    density: u32,
    timeout: Duration,
}

impl ImageMagickRasterizer {
    /// Create a rasterizer launching `program` at `density` DPI
    pub fn new(program: impl Into<String>, density: u32, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            density,
            timeout,
        }
    }

    /// Arguments for one export
    ///
    /// ImageMagick 7 takes `convert` as a subcommand of `magick`; the legacy
    /// ImageMagick 6 binary is itself named `convert` and takes none.
    pub fn args(&self, job: &ConversionJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(9);
        if !self.is_legacy_convert() {
            args.push("convert".into());
        }
        args.extend([
            "-background".into(),
            "none".into(),
            "-density".into(),
            self.density.to_string().into(),
            "-resize".into(),
            job.width.resize_spec().into(),
            job.source_path.clone().into_os_string(),
            job.output_path.clone().into_os_string(),
        ]);
        args
    }

    fn is_legacy_convert(&self) -> bool {
        Path::new(&self.program)
            .file_stem()
            .is_some_and(|stem| stem == "convert")
    }
}

#[async_trait]
impl Rasterizer for ImageMagickRasterizer {
    fn name(&self) -> &str {
        "imagemagick"
    }

    fn label(&self) -> &str {
        "ImageMagick"
    }

    async fn rasterize(&self, job: &ConversionJob) -> Result<(), RasterizeError> {
        run_tool(&self.program, &self.args(job), self.timeout).await
    }
}
