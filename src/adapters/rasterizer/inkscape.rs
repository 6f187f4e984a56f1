//! Inkscape command line export

use super::command::run_tool;
use super::traits::Rasterizer;
use crate::domain::errors::RasterizeError;
use crate::domain::job::ConversionJob;
use async_trait::async_trait;
use std::ffi::OsString;
use std::time::Duration;

/// Drives `inkscape <svg> --export-type=png ...`
#[derive(Debug, Clone)]
pub struct InkscapeRasterizer {
    program: String,
    timeout: Duration,
}

impl InkscapeRasterizer {
    /// Create a rasterizer launching `program`
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Arguments for one export, transparent background included
    pub fn args(job: &ConversionJob) -> Vec<OsString> {
        let mut filename = OsString::from("--export-filename=");
        filename.push(job.output_path.as_os_str());

        vec![
            job.source_path.clone().into_os_string(),
            format!("--export-width={}", job.width).into(),
            "--export-type=png".into(),
            "--export-background-opacity=0".into(),
            filename,
        ]
    }
}

#[async_trait]
impl Rasterizer for InkscapeRasterizer {
    fn name(&self) -> &str {
        "inkscape"
    }

    fn label(&self) -> &str {
        "Inkscape"
    }

    async fn rasterize(&self, job: &ConversionJob) -> Result<(), RasterizeError> {
        run_tool(&self.program, &Self::args(job), self.timeout).await
    }
}
