//! Output layout: path derivation and directory setup
//!
//! The layout turns the configuration tables into resolved [`SourceFile`]s
//! and [`ConversionJob`]s. It is the only place that knows the
//! `<png_dir>/<width>px/<prefix>-<token>-<width>.png` naming scheme.

use crate::config::BrandpackConfig;
use crate::domain::ids::{PixelWidth, SourceToken};
use crate::domain::job::{ConversionJob, SourceFile};
use crate::domain::{BrandpackError, Result};
use std::path::{Path, PathBuf};

/// Resolved input/output layout for one export run
#[derive(Debug, Clone)]
pub struct ExportLayout {
    svg_dir: PathBuf,
    png_dir: PathBuf,
    file_prefix: String,
    sources: Vec<SourceFile>,
    widths: Vec<PixelWidth>,
}

impl ExportLayout {
    /// Build a layout from explicit parts
    ///
    /// `sources` are `(file name, token)` pairs in processing order; `widths`
    /// is the flattened width list, duplicates included.
    pub fn new(
        svg_dir: impl Into<PathBuf>,
        png_dir: impl Into<PathBuf>,
        file_prefix: impl Into<String>,
        sources: Vec<(String, SourceToken)>,
        widths: Vec<PixelWidth>,
    ) -> Self {
        let svg_dir = svg_dir.into();
        let sources = sources
            .into_iter()
            .map(|(file, token)| SourceFile {
                path: svg_dir.join(&file),
                file,
                token,
            })
            .collect();

        Self {
            svg_dir,
            png_dir: png_dir.into(),
            file_prefix: file_prefix.into(),
            sources,
            widths,
        }
    }

    /// Build the layout described by a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a validation error if a token or width is malformed.
    pub fn from_config(config: &BrandpackConfig) -> Result<Self> {
        let sources = config
            .sources
            .iter()
            .map(|entry| {
                SourceToken::new(entry.token.as_str())
                    .map(|token| (entry.file.clone(), token))
                    .map_err(BrandpackError::Validation)
            })
            .collect::<Result<Vec<_>>>()?;

        let widths = config
            .flattened_widths()
            .into_iter()
            .map(|w| PixelWidth::new(w).map_err(BrandpackError::Validation))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(
            &config.paths.svg_dir,
            &config.paths.png_dir,
            config.output.file_prefix.as_str(),
            sources,
            widths,
        ))
    }

    /// Directory holding the vector sources
    pub fn svg_dir(&self) -> &Path {
        &self.svg_dir
    }

    /// Root of the PNG tree
    pub fn png_dir(&self) -> &Path {
        &self.png_dir
    }

    /// Sources in processing order
    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// Flattened widths in processing order
    pub fn widths(&self) -> &[PixelWidth] {
        &self.widths
    }

    /// `<png_dir>/<width>px`
    pub fn width_dir(&self, width: PixelWidth) -> PathBuf {
        self.png_dir.join(width.dir_name())
    }

    /// `<png_dir>/<width>px/<prefix>-<token>-<width>.png`
    pub fn output_path(&self, token: &SourceToken, width: PixelWidth) -> PathBuf {
        self.width_dir(width)
            .join(format!("{}-{}-{}.png", self.file_prefix, token, width))
    }

    /// The conversion job for one (source, width) pair
    pub fn job(&self, source: &SourceFile, width: PixelWidth) -> ConversionJob {
        ConversionJob {
            source_file: source.file.clone(),
            source_path: source.path.clone(),
            token: source.token.clone(),
            width,
            output_path: self.output_path(&source.token, width),
        }
    }

    /// Jobs for every width of one source, in width order
    pub fn jobs_for<'a>(
        &'a self,
        source: &'a SourceFile,
    ) -> impl Iterator<Item = ConversionJob> + 'a {
        self.widths.iter().map(move |&width| self.job(source, width))
    }

    /// Every (source, width) pair, sources outermost
    pub fn jobs(&self) -> Vec<ConversionJob> {
        self.sources
            .iter()
            .flat_map(|source| self.jobs_for(source))
            .collect()
    }

    /// Create every `<width>px` directory
    ///
    /// Existing directories are fine. Returns the directories in width order.
    ///
    /// # Errors
    ///
    /// Returns [`BrandpackError::Setup`] for the first directory that cannot
    /// be created; nothing after it is attempted.
    pub async fn ensure_output_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::with_capacity(self.widths.len());
        for &width in &self.widths {
            let dir = self.width_dir(width);
            tokio::fs::create_dir_all(&dir).await.map_err(|e| {
                BrandpackError::Setup(format!(
                    "Failed to create output directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            tracing::debug!(dir = %dir.display(), "Output directory ready");
            dirs.push(dir);
        }
        Ok(dirs)
    }
}
