//! A single (source file, width) conversion unit

use super::ids::{PixelWidth, SourceToken};
use serde::Serialize;
use std::path::PathBuf;

/// One vector source resolved against the input directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// File name as listed in the registry, e.g. `synced-sports-icon.svg`
    pub file: String,

    /// Token embedded in output names
    pub token: SourceToken,

    /// Full path of the vector file
    pub path: PathBuf,
}

/// A fully resolved conversion target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionJob {
    /// Registry file name of the source
    pub source_file: String,

    /// Full path of the vector file
    pub source_path: PathBuf,

    /// Token used in the output file name
    pub token: SourceToken,

    /// Requested raster width
    pub width: PixelWidth,

    /// Where the PNG is written
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// File name component of the output path
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
