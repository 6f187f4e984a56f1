//! Inventory of expected outputs already on disk
//!
//! Read-only: nothing is created and no tool is launched.

use crate::core::export::layout::ExportLayout;
use serde::Serialize;
use std::path::PathBuf;

/// One expected PNG and whether it exists
#[derive(Debug, Clone, Serialize)]
pub struct OutputState {
    /// Width in pixels
    pub width: u32,

    /// Expected path
    pub path: PathBuf,

    /// Whether the file exists
    pub present: bool,
}

/// Expected outputs of one source
#[derive(Debug, Clone, Serialize)]
pub struct SourceInventory {
    /// Registry file name
    pub file: String,

    /// Output token
    pub token: String,

    /// Whether the vector source exists
    pub source_present: bool,

    /// Expected outputs in width order
    pub outputs: Vec<OutputState>,
}

impl SourceInventory {
    /// Number of expected outputs present on disk
    pub fn present_count(&self) -> usize {
        self.outputs.iter().filter(|o| o.present).count()
    }

    /// Whether every expected output exists
    pub fn is_complete(&self) -> bool {
        self.present_count() == self.outputs.len()
    }
}

/// Check every expected output of `layout`
pub fn take_inventory(layout: &ExportLayout) -> Vec<SourceInventory> {
    layout
        .sources()
        .iter()
        .map(|source| SourceInventory {
            file: source.file.clone(),
            token: source.token.to_string(),
            source_present: source.path.is_file(),
            outputs: layout
                .jobs_for(source)
                .map(|job| OutputState {
                    width: job.width.get(),
                    present: job.output_path.is_file(),
                    path: job.output_path,
                })
                .collect(),
        })
        .collect()
}
