//! Configuration schema types
//!
//! Every section has defaults that reproduce the Synced Sports brand pack
//! layout, so an empty TOML file (or no file at all) is a complete
//! configuration.

use crate::domain::ids::{PixelWidth, SourceToken};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main brandpack configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandpackConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input and output directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output naming
    #[serde(default)]
    pub output: OutputConfig,

    /// Source-file registry, in processing order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceEntry>,

    /// Size catalog, in processing order
    #[serde(default = "default_sizes")]
    pub sizes: Vec<SizeCategory>,

    /// Rasterizer chain, tried in order for every pair
    #[serde(default = "default_rasterizers")]
    pub rasterizers: Vec<RasterizerConfig>,

    /// Export run settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for BrandpackConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
            sources: default_sources(),
            sizes: default_sizes(),
            rasterizers: default_rasterizers(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BrandpackConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.paths.validate()?;
        self.output.validate()?;

        if self.sources.is_empty() {
            return Err("At least one [[sources]] entry is required".to_string());
        }
        let mut tokens = HashSet::new();
        for source in &self.sources {
            source.validate()?;
            if !tokens.insert(source.token.as_str()) {
                return Err(format!(
                    "Duplicate source token '{}'. Each token must be unique",
                    source.token
                ));
            }
        }

        if self.sizes.is_empty() {
            return Err("At least one [[sizes]] category is required".to_string());
        }
        for category in &self.sizes {
            category.validate()?;
        }

        if self.rasterizers.is_empty() {
            return Err("At least one [[rasterizers]] entry is required".to_string());
        }
        for rasterizer in &self.rasterizers {
            rasterizer.validate()?;
        }

        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// All widths of all categories, flattened in declaration order
    ///
    /// Duplicates across categories are kept.
    pub fn flattened_widths(&self) -> Vec<u32> {
        self.sizes
            .iter()
            .flat_map(|category| category.widths.iter().copied())
            .collect()
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input and output directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Directory holding the vector sources
    #[serde(default = "default_svg_dir")]
    pub svg_dir: String,

    /// Root under which `<width>px` directories are created
    #[serde(default = "default_png_dir")]
    pub png_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            svg_dir: default_svg_dir(),
            png_dir: default_png_dir(),
        }
    }
}

impl PathsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.svg_dir.trim().is_empty() {
            return Err("paths.svg_dir cannot be empty".to_string());
        }
        if self.png_dir.trim().is_empty() {
            return Err("paths.png_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Output naming configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Prefix of every PNG name: `<prefix>-<token>-<width>.png`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file_prefix.trim().is_empty() {
            return Err("output.file_prefix cannot be empty".to_string());
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(format!(
                "output.file_prefix '{}' must not contain path separators",
                self.file_prefix
            ));
        }
        Ok(())
    }
}

/// One entry of the source-file registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceEntry {
    /// Vector file name relative to `paths.svg_dir`
    pub file: String,

    /// Short token used in output names
    pub token: String,
}

impl SourceEntry {
    /// Convenience constructor
    pub fn new(file: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            token: token.into(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.file.trim().is_empty() {
            return Err("sources.file cannot be empty".to_string());
        }
        SourceToken::new(self.token.as_str()).map_err(|e| format!("sources.token: {e}"))?;
        Ok(())
    }
}

/// A labelled group of widths
///
/// The label only documents the configuration; it never appears in output
/// paths or notices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeCategory {
    /// Category label, e.g. `small`
    pub label: String,

    /// Widths in pixels, in processing order
    pub widths: Vec<u32>,
}

impl SizeCategory {
    /// Convenience constructor
    pub fn new(label: impl Into<String>, widths: Vec<u32>) -> Self {
        Self {
            label: label.into(),
            widths,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.widths.is_empty() {
            return Err(format!("sizes '{}' must list at least one width", self.label));
        }
        for width in &self.widths {
            PixelWidth::new(*width).map_err(|e| format!("sizes '{}': {e}", self.label))?;
        }
        Ok(())
    }
}

/// Supported external rasterizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterizerKind {
    /// Inkscape command line export
    Inkscape,
    /// ImageMagick `convert`
    ImageMagick,
}

impl RasterizerKind {
    /// Program launched when the config does not name one
    pub fn default_program(self) -> &'static str {
        match self {
            RasterizerKind::Inkscape => "inkscape",
            RasterizerKind::ImageMagick => "magick",
        }
    }

    /// Human readable name used in notices
    pub fn display_name(self) -> &'static str {
        match self {
            RasterizerKind::Inkscape => "Inkscape",
            RasterizerKind::ImageMagick => "ImageMagick",
        }
    }
}

impl std::fmt::Display for RasterizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerKind::Inkscape => write!(f, "inkscape"),
            RasterizerKind::ImageMagick => write!(f, "imagemagick"),
        }
    }
}

/// One link of the rasterizer chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RasterizerConfig {
    /// Which argument convention to use
    pub kind: RasterizerKind,

    /// Executable to launch (name on PATH or absolute path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Rendering density in DPI (ImageMagick only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
}

impl RasterizerConfig {
    /// Config for `kind` with all defaults
    pub fn new(kind: RasterizerKind) -> Self {
        Self {
            kind,
            program: None,
            density: None,
        }
    }

    /// Overrides the launched program
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Program that will be launched
    pub fn program(&self) -> &str {
        self.program
            .as_deref()
            .unwrap_or_else(|| self.kind.default_program())
    }

    /// Density with the default applied
    pub fn density(&self) -> u32 {
        self.density.unwrap_or(DEFAULT_DENSITY)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(program) = &self.program {
            if program.trim().is_empty() {
                return Err(format!("rasterizers '{}': program cannot be empty", self.kind));
            }
        }
        if let Some(density) = self.density {
            if density == 0 {
                return Err(format!("rasterizers '{}': density must be > 0", self.kind));
            }
            if self.kind != RasterizerKind::ImageMagick {
                return Err(format!(
                    "rasterizers '{}': density is only supported for imagemagick",
                    self.kind
                ));
            }
        }
        Ok(())
    }
}

/// Export run configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// List targets without creating directories or launching tools
    #[serde(default)]
    pub dry_run: bool,

    /// Seconds before a single tool invocation is killed
    #[serde(default = "default_tool_timeout_secs")]
    pub tool_timeout_secs: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            tool_timeout_secs: default_tool_timeout_secs(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tool_timeout_secs == 0 {
            return Err("export.tool_timeout_secs must be > 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

/// ImageMagick rendering density used unless configured
pub const DEFAULT_DENSITY: u32 = 300;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_svg_dir() -> String {
    "SyncedSports-BrandPack/Logos/SVG".to_string()
}

fn default_png_dir() -> String {
    "SyncedSports-BrandPack/Logos/PNG".to_string()
}

fn default_file_prefix() -> String {
    "synced-sports".to_string()
}

fn default_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry::new("synced-sports-primary.svg", "primary"),
        SourceEntry::new("synced-sports-horizontal.svg", "horizontal"),
        SourceEntry::new("synced-sports-icon.svg", "icon"),
        SourceEntry::new("synced-sports-waves-only.svg", "waves"),
        SourceEntry::new("synced-sports-black.svg", "black"),
        SourceEntry::new("synced-sports-white.svg", "white"),
        SourceEntry::new("synced-sports-wordmark.svg", "wordmark"),
    ]
}

fn default_sizes() -> Vec<SizeCategory> {
    vec![
        SizeCategory::new("small", vec![32, 64]),
        SizeCategory::new("medium", vec![128, 256]),
        SizeCategory::new("large", vec![512, 1024]),
    ]
}

fn default_rasterizers() -> Vec<RasterizerConfig> {
    vec![
        RasterizerConfig::new(RasterizerKind::Inkscape),
        RasterizerConfig::new(RasterizerKind::ImageMagick),
    ]
}

fn default_tool_timeout_secs() -> u64 {
    120
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
