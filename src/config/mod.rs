//! Configuration management for brandpack.
//!
//! # Overview
//!
//! brandpack reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `BRANDPACK_<SECTION>_<KEY>` overrides
//! - Defaults reproducing the Synced Sports brand pack layout
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use brandpack::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("brandpack.toml")?;
//! println!("Sources: {}", config.sources.len());
//! println!("Widths: {:?}", config.flattened_widths());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`PathsConfig`] - SVG input and PNG output roots
//! - [`OutputConfig`] - Output file prefix
//! - [`SourceEntry`] - Source-file registry (`[[sources]]`)
//! - [`SizeCategory`] - Size catalog (`[[sizes]]`)
//! - [`RasterizerConfig`] - Ordered tool chain (`[[rasterizers]]`)
//! - [`ExportConfig`] - Dry run and tool timeout
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [paths]
//! svg_dir = "SyncedSports-BrandPack/Logos/SVG"
//! png_dir = "${BRAND_OUT}/PNG"
//!
//! [[sources]]
//! file = "synced-sports-icon.svg"
//! token = "icon"
//!
//! [[sizes]]
//! label = "small"
//! widths = [32, 64]
//!
//! [[rasterizers]]
//! kind = "inkscape"
//!
//! [[rasterizers]]
//! kind = "imagemagick"
//! density = 300
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{
    ApplicationConfig, BrandpackConfig, ExportConfig, LoggingConfig, OutputConfig, PathsConfig,
    RasterizerConfig, RasterizerKind, SizeCategory, SourceEntry,
};
