//! External system integrations for brandpack.
//!
//! - [`rasterizer`] - Command-line SVG to PNG tools (Inkscape, ImageMagick)
//!
//! # Design Pattern
//!
//! Adapters isolate the external binaries behind the
//! [`rasterizer::Rasterizer`] trait so the export coordinator can be tested
//! with in-process implementations:
//!
//! ```rust
//! use brandpack::adapters::rasterizer::{create_rasterizer, Rasterizer};
//! use brandpack::config::{RasterizerConfig, RasterizerKind};
//! use std::time::Duration;
//!
//! let config = RasterizerConfig::new(RasterizerKind::ImageMagick).with_program("convert");
//! let rasterizer = create_rasterizer(&config, Duration::from_secs(60));
//! assert_eq!(rasterizer.label(), "ImageMagick");
//! ```

pub mod rasterizer;
