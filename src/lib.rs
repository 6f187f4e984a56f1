// Brandpack - Brand Pack Logo Rasterizer
// Copyright (c) 2025 Brandpack Contributors
// Licensed under the MIT License

//! # Brandpack - Brand Pack Logo Rasterizer
//!
//! Brandpack converts a fixed registry of SVG logos into PNG files at a
//! fixed set of widths, driving external command-line rasterizers.
//!
//! ## Overview
//!
//! For every (source, width) pair the export:
//! - checks that the vector source exists (once per source)
//! - runs the rasterizer chain (Inkscape first, ImageMagick as fallback)
//! - prints one notice describing the outcome
//!
//! Outputs land at `<png_dir>/<width>px/<prefix>-<token>-<width>.png`.
//! A failed pair never stops the run.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export planning, coordination and reporting
//! - [`adapters`] - External rasterizer processes
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brandpack::config::load_config_or_default;
//! use brandpack::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("brandpack.toml")?;
//!     let coordinator = ExportCoordinator::new(&config)?;
//!
//!     let summary = coordinator.execute_export(&mut std::io::stdout()).await?;
//!
//!     println!("Created {} of {} PNGs", summary.total_created(), summary.total_pairs);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Setup and configuration failures use [`domain::BrandpackError`]. A
//! single rasterizer attempt fails with [`domain::RasterizeError`], which
//! the coordinator records and moves past.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
