//! Core business logic for brandpack.
//!
//! # Modules
//!
//! - [`export`] - Layout, conversion sweep, summary and inventory
//!
//! # Export Workflow
//!
//! 1. **Setup**: create every `<width>px` directory under the PNG root
//! 2. **Enumerate**: sources in registry order, widths in catalog order
//! 3. **Convert**: try each rasterizer in order until one succeeds
//! 4. **Report**: one notice line per outcome, then the closing line
//!
//! # Example
//!
//! ```rust,no_run
//! use brandpack::config::BrandpackConfig;
//! use brandpack::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BrandpackConfig::default();
//! let coordinator = ExportCoordinator::new(&config)?;
//!
//! let summary = coordinator.execute_export(&mut std::io::stdout()).await?;
//!
//! println!("Created: {}", summary.total_created());
//! println!("Failed: {}", summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod export;
