//! Domain models and types for brandpack.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed values** ([`SourceToken`], [`PixelWidth`])
//! - **Conversion units** ([`SourceFile`], [`ConversionJob`])
//! - **Error types** ([`BrandpackError`], [`RasterizeError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, BrandpackError>`]:
//!
//! ```rust
//! use brandpack::domain::{PixelWidth, Result, BrandpackError};
//!
//! fn parse(raw: u32) -> Result<PixelWidth> {
//!     PixelWidth::new(raw).map_err(BrandpackError::Validation)
//! }
//! # assert!(parse(64).is_ok());
//! ```

pub mod errors;
pub mod ids;
pub mod job;
pub mod result;

pub use errors::{BrandpackError, RasterizeError};
pub use ids::{PixelWidth, SourceToken};
pub use job::{ConversionJob, SourceFile};
pub use result::Result;
