//! External rasterizer integrations
//!
//! - [`traits`] - The [`Rasterizer`] trait the coordinator depends on
//! - [`inkscape`] - Primary provider
//! - [`imagemagick`] - Fallback provider
//! - [`factory`] - Builds the ordered chain from configuration

pub mod command;
pub mod factory;
pub mod imagemagick;
pub mod inkscape;
pub mod traits;

pub use crate::domain::errors::RasterizeError;
pub use factory::{create_rasterizer, create_rasterizer_chain};
pub use imagemagick::ImageMagickRasterizer;
pub use inkscape::InkscapeRasterizer;
pub use traits::Rasterizer;
