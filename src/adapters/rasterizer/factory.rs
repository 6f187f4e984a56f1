//! Rasterizer chain factory
//!
//! Builds the ordered provider list the export coordinator walks for every
//! (source, width) pair.

use super::imagemagick::ImageMagickRasterizer;
use super::inkscape::InkscapeRasterizer;
use super::traits::Rasterizer;
use crate::config::schema::{BrandpackConfig, RasterizerConfig, RasterizerKind};
use std::sync::Arc;
use std::time::Duration;

/// Create one rasterizer from its configuration
pub fn create_rasterizer(
    config: &RasterizerConfig,
    timeout: Duration,
) -> Arc<dyn Rasterizer + Send + Sync> {
    match config.kind {
        RasterizerKind::Inkscape => {
            tracing::debug!(program = %config.program(), "Creating Inkscape rasterizer");
            Arc::new(InkscapeRasterizer::new(config.program(), timeout))
                as Arc<dyn Rasterizer + Send + Sync>
        }
        RasterizerKind::ImageMagick => {
            tracing::debug!(
                program = %config.program(),
                density = config.density(),
                "Creating ImageMagick rasterizer"
            );
            Arc::new(ImageMagickRasterizer::new(
                config.program(),
                config.density(),
                timeout,
            )) as Arc<dyn Rasterizer + Send + Sync>
        }
    }
}

/// Create the full chain, preserving configuration order
pub fn create_rasterizer_chain(config: &BrandpackConfig) -> Vec<Arc<dyn Rasterizer + Send + Sync>> {
    let timeout = Duration::from_secs(config.export.tool_timeout_secs);
    config
        .rasterizers
        .iter()
        .map(|r| create_rasterizer(r, timeout))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let chain = create_rasterizer_chain(&BrandpackConfig::default());
        let names: Vec<&str> = chain.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["inkscape", "imagemagick"]);
    }

    #[test]
    fn test_chain_follows_config_order() {
        let mut config = BrandpackConfig::default();
        config.rasterizers.reverse();
        let chain = create_rasterizer_chain(&config);
        assert_eq!(chain[0].label(), "ImageMagick");
        assert_eq!(chain[1].label(), "Inkscape");
    }
}
