//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Write every section with comments instead of a minimal file
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing brandpack configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your paths and sources", self.output);
                println!("  2. Install Inkscape (or ImageMagick as a fallback)");
                println!("  3. Validate configuration: brandpack validate-config");
                println!("  4. Preview the targets: brandpack plan");
                println!("  5. Run export: brandpack export");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(output = %self.output, error = %e, "Failed to write configuration file");
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Brandpack Configuration File
# Sources, sizes and rasterizers default to the Synced Sports brand pack.

[paths]
svg_dir = "SyncedSports-BrandPack/Logos/SVG"
png_dir = "SyncedSports-BrandPack/Logos/PNG"

[output]
file_prefix = "synced-sports"
"#
        .to_string()
    }

    /// Generate configuration with every section spelled out
    fn generate_config_with_examples() -> String {
        r#"# Brandpack Configuration File
# Batch export of vector logos to fixed-width PNG files
#
# Values may reference environment variables as ${VAR}.
# BRANDPACK_* environment variables override the matching keys.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[paths]
# Directory holding the SVG sources
svg_dir = "SyncedSports-BrandPack/Logos/SVG"
# Root under which <width>px directories are created
png_dir = "SyncedSports-BrandPack/Logos/PNG"

[output]
# Outputs are named <file_prefix>-<token>-<width>.png
file_prefix = "synced-sports"

# Sources are processed in this order
[[sources]]
file = "synced-sports-primary.svg"
token = "primary"

[[sources]]
file = "synced-sports-horizontal.svg"
token = "horizontal"

[[sources]]
file = "synced-sports-icon.svg"
token = "icon"

[[sources]]
file = "synced-sports-waves-only.svg"
token = "waves"

[[sources]]
file = "synced-sports-black.svg"
token = "black"

[[sources]]
file = "synced-sports-white.svg"
token = "white"

[[sources]]
file = "synced-sports-wordmark.svg"
token = "wordmark"

# Widths are flattened across categories in this order
[[sizes]]
label = "small"
widths = [32, 64]

[[sizes]]
label = "medium"
widths = [128, 256]

[[sizes]]
label = "large"
widths = [512, 1024]

# Tried in order for every (source, width) pair
[[rasterizers]]
kind = "inkscape"
# program = "/usr/bin/inkscape"

[[rasterizers]]
kind = "imagemagick"
# program = "convert"
# density = 300

[export]
dry_run = false
# Seconds before a single tool invocation is killed
tool_timeout_secs = 120

[logging]
# JSON log file in addition to stderr
local_enabled = false
local_path = "logs"
# Rotation: daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, BrandpackConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "brandpack.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "brandpack.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let content = InitArgs::generate_minimal_config();
        assert!(content.contains("[paths]"));
        assert!(content.contains("[output]"));

        let config = parse_config(&content).unwrap();
        assert_eq!(config, BrandpackConfig::default());
    }

    #[test]
    fn test_generate_config_with_examples_matches_defaults() {
        let content = InitArgs::generate_config_with_examples();
        assert!(content.contains("[[sources]]"));
        assert!(content.contains("[[rasterizers]]"));

        let config = parse_config(&content).unwrap();
        assert_eq!(config, BrandpackConfig::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("brandpack.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&output).unwrap().contains("[paths]"));
    }
}
