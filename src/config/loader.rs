//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BrandpackConfig;
use crate::domain::errors::BrandpackError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "brandpack.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BrandpackConfig
/// 4. Applies environment variable overrides (BRANDPACK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use brandpack::config::loader::load_config;
///
/// let config = load_config("brandpack.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BrandpackConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BrandpackError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BrandpackError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads the configuration, falling back to built-in defaults when the
/// default config file is absent
///
/// An explicitly requested path that does not exist is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<BrandpackConfig> {
    let path = path.as_ref();

    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        tracing::info!(
            config_path = %path.display(),
            "No configuration file found, using built-in brand pack layout"
        );
        let mut config = BrandpackConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            BrandpackError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        return Ok(config);
    }

    load_config(path)
}

/// Parses TOML text, applying substitution, overrides and validation
pub fn parse_config(contents: &str) -> Result<BrandpackConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: BrandpackConfig = toml::from_str(&contents)
        .map_err(|e| BrandpackError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BrandpackError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BrandpackError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Comments are copied untouched
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(BrandpackError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using BRANDPACK_* prefix
///
/// Environment variables follow the pattern: BRANDPACK_<SECTION>_<KEY>,
/// for example BRANDPACK_PATHS_PNG_DIR.
fn apply_env_overrides(config: &mut BrandpackConfig) -> Result<()> {
    if let Ok(val) = std::env::var("BRANDPACK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("BRANDPACK_PATHS_SVG_DIR") {
        config.paths.svg_dir = val;
    }
    if let Ok(val) = std::env::var("BRANDPACK_PATHS_PNG_DIR") {
        config.paths.png_dir = val;
    }

    if let Ok(val) = std::env::var("BRANDPACK_OUTPUT_FILE_PREFIX") {
        config.output.file_prefix = val;
    }

    if let Ok(val) = std::env::var("BRANDPACK_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BRANDPACK_EXPORT_TOOL_TIMEOUT_SECS") {
        let secs = val.parse().map_err(|_| {
            BrandpackError::Configuration(format!(
                "BRANDPACK_EXPORT_TOOL_TIMEOUT_SECS must be an integer, got '{val}'"
            ))
        })?;
        config.export.tool_timeout_secs = secs;
    }

    if let Ok(val) = std::env::var("BRANDPACK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BRANDPACK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("BRANDPACK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
