//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use brandpack::config::{load_config, RasterizerKind};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("BRANDPACK_APPLICATION_LOG_LEVEL");
    std::env::remove_var("BRANDPACK_PATHS_SVG_DIR");
    std::env::remove_var("BRANDPACK_PATHS_PNG_DIR");
    std::env::remove_var("BRANDPACK_OUTPUT_FILE_PREFIX");
    std::env::remove_var("BRANDPACK_EXPORT_DRY_RUN");
    std::env::remove_var("BRANDPACK_EXPORT_TOOL_TIMEOUT_SECS");
    std::env::remove_var("TEST_BRAND_ROOT");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[paths]
svg_dir = "brand/svg"
png_dir = "brand/png"

[output]
file_prefix = "acme"

[[sources]]
file = "acme-mark.svg"
token = "mark"

[[sources]]
file = "acme-type.svg"
token = "type"

[[sizes]]
label = "favicon"
widths = [16, 32]

[[sizes]]
label = "store"
widths = [512]

[[rasterizers]]
kind = "imagemagick"
program = "convert"
density = 150

[export]
dry_run = true
tool_timeout_secs = 30

[logging]
local_enabled = true
local_path = "/tmp/brandpack-logs"
local_rotation = "hourly"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.paths.svg_dir, "brand/svg");
    assert_eq!(config.output.file_prefix, "acme");
    assert_eq!(config.sources.len(), 2);
    assert_eq!(config.sources[1].token, "type");
    assert_eq!(config.flattened_widths(), vec![16, 32, 512]);
    assert_eq!(config.rasterizers.len(), 1);
    assert_eq!(config.rasterizers[0].kind, RasterizerKind::ImageMagick);
    assert_eq!(config.rasterizers[0].program(), "convert");
    assert_eq!(config.rasterizers[0].density(), 150);
    assert!(config.export.dry_run);
    assert_eq!(config.export.tool_timeout_secs, 30);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_BRAND_ROOT", "/srv/brand");

    let temp_file = write_config(
        r#"
[paths]
svg_dir = "${TEST_BRAND_ROOT}/svg"
png_dir = "${TEST_BRAND_ROOT}/png"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.paths.svg_dir, "/srv/brand/svg");
    assert_eq!(config.paths.png_dir, "/srv/brand/png");

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[paths]\nsvg_dir = \"${TEST_BRAND_ROOT}/svg\"\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("TEST_BRAND_ROOT"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("BRANDPACK_PATHS_PNG_DIR", "/out/png");
    std::env::set_var("BRANDPACK_OUTPUT_FILE_PREFIX", "override");
    std::env::set_var("BRANDPACK_EXPORT_DRY_RUN", "true");
    std::env::set_var("BRANDPACK_EXPORT_TOOL_TIMEOUT_SECS", "5");

    let temp_file = write_config("[paths]\npng_dir = \"from/file\"\n");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.paths.png_dir, "/out/png");
    assert_eq!(config.output.file_prefix, "override");
    assert!(config.export.dry_run);
    assert_eq!(config.export.tool_timeout_secs, 5);

    cleanup_env_vars();
}

#[test]
fn test_env_override_invalid_timeout() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("BRANDPACK_EXPORT_TOOL_TIMEOUT_SECS", "soon");

    let temp_file = write_config("");
    let result = load_config(temp_file.path());

    cleanup_env_vars();
    assert!(result.is_err());
}

#[test]
fn test_invalid_configs_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"loud\"\n",
        "[output]\nfile_prefix = \"a/b\"\n",
        "[[sources]]\nfile = \"x.svg\"\ntoken = \"Bad Token\"\n",
        "[[sources]]\nfile = \"x.svg\"\ntoken = \"x\"\n[[sources]]\nfile = \"y.svg\"\ntoken = \"x\"\n",
        "[[sizes]]\nlabel = \"huge\"\nwidths = [100000]\n",
        "[[rasterizers]]\nkind = \"inkscape\"\ndensity = 300\n",
        "[[rasterizers]]\nkind = \"gimp\"\n",
        "[export]\ntool_timeout_secs = 0\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "this is = = not toml",
    ];

    for case in cases {
        let temp_file = write_config(case);
        let result = load_config(temp_file.path());
        assert!(result.is_err(), "accepted invalid config:\n{case}");
    }
}
