//! Integration tests for the export sweep against real child processes
//!
//! Small shell scripts stand in for Inkscape and ImageMagick. They write a
//! placeholder file to the output path they are given, so the tests check
//! argument conventions, fallback ordering and the notice stream end to end.

#![cfg(unix)]

use brandpack::config::{BrandpackConfig, RasterizerConfig, RasterizerKind, SizeCategory};
use brandpack::core::export::{ConversionOutcome, ExportCoordinator, CLOSING_NOTICE, START_NOTICE};
use brandpack::domain::BrandpackError;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_INKSCAPE: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --export-filename=*) out="${arg#--export-filename=}" ;;
  esac
done
[ -n "$out" ] || exit 3
printf 'inkscape' > "$out"
"#;

const FAKE_MAGICK: &str = r#"#!/bin/sh
[ "$1" = "convert" ] || exit 4
for arg in "$@"; do out="$arg"; done
printf 'magick' > "$out"
"#;

const BROKEN_TOOL: &str = "#!/bin/sh\necho 'cannot render' >&2\nexit 1\n";

const MISSING_TOOL: &str = "/nonexistent/brandpack-test-tool";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("svg")).unwrap();
        fs::create_dir_all(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    fn svg_dir(&self) -> PathBuf {
        self.dir.path().join("svg")
    }

    fn png_dir(&self) -> PathBuf {
        self.dir.path().join("png")
    }

    fn add_source(&self, file: &str) {
        fs::write(self.svg_dir().join(file), "<svg/>").unwrap();
    }

    fn tool(&self, name: &str, script: &str) -> String {
        let path = self.dir.path().join("bin").join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    fn config(&self, inkscape: &str, magick: &str) -> BrandpackConfig {
        let mut config = BrandpackConfig::default();
        config.paths.svg_dir = self.svg_dir().to_string_lossy().to_string();
        config.paths.png_dir = self.png_dir().to_string_lossy().to_string();
        config.rasterizers = vec![
            RasterizerConfig::new(RasterizerKind::Inkscape).with_program(inkscape),
            RasterizerConfig::new(RasterizerKind::ImageMagick).with_program(magick),
        ];
        config
    }

    fn png(&self, width: u32, token: &str) -> PathBuf {
        self.png_dir()
            .join(format!("{width}px"))
            .join(format!("synced-sports-{token}-{width}.png"))
    }

    fn png_count(&self) -> usize {
        count_files(&self.png_dir())
    }
}

fn count_files(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .map(|entry| entry.unwrap().path())
        .map(|path| if path.is_dir() { count_files(&path) } else { 1 })
        .sum()
}

async fn run(config: &BrandpackConfig) -> (Vec<String>, brandpack::core::export::ExportSummary) {
    let coordinator = ExportCoordinator::new(config).unwrap();
    let mut out = Vec::new();
    let summary = coordinator.execute_export(&mut out).await.unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, summary)
}

#[tokio::test]
async fn test_single_source_present_with_primary_tool() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    let inkscape = ws.tool("inkscape", FAKE_INKSCAPE);
    let config = ws.config(&inkscape, MISSING_TOOL);

    let (lines, summary) = run(&config).await;

    let expected = vec![
        START_NOTICE.to_string(),
        "Skipping synced-sports-primary.svg - file not found".to_string(),
        "Skipping synced-sports-horizontal.svg - file not found".to_string(),
        "Created synced-sports-icon-32.png".to_string(),
        "Created synced-sports-icon-64.png".to_string(),
        "Created synced-sports-icon-128.png".to_string(),
        "Created synced-sports-icon-256.png".to_string(),
        "Created synced-sports-icon-512.png".to_string(),
        "Created synced-sports-icon-1024.png".to_string(),
        "Skipping synced-sports-waves-only.svg - file not found".to_string(),
        "Skipping synced-sports-black.svg - file not found".to_string(),
        "Skipping synced-sports-white.svg - file not found".to_string(),
        "Skipping synced-sports-wordmark.svg - file not found".to_string(),
        String::new(),
        CLOSING_NOTICE.to_string(),
    ];
    assert_eq!(lines, expected);

    for width in [32, 64, 128, 256, 512, 1024] {
        let png = ws.png(width, "icon");
        assert_eq!(fs::read_to_string(&png).unwrap(), "inkscape", "{}", png.display());
    }
    assert_eq!(ws.png_count(), 6);

    assert_eq!(summary.total_sources, 7);
    assert_eq!(summary.missing_sources.len(), 6);
    assert_eq!(summary.created, 6);
    assert_eq!(summary.created_with_fallback, 0);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_fallback_used_when_primary_missing() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-black.svg");
    let magick = ws.tool("magick", FAKE_MAGICK);
    let mut config = ws.config(MISSING_TOOL, &magick);
    config.sizes = vec![SizeCategory::new("small", vec![32, 64])];

    let (lines, summary) = run(&config).await;

    assert!(lines.contains(&"Created synced-sports-black-32.png (with ImageMagick)".to_string()));
    assert!(lines.contains(&"Created synced-sports-black-64.png (with ImageMagick)".to_string()));
    assert_eq!(fs::read_to_string(ws.png(32, "black")).unwrap(), "magick");
    assert_eq!(summary.created_with_fallback, 2);

    let record = &summary.records[0];
    assert_eq!(
        record.outcome,
        ConversionOutcome::Created {
            rasterizer: "imagemagick".to_string(),
            fallback: true,
        }
    );
    assert_eq!(record.failed_attempts.len(), 1);
    assert_eq!(record.failed_attempts[0].kind, "unavailable");
}

#[tokio::test]
async fn test_failing_primary_falls_back() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-white.svg");
    let broken = ws.tool("inkscape", BROKEN_TOOL);
    let magick = ws.tool("magick", FAKE_MAGICK);
    let mut config = ws.config(&broken, &magick);
    config.sizes = vec![SizeCategory::new("small", vec![64])];

    let (lines, summary) = run(&config).await;

    assert!(lines.contains(&"Created synced-sports-white-64.png (with ImageMagick)".to_string()));
    let attempt = &summary.records[0].failed_attempts[0];
    assert_eq!(attempt.rasterizer, "inkscape");
    assert_eq!(attempt.kind, "failed");
    assert!(attempt.message.contains("cannot render"));
}

#[tokio::test]
async fn test_no_tools_available() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    let config = ws.config(MISSING_TOOL, MISSING_TOOL);

    let (lines, summary) = run(&config).await;

    for width in [32, 64, 128, 256, 512, 1024] {
        let line =
            format!("Could not convert synced-sports-icon.svg to {width}px PNG - tools not available");
        assert!(lines.contains(&line), "missing notice: {line}");
        assert!(ws.png_dir().join(format!("{width}px")).is_dir());
    }
    assert_eq!(lines.last().map(String::as_str), Some(CLOSING_NOTICE));
    assert_eq!(ws.png_count(), 0);
    assert_eq!(summary.failed, 6);
    assert_eq!(summary.total_created(), 0);
}

#[tokio::test]
async fn test_repeat_run_is_idempotent() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    ws.add_source("synced-sports-wordmark.svg");
    let inkscape = ws.tool("inkscape", FAKE_INKSCAPE);
    let config = ws.config(&inkscape, MISSING_TOOL);

    let (first, _) = run(&config).await;
    let (second, _) = run(&config).await;

    assert_eq!(first, second);
    assert_eq!(ws.png_count(), 12);
}

#[tokio::test]
async fn test_duplicate_widths_are_attempted_twice() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    let inkscape = ws.tool("inkscape", FAKE_INKSCAPE);
    let mut config = ws.config(&inkscape, MISSING_TOOL);
    config.sizes = vec![
        SizeCategory::new("small", vec![32]),
        SizeCategory::new("favicon", vec![32]),
    ];

    let (lines, summary) = run(&config).await;

    let created = lines
        .iter()
        .filter(|l| *l == "Created synced-sports-icon-32.png")
        .count();
    assert_eq!(created, 2);
    assert_eq!(summary.total_pairs, 2);
    assert_eq!(ws.png_count(), 1);
}

#[tokio::test]
async fn test_existing_output_directories_are_reused() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    for width in [32, 64, 128, 256, 512, 1024] {
        fs::create_dir_all(ws.png_dir().join(format!("{width}px"))).unwrap();
    }
    let inkscape = ws.tool("inkscape", FAKE_INKSCAPE);
    let config = ws.config(&inkscape, MISSING_TOOL);

    let (_, summary) = run(&config).await;

    assert_eq!(summary.created, 6);
}

#[tokio::test]
async fn test_unwritable_output_root_is_fatal() {
    let ws = Workspace::new();
    ws.add_source("synced-sports-icon.svg");
    let inkscape = ws.tool("inkscape", FAKE_INKSCAPE);
    let config = ws.config(&inkscape, MISSING_TOOL);
    // A plain file where the PNG root should be
    fs::write(ws.png_dir(), "not a directory").unwrap();

    let coordinator = ExportCoordinator::new(&config).unwrap();
    let mut out = Vec::new();
    let result = coordinator.execute_export(&mut out).await;

    assert!(matches!(result, Err(BrandpackError::Setup(_))));
    assert!(out.is_empty());
}
