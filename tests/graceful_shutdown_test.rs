//! Integration tests for graceful shutdown
//!
//! A shutdown signal stops the sweep before the next pair; the pairs already
//! finished stay on disk and the closing line is still printed.

use async_trait::async_trait;
use brandpack::adapters::rasterizer::Rasterizer;
use brandpack::config::{BrandpackConfig, SizeCategory, SourceEntry};
use brandpack::core::export::{ExportCoordinator, ExportLayout, CLOSING_NOTICE};
use brandpack::domain::{ConversionJob, RasterizeError};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::watch;

/// Writes the PNG and raises the shutdown flag after `limit` conversions
struct StoppingRasterizer {
    shutdown: watch::Sender<bool>,
    limit: usize,
    done: std::sync::atomic::AtomicUsize,
}

#[async_trait]
impl Rasterizer for StoppingRasterizer {
    fn name(&self) -> &str {
        "stopping"
    }

    fn label(&self) -> &str {
        "Stopping"
    }

    async fn rasterize(&self, job: &ConversionJob) -> Result<(), RasterizeError> {
        fs::write(&job.output_path, b"png").map_err(|e| RasterizeError::Io {
            program: "stopping".to_string(),
            message: e.to_string(),
        })?;
        let done = self.done.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        if done >= self.limit {
            let _ = self.shutdown.send(true);
        }
        Ok(())
    }
}

fn layout(temp_dir: &TempDir) -> ExportLayout {
    let mut config = BrandpackConfig::default();
    config.paths.svg_dir = temp_dir.path().join("svg").to_string_lossy().to_string();
    config.paths.png_dir = temp_dir.path().join("png").to_string_lossy().to_string();
    config.sources = vec![
        SourceEntry::new("a.svg", "a"),
        SourceEntry::new("b.svg", "b"),
    ];
    config.sizes = vec![SizeCategory::new("small", vec![16, 32])];

    fs::create_dir_all(temp_dir.path().join("svg")).unwrap();
    fs::write(temp_dir.path().join("svg/a.svg"), "<svg/>").unwrap();
    fs::write(temp_dir.path().join("svg/b.svg"), "<svg/>").unwrap();

    ExportLayout::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_shutdown_stops_before_next_pair() {
    let temp_dir = TempDir::new().unwrap();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let rasterizer: Arc<dyn Rasterizer + Send + Sync> = Arc::new(StoppingRasterizer {
        shutdown: shutdown_tx,
        limit: 3,
        done: Default::default(),
    });

    let coordinator = ExportCoordinator::with_rasterizers(layout(&temp_dir), vec![rasterizer])
        .with_shutdown_signal(shutdown_rx);
    let mut out = Vec::new();
    let summary = coordinator.execute_export(&mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(summary.interrupted);
    assert_eq!(summary.created, 3);
    assert!(temp_dir.path().join("png/16px/synced-sports-b-16.png").exists());
    assert!(!temp_dir.path().join("png/32px/synced-sports-b-32.png").exists());
    assert!(output.contains("Interrupted - remaining conversions were not attempted"));
    assert!(output.trim_end().ends_with(CLOSING_NOTICE));
}

#[tokio::test]
async fn test_shutdown_signal_propagation() {
    let (shutdown_tx, shutdown_rx1) = watch::channel(false);
    let shutdown_rx2 = shutdown_rx1.clone();

    assert!(!*shutdown_rx1.borrow());
    assert!(!*shutdown_rx2.borrow());

    shutdown_tx.send(true).unwrap();

    assert!(*shutdown_rx1.borrow());
    assert!(*shutdown_rx2.borrow());
}
