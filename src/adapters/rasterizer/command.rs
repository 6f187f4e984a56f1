//! Child process runner shared by the command-line rasterizers

use crate::domain::errors::RasterizeError;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Longest stderr excerpt kept in a [`RasterizeError::Failed`]
const STDERR_EXCERPT_LIMIT: usize = 512;

/// Runs `program` with `args`, waiting at most `timeout`
///
/// Output is captured rather than inherited so tool chatter does not mix
/// with the exporter's own notices. Success is judged only by the exit
/// status.
pub async fn run_tool(
    program: &str,
    args: &[OsString],
    timeout: Duration,
) -> Result<(), RasterizeError> {
    tracing::debug!(program = %program, args = ?args, "Launching rasterizer");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => RasterizeError::Unavailable {
                program: program.to_string(),
                reason: e.to_string(),
            },
            _ => RasterizeError::Io {
                program: program.to_string(),
                message: e.to_string(),
            },
        })?;

    // Dropping the future on timeout drops the child, which kills it
    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|e| RasterizeError::Io {
            program: program.to_string(),
            message: e.to_string(),
        })?,
        Err(_) => {
            return Err(RasterizeError::Timeout {
                program: program.to_string(),
                secs: timeout.as_secs(),
            })
        }
    };

    if output.status.success() {
        return Ok(());
    }

    Err(RasterizeError::Failed {
        program: program.to_string(),
        status: output.status.code(),
        stderr: stderr_excerpt(&output.stderr),
    })
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    if text.chars().count() <= STDERR_EXCERPT_LIMIT {
        return text.to_string();
    }
    let mut excerpt: String = text.chars().take(STDERR_EXCERPT_LIMIT).collect();
    excerpt.push_str("...");
    excerpt
}
