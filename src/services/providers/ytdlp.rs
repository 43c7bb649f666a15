/// yt-dlp stream extractor
///
/// Spawns the yt-dlp binary with `-j` to dump the extraction result as JSON
/// without downloading anything. Format selection, retries, and the socket
/// timeout are handed to yt-dlp itself; this layer only enforces an overall
/// deadline on the subprocess.
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::{
    models::Extraction,
    services::providers::{ExtractError, StreamExtractor},
};

/// Overall deadline for a single extraction
const EXTRACTION_TIMEOUT_SECS: u64 = 30;

/// Retries performed inside yt-dlp
const EXTRACTOR_RETRIES: u32 = 3;

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

#[derive(Clone)]
pub struct YtDlpExtractor {
    binary: String,
    timeout: Duration,
}

impl YtDlpExtractor {
    /// Creates an extractor using the given yt-dlp binary path
    pub fn new(binary: String) -> Self {
        Self {
            binary,
            timeout: Duration::from_secs(EXTRACTION_TIMEOUT_SECS),
        }
    }

    fn build_args(video_id: &str) -> Vec<String> {
        vec![
            "-j".to_string(),
            "--quiet".to_string(),
            "--no-warnings".to_string(),
            "-f".to_string(),
            "bestaudio/best".to_string(),
            "--retries".to_string(),
            EXTRACTOR_RETRIES.to_string(),
            "--socket-timeout".to_string(),
            EXTRACTION_TIMEOUT_SECS.to_string(),
            format!("{WATCH_URL_BASE}{video_id}"),
        ]
    }

    /// Classify a failed yt-dlp run from its stderr.
    ///
    /// yt-dlp reports download and availability problems as `ERROR:`
    /// diagnostics; those map to `Unavailable`. Anything else is unexpected.
    fn classify_failure(stderr: &str) -> ExtractError {
        let first_error = stderr.lines().find(|line| line.starts_with("ERROR:"));
        match first_error {
            Some(line) => ExtractError::Unavailable(line.to_string()),
            None => ExtractError::Failed(format!(
                "yt-dlp exited with error: {}",
                stderr.lines().next().unwrap_or("no output")
            )),
        }
    }
}

#[async_trait::async_trait]
impl StreamExtractor for YtDlpExtractor {
    async fn extract(&self, video_id: &str) -> Result<Extraction, ExtractError> {
        let args = Self::build_args(video_id);
        debug!(binary = %self.binary, video_id = %video_id, "Running yt-dlp");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| ExtractError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| ExtractError::Failed(format!("Failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::classify_failure(&stderr));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| ExtractError::Failed(format!("Failed to parse yt-dlp output: {}", e)))
    }
}
