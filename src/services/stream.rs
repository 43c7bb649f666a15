use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::StreamInfo,
    services::providers::{ExtractError, StreamExtractor},
};

/// Stream adapter
///
/// Resolves a video identifier to a direct-play audio URL through the
/// extractor. Availability errors surface as 404s with fixed messages;
/// everything else is a generic extraction failure.
pub async fn resolve_stream(
    extractor: &dyn StreamExtractor,
    video_id: &str,
) -> AppResult<StreamInfo> {
    let started = Instant::now();
    tracing::info!(video_id = %video_id, "Extracting stream");

    let extraction = match extractor.extract(video_id).await {
        Ok(extraction) => extraction,
        Err(ExtractError::Unavailable(reason)) => {
            tracing::error!(video_id = %video_id, reason = %reason, "Video not available");
            return Err(AppError::NotFound("Video not available".to_string()));
        }
        Err(e) => {
            tracing::error!(error = %e, video_id = %video_id, "Stream extraction error");
            return Err(AppError::Internal("Failed to extract stream".to_string()));
        }
    };

    let info = extraction
        .into_stream_info()
        .ok_or_else(|| AppError::NotFound("Stream URL not found".to_string()))?;

    tracing::info!(
        video_id = %video_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Stream extracted"
    );

    Ok(info)
}
