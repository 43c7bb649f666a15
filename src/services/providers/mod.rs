/// External provider abstractions
///
/// The catalog provider and the stream extractor are the only outbound
/// dependencies of this service. Both are trait objects constructed once at
/// startup and injected through `AppState`, so tests can substitute doubles.
use crate::{error::AppResult, models::Extraction};

pub mod ytdlp;
pub mod ytmusic;

pub use ytdlp::YtDlpExtractor;
pub use ytmusic::YtMusicCatalog;

/// Trait for music catalog search providers
///
/// Returns raw hits in the provider's ranking order. Hits are kept as loose
/// JSON values so the search adapter can reshape them one at a time and drop
/// malformed entries without failing the whole request.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the songs category, capped at `limit` hits
    async fn search_songs(&self, query: &str, limit: usize) -> AppResult<Vec<serde_json::Value>>;
}

/// Errors a stream extraction can fail with
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The extractor reported the video as unavailable (download error)
    #[error("video unavailable: {0}")]
    Unavailable(String),

    /// The extraction did not finish within the configured timeout
    #[error("extraction timed out after {0}s")]
    Timeout(u64),

    /// Anything else: spawn failure, unparseable output, unexpected exit
    #[error("extraction failed: {0}")]
    Failed(String),
}

/// Trait for stream URL extractors
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StreamExtractor: Send + Sync {
    /// Resolve a video identifier to its best-audio extraction result
    async fn extract(&self, video_id: &str) -> Result<Extraction, ExtractError>;
}
