use serde::{Deserialize, Serialize};

/// A single search hit returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    /// Comma-joined artist names, "Unknown Artist" when none are known
    pub artist: String,
    /// Best-available thumbnail URL, empty when the hit carries none
    pub img: String,
    /// Duration in whole seconds, 0 when unknown
    pub duration: u64,
}

/// Resolved stream returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamInfo {
    pub url: String,
    pub title: String,
    pub duration: u64,
}

// ============================================================================
// Catalog provider types
// ============================================================================

/// Raw song hit as the catalog provider returns it.
///
/// Optional fields take their defaults when absent; a mistyped field fails
/// deserialization of this one hit so the adapter can drop it individually.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogHit {
    #[serde(rename = "videoId", default)]
    pub video_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

impl From<CatalogHit> for SearchResultItem {
    fn from(hit: CatalogHit) -> Self {
        let artist = if hit.artists.is_empty() {
            "Unknown Artist".to_string()
        } else {
            hit.artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        // Provider thumbnails are ordered smallest to largest
        let img = hit
            .thumbnails
            .last()
            .map(|t| t.url.clone())
            .unwrap_or_default();

        SearchResultItem {
            id: hit.video_id,
            title: hit.title.unwrap_or_else(|| "Unknown Title".to_string()),
            artist,
            img,
            duration: hit.duration_seconds.unwrap_or(0),
        }
    }
}

// ============================================================================
// Stream extractor types
// ============================================================================

/// Raw extraction result as yt-dlp emits it with `-j`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extraction {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// yt-dlp may report fractional seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

impl Extraction {
    /// Convert into the client-facing shape, or `None` when no playable URL
    /// was resolved.
    pub fn into_stream_info(self) -> Option<StreamInfo> {
        let url = self.url.filter(|u| !u.is_empty())?;
        Some(StreamInfo {
            url,
            title: self.title.unwrap_or_else(|| "Unknown".to_string()),
            duration: self.duration.map(|d| d as u64).unwrap_or(0),
        })
    }
}
