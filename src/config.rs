use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Comma-separated CORS origin allow-list ("*" for any origin)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the music catalog search service
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Path to the yt-dlp binary used for stream extraction
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_catalog_api_url() -> String {
    "https://music.youtube.com/youtubei/v1".to_string()
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Parsed CORS origin list; a "*" entry means any origin is allowed
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}
