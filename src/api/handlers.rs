use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{SearchResultItem, StreamInfo};
use crate::services;

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StreamParams {
    pub id: Option<String>,
}

/// Validates a required non-empty query parameter before any external call
fn require_param(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("Query parameter '{}' is required", name)))
}

// Handlers

/// Service descriptor
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// Search the song catalog
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchResultItem>>> {
    let query = require_param(params.q, "q")?;
    let items = services::search::search_songs(state.catalog.as_ref(), &query).await?;
    Ok(Json(items))
}

/// Resolve a video identifier to a direct-play stream URL
pub async fn stream(
    State(state): State<AppState>,
    Query(params): Query<StreamParams>,
) -> AppResult<Json<StreamInfo>> {
    let video_id = require_param(params.id, "id")?;
    let info = services::stream::resolve_stream(state.extractor.as_ref(), &video_id).await?;
    Ok(Json(info))
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    let timestamp = chrono::Utc::now().timestamp_millis() as f64 / 1000.0;
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param_present() {
        let value = require_param(Some("test".to_string()), "q").unwrap();
        assert_eq!(value, "test");
    }

    #[test]
    fn test_require_param_missing() {
        let err = require_param(None, "q").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("'q'")));
    }

    #[test]
    fn test_require_param_empty() {
        let err = require_param(Some(String::new()), "id").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("'id'")));
    }
}
