use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogHit, SearchResultItem},
    services::providers::CatalogProvider,
};

/// Maximum number of song hits requested from the catalog
pub const SEARCH_LIMIT: usize = 20;

/// Search adapter
///
/// Forwards the query to the catalog provider and reshapes each raw hit into
/// a `SearchResultItem`, preserving the provider's ranking order. A hit that
/// fails to deserialize is dropped on its own; a provider failure fails the
/// whole request with a fixed, non-leaking message.
pub async fn search_songs(
    catalog: &dyn CatalogProvider,
    query: &str,
) -> AppResult<Vec<SearchResultItem>> {
    let started = Instant::now();
    tracing::info!(query = %query, "Searching catalog");

    let raw_hits = catalog
        .search_songs(query, SEARCH_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, query = %query, "Catalog search failed");
            AppError::Internal("Search failed".to_string())
        })?;

    let items: Vec<SearchResultItem> = raw_hits
        .into_iter()
        .filter_map(|hit| match serde_json::from_value::<CatalogHit>(hit) {
            Ok(hit) => Some(SearchResultItem::from(hit)),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed track");
                None
            }
        })
        .collect();

    tracing::info!(
        query = %query,
        results = items.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Search completed"
    );

    Ok(items)
}
