use std::sync::Arc;

use crate::services::providers::{CatalogProvider, StreamExtractor};

/// Shared application state
///
/// Holds the externally constructed provider handles. Both are immutable after
/// startup, so handlers share them without any synchronization.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub extractor: Arc<dyn StreamExtractor>,
}

impl AppState {
    /// Creates application state from injected providers
    pub fn new(catalog: Arc<dyn CatalogProvider>, extractor: Arc<dyn StreamExtractor>) -> Self {
        Self { catalog, extractor }
    }
}
