use std::sync::Arc;

use crate::catalog::CatalogStore;

/// Shared application state
///
/// The catalog is immutable after startup, so it is shared plainly behind
/// an `Arc` with no lock; concurrent requests only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
}

impl AppState {
    /// Wraps a loaded catalog for sharing across handlers
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
