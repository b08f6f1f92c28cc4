use crate::services::catalog::{self, Catalog};

/// Shared application state
///
/// The catalog is generated once and only ever read, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state backed by the process-wide catalog
    pub fn new() -> Self {
        Self::with_catalog(catalog::shared())
    }

    /// Creates state backed by a specific catalog
    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}
