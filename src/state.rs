//! Shared application state for all routes.

use crate::store::CarStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and handed to every handler.
    pub store: Arc<dyn CarStore>,
}

impl AppState {
    pub fn new(store: impl CarStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
