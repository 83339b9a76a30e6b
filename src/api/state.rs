//! Application state for the tool rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ToolCatalog};

/// Shared application state.
///
/// Holds the read-only tool catalog shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        self.config.catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_and_shareable() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_clones_share_catalog() {
        let state = AppState::new(ConfigLoader::from_catalog(ToolCatalog::standard()));
        let clone = state.clone();
        assert!(std::ptr::eq(state.catalog(), clone.catalog()));
    }
}
