//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The calculators are pure functions, so the state only carries the
//! immutable configuration.

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): the configuration is wrapped in an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert_eq!(cloned.config().server.port, 8080);
    }
}
