//! Application state for the Weekly Wage Engine API.
//!
//! The only shared resource is the read-only service configuration; calculations
//! keep no state between requests.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(ConfigLoader::default());
        let cloned = state.clone();
        assert_eq!(cloned.config().bind_address(), state.config().bind_address());
    }
}
