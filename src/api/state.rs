//! Application state for the Statutory Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded statutory schedule. The schedule is read-only,
/// so concurrent batch requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory schedule.
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
