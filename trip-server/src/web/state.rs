//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Read-only after startup; every request builds its own planning context.
#[derive(Clone)]
pub struct AppState {
    /// Reference catalog of cities, venues and transport
    pub catalog: Arc<Catalog>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: PlannerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
