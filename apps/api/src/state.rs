use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::engine::RecommendationEngine;
use crate::store::{EmployeeProfiles, RecommendationStore, RoleCatalog};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: RecommendationEngine,
    /// Backend chosen at startup via STORAGE_BACKEND.
    pub roles: Arc<dyn RoleCatalog>,
    pub employees: Arc<dyn EmployeeProfiles>,
    pub recommendations: Arc<dyn RecommendationStore>,
}

impl AppState {
    /// Wires one backend in as all three collaborators.
    pub fn new<S>(config: Config, engine: RecommendationEngine, store: Arc<S>) -> Self
    where
        S: RoleCatalog + EmployeeProfiles + RecommendationStore + 'static,
    {
        Self {
            config,
            engine,
            roles: store.clone(),
            employees: store.clone(),
            recommendations: store,
        }
    }
}
