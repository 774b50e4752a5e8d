//! Shared application state for all routes.

use crate::service::BuildingRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup; handlers never hold per-request state here.
    pub repo: Arc<dyn BuildingRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BuildingRepository>) -> Self {
        AppState { repo }
    }
}
