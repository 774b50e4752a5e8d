//! Storage seam used by the HTTP handlers.

use crate::error::AppError;
use crate::model::{Building, BuildingQuery, BuildingsPage};
use async_trait::async_trait;

/// Buildings storage. Handlers only see this trait, so tests can inject an in-memory backend.
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Insert a validated building and return it as stored.
    async fn save(&self, building: &Building) -> Result<Building, AppError>;

    /// Point lookup by exact title. No row is `AppError::NotFound`.
    async fn building(&self, title: &str) -> Result<Building, AppError>;

    /// One page of buildings matching the provided filters, with the total count for those filters.
    async fn buildings(&self, query: &BuildingQuery) -> Result<BuildingsPage, AppError>;

    /// Cheap liveness check of the backend.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release backend resources. Further calls fail.
    async fn close(&self);
}
