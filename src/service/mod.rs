//! Building data access (trait + PostgreSQL implementation) and create validation.

mod pg;
mod repository;
mod validation;
pub use pg::PgBuildingRepository;
pub use repository::BuildingRepository;
pub use validation::BuildingValidator;
