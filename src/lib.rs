//! Buildings API: create, look up and list buildings stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Building, BuildingQuery, BuildingsMeta, BuildingsPage, NewBuilding};
pub use routes::{app, building_routes, common_routes, common_routes_with_ready, ApiDoc};
pub use service::{BuildingRepository, BuildingValidator, PgBuildingRepository};
pub use state::AppState;
pub use store::{ensure_buildings_table, ensure_database_exists};
