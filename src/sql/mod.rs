//! Buildings SQL: identifiers quoted from config, values always bound as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::PgBindValue;
