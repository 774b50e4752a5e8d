//! Request extractors.

pub mod list_query;
pub use list_query::{query_from_params, ListQuery};
