//! HTTP handlers for the buildings resource.

pub mod buildings;
pub use buildings::*;
