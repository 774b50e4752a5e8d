//! Router assembly.

pub mod buildings;
pub mod common;
pub mod docs;

pub use buildings::building_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use docs::{docs_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request body cap for JSON payloads.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: health/ready/version at the root, buildings and docs under `/api/v1`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(building_routes(state.clone()))
        .merge(docs_routes());

    Router::new()
        .merge(common_routes_with_ready(state))
        .nest("/api/v1", api)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
