//! Buildings routes. The title segment is percent-decoded by the Path extractor.

use crate::handlers::{create_building, get_building, list_buildings};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn building_routes(state: AppState) -> Router {
    Router::new()
        .route("/buildings", get(list_buildings).post(create_building))
        .route("/buildings/:title", get(get_building))
        .with_state(state)
}
