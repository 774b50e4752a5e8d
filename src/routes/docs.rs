//! OpenAPI document for the buildings API.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::model::{Building, BuildingQuery, BuildingsMeta, BuildingsPage, NewBuilding};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_building, handlers::get_building, handlers::list_buildings),
    components(schemas(Building, NewBuilding, BuildingQuery, BuildingsMeta, BuildingsPage, ErrorBody, ErrorDetail)),
    tags((name = "buildings", description = "Buildings catalogue"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json.
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi))
}
