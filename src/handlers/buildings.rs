//! Building handlers: create, read by title, filtered list.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ListQuery;
use crate::model::{Building, BuildingsPage, NewBuilding};
use crate::service::BuildingValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/api/v1/buildings",
    tag = "buildings",
    request_body = NewBuilding,
    responses(
        (status = 201, description = "Building created", body = Building),
        (status = 400, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_building(
    State(state): State<AppState>,
    body: Result<Json<NewBuilding>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| {
        tracing::info!(error = %e.body_text(), "rejected building body");
        AppError::Validation(e.body_text())
    })?;
    let building = BuildingValidator::validate(body).map_err(|e| {
        tracing::info!(error = %e, "building validation failed");
        e
    })?;
    let created = state.repo.save(&building).await?;
    tracing::debug!(building = ?created, "building created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{title}",
    tag = "buildings",
    params(("title" = String, Path, description = "Building title")),
    responses(
        (status = 200, description = "Building found", body = Building),
        (status = 404, description = "No building with this title", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_building(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let building = state.repo.building(&title).await.map_err(|e| {
        if let AppError::NotFound(_) = e {
            tracing::info!(title = %title, "building not found");
        }
        e
    })?;
    tracing::debug!(building = ?building, "building found");
    Ok((StatusCode::OK, Json(building)))
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings",
    tag = "buildings",
    params(
        ("city" = Option<String>, Query, description = "City"),
        ("year" = Option<i32>, Query, description = "Year"),
        ("floors" = Option<i32>, Query, description = "Number of floors"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("offset" = Option<i64>, Query, description = "Page index (default 0)")
    ),
    responses(
        (status = 200, description = "One page of buildings", body = BuildingsPage),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_buildings(
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> Result<impl IntoResponse, AppError> {
    let page = state.repo.buildings(&query).await?;
    tracing::debug!(meta = ?page.meta, returned = page.data.len(), "buildings listed");
    Ok((StatusCode::OK, Json(page)))
}
