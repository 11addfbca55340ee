//! Developer CRUD route handlers.
//!
//! Provides endpoints for listing, fetching, creating, updating, and
//! deleting developer records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{CreateDeveloper, Developer, Experience};
use crate::state::AppState;

/// Request body for creating a developer.
///
/// Only `experience` is validated; `id`, `name`, and `salary` are
/// unchecked, so absent fields fall back to their defaults instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct DeveloperRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    pub experience: Option<String>,
}

/// Create the developer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/developers", get(list_developers).post(create_developer))
        .route(
            "/developers/{id}",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
}

/// List all developers.
///
/// GET /developers
async fn list_developers(State(state): State<AppState>) -> Json<Vec<Developer>> {
    Json(state.developers().list())
}

/// Get a developer by id.
///
/// GET /developers/{id}
async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Developer>> {
    state.developers().get(id).map(Json).ok_or(AppError::NotFound)
}

/// Create a developer, deducting tax from the gross salary.
///
/// POST /developers
async fn create_developer(
    State(state): State<AppState>,
    Json(body): Json<Option<DeveloperRequest>>,
) -> AppResult<(StatusCode, Json<Developer>)> {
    let request = body.ok_or_else(|| AppError::BadRequest("request body is required".to_string()))?;

    let tag = request
        .experience
        .ok_or_else(|| AppError::BadRequest("experience is required".to_string()))?;
    let experience = Experience::from_tag(&tag)
        .ok_or_else(|| AppError::BadRequest(format!("unknown experience level: {tag}")))?;

    let created = state.developers().create(CreateDeveloper {
        id: request.id,
        name: request.name,
        salary: request.salary,
        experience,
    });

    Ok((StatusCode::CREATED, Json(created)))
}

/// Upsert a developer at the path id. The salary in the body is stored
/// verbatim; no tax recomputation happens on this path.
///
/// PUT /developers/{id}
async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Option<Developer>>,
) -> AppResult<Json<Developer>> {
    let developer =
        body.ok_or_else(|| AppError::BadRequest("request body is required".to_string()))?;

    Ok(Json(state.developers().upsert(id, developer)))
}

/// Delete a developer. Idempotent: succeeds whether or not the id exists.
///
/// DELETE /developers/{id}
async fn delete_developer(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    state.developers().remove(id);
    StatusCode::OK
}
