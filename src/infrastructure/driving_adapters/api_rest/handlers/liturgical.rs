//! Liturgical Handlers
//!
//! HTTP handlers for the liturgical CRUD endpoints, mirroring the bible
//! handlers with the resource noun substituted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::liturgical::{
    CreateLiturgicalDto, UpdateLiturgicalDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for liturgical endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_liturgical))
        .route("/", get(find_all_liturgical))
        .route("/:id", get(find_one_liturgical))
        .route("/:id", patch(update_liturgical))
        .route("/:id", delete(remove_liturgical))
}

/// POST /liturgical - Create a new liturgical day
///
/// # Responses
///
/// * 201 Created - Placeholder confirmation, regardless of payload
#[utoipa::path(
    post,
    path = "/liturgical",
    tag = "liturgical",
    request_body(content = CreateLiturgicalDto, content_type = "application/json"),
    responses((status = 201, body = String, content_type = "text/plain"))
)]
#[axum::debug_handler]
pub async fn create_liturgical(
    State(state): State<AppState>,
    body: Option<Json<CreateLiturgicalDto>>,
) -> Result<(StatusCode, String), ApiError> {
    let _dto = body.map(|Json(dto)| dto).unwrap_or_default();

    let message = state.liturgical_service.create()?;
    Ok((StatusCode::CREATED, message))
}

/// GET /liturgical - List all liturgical days
///
/// # Responses
///
/// * 200 OK - Placeholder listing
#[utoipa::path(
    get,
    path = "/liturgical",
    tag = "liturgical",
    responses((status = 200, body = String, content_type = "text/plain"))
)]
#[axum::debug_handler]
pub async fn find_all_liturgical(State(state): State<AppState>) -> Result<String, ApiError> {
    let message = state.liturgical_service.find_all()?;
    Ok(message)
}

/// GET /liturgical/:id - Get a liturgical day by id
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    get,
    path = "/liturgical/{id}",
    tag = "liturgical",
    params(("id" = i64, Path, description = "Liturgical day id")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn find_one_liturgical(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;

    let message = state.liturgical_service.find_one(id)?;
    Ok(message)
}

/// PATCH /liturgical/:id - Update a liturgical day
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    patch,
    path = "/liturgical/{id}",
    tag = "liturgical",
    params(("id" = i64, Path, description = "Liturgical day id")),
    request_body(content = UpdateLiturgicalDto, content_type = "application/json"),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn update_liturgical(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateLiturgicalDto>>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;
    let _dto = body.map(|Json(dto)| dto).unwrap_or_default();

    let message = state.liturgical_service.update(id)?;
    Ok(message)
}

/// DELETE /liturgical/:id - Remove a liturgical day
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    delete,
    path = "/liturgical/{id}",
    tag = "liturgical",
    params(("id" = i64, Path, description = "Liturgical day id")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn remove_liturgical(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;

    let message = state.liturgical_service.remove(id)?;
    Ok(message)
}
