//! Bible Handlers
//!
//! HTTP handlers for the bible CRUD endpoints. Request bodies are optional
//! and ignored; the stub service answers regardless of payload content.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::bible::{
    CreateBibleDto, UpdateBibleDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for bible endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bible))
        .route("/", get(find_all_bible))
        .route("/:id", get(find_one_bible))
        .route("/:id", patch(update_bible))
        .route("/:id", delete(remove_bible))
}

/// POST /bible - Create a new bible entry
///
/// # Responses
///
/// * 201 Created - Placeholder confirmation, regardless of payload
#[utoipa::path(
    post,
    path = "/bible",
    tag = "bible",
    request_body(content = CreateBibleDto, content_type = "application/json"),
    responses((status = 201, body = String, content_type = "text/plain"))
)]
#[axum::debug_handler]
pub async fn create_bible(
    State(state): State<AppState>,
    body: Option<Json<CreateBibleDto>>,
) -> Result<(StatusCode, String), ApiError> {
    // Payload is a placeholder type with no fields; drop it
    let _dto = body.map(|Json(dto)| dto).unwrap_or_default();

    let message = state.bible_service.create()?;
    Ok((StatusCode::CREATED, message))
}

/// GET /bible - List all bible entries
///
/// # Responses
///
/// * 200 OK - Placeholder listing
#[utoipa::path(
    get,
    path = "/bible",
    tag = "bible",
    responses((status = 200, body = String, content_type = "text/plain"))
)]
#[axum::debug_handler]
pub async fn find_all_bible(State(state): State<AppState>) -> Result<String, ApiError> {
    let message = state.bible_service.find_all()?;
    Ok(message)
}

/// GET /bible/:id - Get a bible entry by id
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    get,
    path = "/bible/{id}",
    tag = "bible",
    params(("id" = i64, Path, description = "Bible entry id")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn find_one_bible(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;

    let message = state.bible_service.find_one(id)?;
    Ok(message)
}

/// PATCH /bible/:id - Update a bible entry
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    patch,
    path = "/bible/{id}",
    tag = "bible",
    params(("id" = i64, Path, description = "Bible entry id")),
    request_body(content = UpdateBibleDto, content_type = "application/json"),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn update_bible(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateBibleDto>>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;
    let _dto = body.map(|Json(dto)| dto).unwrap_or_default();

    let message = state.bible_service.update(id)?;
    Ok(message)
}

/// DELETE /bible/:id - Remove a bible entry
///
/// # Responses
///
/// * 200 OK - Placeholder containing the requested id
/// * 400 Bad Request - Non-numeric id
#[utoipa::path(
    delete,
    path = "/bible/{id}",
    tag = "bible",
    params(("id" = i64, Path, description = "Bible entry id")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 400, description = "Non-numeric id"),
    )
)]
#[axum::debug_handler]
pub async fn remove_bible(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id: i64 = id.parse()?;

    let message = state.bible_service.remove(id)?;
    Ok(message)
}
