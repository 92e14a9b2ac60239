//! Request handlers for the notes REST surface.
//!
//! Handlers validate shape first, then take the service mutex for the whole
//! validate-mutate-persist sequence, and never hold it across an `.await`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path as AxumPath, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use notes_core::validation::parse_note_payload;
use notes_core::{Note, NoteDraft, NoteFilter};

use crate::error::{ApiError, ErrorBody};
use crate::AppState;

/// Create/update request body.
///
/// Handlers accept untyped JSON and validate it through
/// [`parse_note_payload`] so rejections carry field-specific messages; this
/// struct documents the accepted shape in the OpenAPI spec.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteInput {
    /// Required, non-empty after trimming.
    pub title: String,
    /// Required, non-empty after trimming.
    pub content: String,
    /// Optional; every element must be a string.
    pub tags: Option<Vec<String>>,
}

/// Listing filters. Both are case-insensitive substring matches; combining
/// them returns the intersection.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Matches against any tag of a note.
    pub tag: Option<String>,
    /// Matches against title or content.
    pub q: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "notes service is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteInput,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Create a new note
///
/// Validates the payload shape, assigns the next id, sets both timestamps
/// and persists the collection.
///
/// # Errors
///
/// Returns `400 Bad Request` with a field-specific message if:
/// - the body is not a JSON object,
/// - `title` or `content` is missing, not a string, or empty after trimming,
/// - `tags` is present but not an array of strings.
#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let draft = parse_payload(payload, &state)?;
    let mut service = state.lock_service()?;
    let note = service.create(draft);
    tracing::info!(id = note.id, "created note");
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    get,
    path = "/notes",
    params(ListQuery),
    responses(
        (status = 200, description = "Notes matching all provided filters", body = [Note]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// List notes
///
/// Returns the notes matching all provided filters, in insertion order.
/// Without filters the full collection is returned.
#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let filter = NoteFilter {
        tag: query.tag,
        q: query.q,
    };
    let service = state.lock_service()?;
    Ok(Json(service.list(&filter)))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "The requested note", body = Note),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 404, description = "Note not found", body = ErrorBody)
    )
)]
/// Fetch a single note by id
///
/// # Errors
///
/// Returns `400 Bad Request` if the path id is not an integer, or
/// `404 Not Found` if no note has the given id.
#[axum::debug_handler]
pub async fn get_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    let service = state.lock_service()?;
    let note = service
        .get(id)
        .map_err(|e| ApiError::from_notes_error(e, state.expose_errors()))?;
    Ok(Json(note))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    request_body = NoteInput,
    responses(
        (status = 200, description = "The updated note", body = Note),
        (status = 400, description = "Validation failure or non-integer id", body = ErrorBody),
        (status = 404, description = "Note not found", body = ErrorBody)
    )
)]
/// Update a note
///
/// Replaces title, content and tags, refreshes `updatedAt` and persists the
/// collection. `id` and `createdAt` are preserved.
///
/// # Errors
///
/// Returns `400 Bad Request` on a non-integer id or an invalid payload, or
/// `404 Not Found` if no note has the given id.
#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    let draft = parse_payload(payload, &state)?;
    let mut service = state.lock_service()?;
    let note = service
        .update(id, draft)
        .map_err(|e| ApiError::from_notes_error(e, state.expose_errors()))?;
    tracing::info!(id = note.id, "updated note");
    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 404, description = "Note not found", body = ErrorBody)
    )
)]
/// Delete a note
///
/// # Errors
///
/// Returns `400 Bad Request` if the path id is not an integer, or
/// `404 Not Found` if no note has the given id.
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let mut service = state.lock_service()?;
    service
        .delete(id)
        .map_err(|e| ApiError::from_notes_error(e, state.expose_errors()))?;
    tracing::info!(id, "deleted note");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched method/path pairs.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Parses a path id.
///
/// Any integer is accepted here; a negative value can never match a stored
/// note and falls through to the 404 path, matching the contract where only
/// non-integers are a 400.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::validation("id must be an integer"))?;
    u64::try_from(id).map_err(|_| ApiError::not_found(format!("Note {id} not found")))
}

fn parse_payload(
    payload: Result<Json<Value>, JsonRejection>,
    state: &AppState,
) -> Result<NoteDraft, ApiError> {
    let Json(value) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    parse_note_payload(&value).map_err(|e| ApiError::from_notes_error(e, state.expose_errors()))
}
