//! # API REST
//!
//! REST API implementation for the notes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, security headers)
//!
//! The whole `NotesService` (store + persistence pair) sits behind a single
//! mutex so concurrent create/update/delete requests stay linearizable, the
//! same effective serialization an event-loop runtime would provide. The
//! guard is held for a full validate-mutate-persist sequence and never
//! across an `.await` (all file I/O is synchronous).

#![warn(rust_2018_idioms)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use notes_core::{CoreConfig, Note, NotesService};

pub mod error;
pub mod handlers;

use error::ApiError;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    service: Arc<Mutex<NotesService>>,
}

impl AppState {
    /// Opens the notes service for the given configuration.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let service = NotesService::open(cfg.clone());
        Self {
            cfg,
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Whether unexpected-error messages may be exposed to callers.
    pub(crate) fn expose_errors(&self) -> bool {
        !self.cfg.env_mode().is_production()
    }

    /// Takes the service mutex. A poisoned lock maps to the 500 path.
    pub(crate) fn lock_service(&self) -> Result<MutexGuard<'_, NotesService>, ApiError> {
        self.service.lock().map_err(|e| {
            ApiError::internal(
                format!("notes service state poisoned: {e}"),
                self.expose_errors(),
            )
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_notes,
        handlers::create_note,
        handlers::get_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(schemas(
        Note,
        handlers::NoteInput,
        handlers::HealthRes,
        error::ErrorBody,
    ))
)]
struct ApiDoc;

/// Builds the REST router.
///
/// Every response carries permissive CORS and restrictive security headers.
/// Unmatched routes fall back to a JSON 404. Swagger UI is mounted at
/// `/swagger-ui`, the OpenAPI document at `/api-docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/notes",
            get(handlers::list_notes)
                .post(handlers::create_note)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note)
                .fallback(handlers::route_not_found),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::route_not_found)
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .with_state(state)
}
