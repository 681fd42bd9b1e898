//! Handler for the backdrop endpoint.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use tracing::debug;

use crate::api::dto::backdrop::{BackdropQuery, BackdropResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a page's backdrop preset with freshly generated particle buffers.
///
/// # Endpoint
///
/// `GET /api/backdrop/{page}?seed=42`
///
/// The browser renderer (`/static/backdrop.js`) fetches this once per mount.
/// Passing `seed` makes the buffers reproducible.
///
/// # Errors
///
/// Returns `404 Not Found` for unknown page keys and `400 Bad Request` when
/// `seed` is not an unsigned integer.
pub async fn backdrop_handler(
    State(state): State<AppState>,
    Path(page): Path<String>,
    query: Result<Query<BackdropQuery>, QueryRejection>,
) -> Result<Json<BackdropResponse>, AppError> {
    let Query(query) = query?;
    let generated = state.backdrop_service.generate(&page, query.seed)?;

    debug!(
        page = generated.page.slug(),
        particles = generated.buffers.len(),
        bytes = generated.buffers.byte_len(),
        "Generated backdrop buffers"
    );

    Ok(Json(BackdropResponse::from(generated)))
}
