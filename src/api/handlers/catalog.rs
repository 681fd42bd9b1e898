//! Handlers for the service catalog API.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::catalog::{CategoryResponse, CategorySummary};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/services`
pub async fn catalog_handler(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(
        state
            .catalog_service
            .categories()
            .iter()
            .map(CategorySummary::from)
            .collect(),
    )
}

/// Returns one category with all of its services.
///
/// # Endpoint
///
/// `GET /api/services/{category}`
///
/// # Errors
///
/// Returns `404 Not Found` for unknown category slugs.
pub async fn category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.catalog_service.category(&category)?;
    Ok(Json(CategoryResponse::from(category)))
}
