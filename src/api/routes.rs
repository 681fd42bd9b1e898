//! API route configuration.
//!
//! JSON endpoints backing the browser renderer and external integrations.
//! Mounted under `/api` by [`crate::routes::app_router`].

use crate::api::handlers::{
    backdrop_handler, catalog_handler, category_handler, contact_handler, news_list_handler,
    theme_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Backdrop data, fetched by the browser renderer on every page view.
///
/// Kept apart from [`api_routes`] so it can share the page rate limit.
///
/// - `GET  /backdrop/{page}` - Backdrop preset and particle buffers
pub fn backdrop_routes() -> Router<AppState> {
    Router::new().route("/backdrop/{page}", get(backdrop_handler))
}

/// JSON API routes other than the backdrop.
///
/// # Endpoints
///
/// - `GET  /news`                 - Filtered news posts
/// - `GET  /services`             - Service categories
/// - `GET  /services/{category}`  - One category with its services
/// - `POST /contact`              - Queue a contact inquiry
/// - `GET  /theme`                - Current theme flag
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(news_list_handler))
        .route("/services", get(catalog_handler))
        .route("/services/{category}", get(category_handler))
        .route("/contact", post(contact_handler))
        .route("/theme", get(theme_handler))
}
