//! Top-level router configuration combining pages, forms and the API.
//!
//! # Route Structure
//!
//! - `/`, `/about`, `/news`, `/contact`, `/services/*` - Pages
//! - `POST /contact`, `POST /services/*`, `POST /theme/toggle` - Forms
//! - `/api/*`            - JSON API
//! - `GET  /health`      - Health check
//! - `/static/*`         - Static assets
//!
//! Anything else renders the 404 page.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter for forms and the API; the backdrop data shares the page limit
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let pages = web::routes::page_routes().layer(rate_limit::layer());
    let forms = web::routes::form_routes().layer(rate_limit::secure_layer());
    let api_router = api::routes::api_routes()
        .layer(rate_limit::secure_layer())
        .merge(api::routes::backdrop_routes().layer(rate_limit::layer()));

    let router = Router::new()
        .merge(pages)
        .merge(forms)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
