//! Page and form route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, category_page_handler, contact_page_handler, contact_submit_handler,
    home_handler, news_page_handler, service_contact_handler, service_page_handler,
};
use crate::web::theme::toggle_theme_handler;
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /`                                - Home
/// - `GET /about`                           - About
/// - `GET /news`                            - News with category and search filter
/// - `GET /contact`                         - General contact form
/// - `GET /services/{category}`             - Service category
/// - `GET /services/{category}/{service}`   - Service detail with contact form
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/news", get(news_page_handler))
        .route("/contact", get(contact_page_handler))
        .route("/services/{category}", get(category_page_handler))
        .route("/services/{category}/{service}", get(service_page_handler))
}

/// Form posts that change state.
///
/// # Endpoints
///
/// - `POST /contact`                        - Submit the general contact form
/// - `POST /services/{category}/{service}`  - Submit a service contact form
/// - `POST /theme/toggle`                   - Flip the theme cookie
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_submit_handler))
        .route(
            "/services/{category}/{service}",
            post(service_contact_handler),
        )
        .route("/theme/toggle", post(toggle_theme_handler))
}
