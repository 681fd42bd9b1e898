//! Handler for the theme endpoint.

use axum::Json;

use crate::api::dto::theme::ThemeResponse;
use crate::web::theme::CurrentTheme;

/// `GET /api/theme`, resolved from the `theme` cookie or the configured default.
pub async fn theme_handler(CurrentTheme(theme): CurrentTheme) -> Json<ThemeResponse> {
    Json(ThemeResponse::from(theme))
}
