//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::domain::backdrop::PagePreset;
use crate::domain::theme::ThemeContext;
use crate::state::AppState;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

/// Renders the 404 page for `path`.
pub fn not_found_page(state: &AppState, theme: ThemeContext, path: &str) -> Response {
    let page = NotFoundTemplate {
        layout: Layout::for_page(state, theme, "Page Not Found", PagePreset::Home, path),
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    uri: Uri,
) -> Response {
    not_found_page(&state, theme, uri.path())
}
