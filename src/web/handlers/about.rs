//! About page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::backdrop::PagePreset;
use crate::state::AppState;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

/// `GET /about`
pub async fn about_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
) -> impl IntoResponse {
    AboutTemplate {
        layout: Layout::for_page(&state, theme, "About Us", PagePreset::About, "/about"),
    }
}
