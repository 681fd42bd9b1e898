//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::backdrop::PagePreset;
use crate::domain::entities::{BlogPost, NewsFilter, ServiceCategory};
use crate::state::AppState;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

/// Number of recent posts teased on the home page.
const LATEST_POSTS: usize = 3;

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Hero section over the home backdrop
/// - One card per service category
/// - The latest news posts
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub categories: &'static [ServiceCategory],
    pub latest: Vec<&'static BlogPost>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
) -> impl IntoResponse {
    let latest = state
        .news_service
        .list(&NewsFilter::default())
        .into_iter()
        .take(LATEST_POSTS)
        .collect();

    HomeTemplate {
        layout: Layout::for_page(&state, theme, "Home", PagePreset::Home, "/"),
        categories: state.catalog_service.categories(),
        latest,
    }
}
