//! News page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::domain::backdrop::PagePreset;
use crate::domain::entities::{ALL_CATEGORIES, BlogPost, NewsFilter};
use crate::state::AppState;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

/// Template for the news page.
///
/// Renders `templates/news.html` with the filter form, the matching posts
/// and, when nothing matches, the "No Articles Found" state.
#[derive(Template, WebTemplate)]
#[template(path = "news.html")]
pub struct NewsTemplate {
    pub layout: Layout,
    pub categories: Vec<&'static str>,
    pub posts: Vec<&'static BlogPost>,
    /// Effective category, `all` when unfiltered.
    pub selected: String,
    pub search: String,
}

impl NewsTemplate {
    pub fn is_selected(&self, category: &str) -> bool {
        self.selected == category
    }
}

/// Renders the news page.
///
/// # Endpoint
///
/// `GET /news?category=compliance&search=audit`
pub async fn news_page_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    Query(filter): Query<NewsFilter>,
) -> impl IntoResponse {
    NewsTemplate {
        layout: Layout::for_page(&state, theme, "News & Insights", PagePreset::News, "/news"),
        categories: state.news_service.categories(),
        posts: state.news_service.list(&filter),
        selected: filter.category().unwrap_or(ALL_CATEGORIES).to_string(),
        search: filter.search().unwrap_or_default().to_string(),
    }
}
