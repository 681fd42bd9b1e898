//! Handler for the news listing API.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::news::NewsResponse;
use crate::domain::entities::NewsFilter;
use crate::state::AppState;

/// Lists posts matching the category and search filter.
///
/// # Endpoint
///
/// `GET /api/news?category=cloud&search=aws`
///
/// Both parameters are optional; `category=all` is the same as omitting it.
/// An empty `items` array is a valid response.
pub async fn news_list_handler(
    State(state): State<AppState>,
    Query(filter): Query<NewsFilter>,
) -> Json<NewsResponse> {
    let items = state.news_service.list(&filter);

    Json(NewsResponse {
        categories: state.news_service.categories(),
        total: items.len(),
        items,
        filter,
    })
}
