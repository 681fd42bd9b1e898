//! DTOs for the news endpoints.

use serde::Serialize;

use crate::domain::entities::{BlogPost, NewsFilter};

/// Filtered post list with the filter that produced it.
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub filter: NewsFilter,
    pub categories: Vec<&'static str>,
    pub total: usize,
    pub items: Vec<&'static BlogPost>,
}
