//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BackdropService, CatalogService, ContactService, NewsService};
use crate::domain::theme::ThemeContext;
use crate::infrastructure::content::{StaticCatalogRepository, StaticPostRepository};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<StaticCatalogRepository>>,
    pub news_service: Arc<NewsService<StaticPostRepository>>,
    pub contact_service: Arc<ContactService>,
    pub backdrop_service: Arc<BackdropService>,
    /// Theme for visitors without a theme cookie.
    pub default_theme: ThemeContext,
}

impl AppState {
    /// Builds state over the compiled-in content, queueing inquiries on `contact_service`.
    pub fn new(contact_service: Arc<ContactService>, default_theme: ThemeContext) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(Arc::new(
                StaticCatalogRepository::new(),
            ))),
            news_service: Arc::new(NewsService::new(Arc::new(StaticPostRepository::new()))),
            contact_service,
            backdrop_service: Arc::new(BackdropService::new()),
            default_theme,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::entities::Inquiry;
    use tokio::sync::mpsc;

    /// State over the compiled-in content with the inquiry queue exposed.
    pub(crate) fn test_state() -> (AppState, mpsc::Receiver<Inquiry>) {
        let (tx, rx) = mpsc::channel(16);
        let state = AppState::new(Arc::new(ContactService::new(tx)), ThemeContext::dark());
        (state, rx)
    }
}
