//! Service catalog lookups.

use std::sync::Arc;

use crate::domain::entities::{ServiceCategory, ServiceEntry};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for resolving catalog categories and entries by slug.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All categories in menu order.
    pub fn categories(&self) -> &'static [ServiceCategory] {
        self.repository.categories()
    }

    /// Finds a category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category has this slug.
    pub fn category(&self, slug: &str) -> Result<&'static ServiceCategory, AppError> {
        self.repository
            .find_category(slug)
            .ok_or_else(|| AppError::not_found("Service category not found", json!({ "category": slug })))
    }

    /// Finds a service entry within a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either the category or the entry is unknown.
    pub fn entry(
        &self,
        category: &str,
        entry: &str,
    ) -> Result<(&'static ServiceCategory, &'static ServiceEntry), AppError> {
        let found = self.category(category)?;
        let service = found.entry(entry).ok_or_else(|| {
            AppError::not_found(
                "Service not found",
                json!({ "category": category, "service": entry }),
            )
        })?;

        Ok((found, service))
    }

    /// Whether `title` names a catalog entry or category, or is the general inquiry label.
    pub fn is_known_service(&self, title: &str) -> bool {
        title == crate::domain::contact::GENERAL_INQUIRY
            || self.categories().iter().any(|c| {
                c.title == title || c.entries.iter().any(|e| e.title == title)
            })
    }
}
