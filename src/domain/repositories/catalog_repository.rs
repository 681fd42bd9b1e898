//! Repository trait for the service catalog.

use crate::domain::entities::ServiceCategory;

/// Read access to the service catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::content::StaticCatalogRepository`] - Compiled-in catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// All categories in menu order.
    fn categories(&self) -> &'static [ServiceCategory];

    /// Finds a category by slug (e.g., "grc").
    fn find_category(&self, slug: &str) -> Option<&'static ServiceCategory>;
}
