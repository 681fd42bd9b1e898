//! DTOs for the service catalog endpoints.

use serde::Serialize;

use crate::domain::entities::{ServiceCategory, ServiceEntry};

/// Compact category listing without entry details.
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub services: usize,
}

impl From<&'static ServiceCategory> for CategorySummary {
    fn from(category: &'static ServiceCategory) -> Self {
        Self {
            slug: category.slug,
            title: category.title,
            tagline: category.tagline,
            icon: category.icon,
            href: category.href(),
            services: category.entries.len(),
        }
    }
}

/// One service with its canonical page link.
#[derive(Debug, Serialize)]
pub struct ServiceItem {
    #[serde(flatten)]
    pub entry: &'static ServiceEntry,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub services: Vec<ServiceItem>,
}

impl From<&'static ServiceCategory> for CategoryResponse {
    fn from(category: &'static ServiceCategory) -> Self {
        Self {
            slug: category.slug,
            title: category.title,
            tagline: category.tagline,
            description: category.description,
            icon: category.icon,
            services: category
                .entries
                .iter()
                .map(|entry| ServiceItem {
                    href: category.entry_href(entry),
                    entry,
                })
                .collect(),
        }
    }
}
