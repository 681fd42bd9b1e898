//! Service catalog entities.

use serde::Serialize;

/// One consulting offering rendered as a card and as its own detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name, rendered as an `icon-<name>` class.
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

/// A practice area grouping related services (e.g. GRC, TPRM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub entries: &'static [ServiceEntry],
}

impl ServiceCategory {
    pub fn entry(&self, slug: &str) -> Option<&'static ServiceEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn href(&self) -> String {
        format!("/services/{}", self.slug)
    }

    pub fn entry_href(&self, entry: &ServiceEntry) -> String {
        format!("/services/{}/{}", self.slug, entry.slug)
    }
}
