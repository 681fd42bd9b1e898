//! News page posts and their filter.

use serde::{Deserialize, Serialize};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    /// Display date, e.g. `"2024-03-15"`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub likes: u32,
    pub comments: u32,
}

/// Category and free-text filter over the post list.
///
/// Empty strings and the `all` category impose no constraint; when both are
/// set a post must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl NewsFilter {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    /// Effective category constraint, if any.
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    }

    /// Effective search term, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Case-sensitive category equality; case-insensitive search over title, excerpt and tags.
    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(category) = self.category()
            && post.category != category
        {
            return false;
        }

        if let Some(term) = self.search() {
            let term = term.to_lowercase();
            let hit = post.title.to_lowercase().contains(&term)
                || post.excerpt.to_lowercase().contains(&term)
                || post.tags.iter().any(|t| t.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Posts matching this filter, in list order.
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: &[BlogPost] = &[
        BlogPost {
            id: 1,
            title: "Zero Trust in Practice",
            excerpt: "Moving beyond the perimeter.",
            category: "cybersecurity",
            author: "A",
            date: "2024-01-01",
            read_time: "5 min read",
            tags: &["Zero Trust", "Network"],
            likes: 1,
            comments: 0,
        },
        BlogPost {
            id: 2,
            title: "ISO 27001 Checklist",
            excerpt: "What auditors look for.",
            category: "compliance",
            author: "B",
            date: "2024-01-02",
            read_time: "7 min read",
            tags: &["ISO", "Audit"],
            likes: 2,
            comments: 1,
        },
        BlogPost {
            id: 3,
            title: "Ransomware Trends",
            excerpt: "Double extortion keeps growing.",
            category: "cybersecurity",
            author: "C",
            date: "2024-01-03",
            read_time: "4 min read",
            tags: &["Ransomware"],
            likes: 3,
            comments: 2,
        },
    ];

    fn ids(posts: Vec<&BlogPost>) -> Vec<u32> {
        posts.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        assert_eq!(ids(NewsFilter::default().apply(POSTS)), vec![1, 2, 3]);
        assert_eq!(
            ids(NewsFilter::new(Some("all"), Some("  ")).apply(POSTS)),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_category_filter() {
        let filter = NewsFilter::new(Some("cybersecurity"), None);
        assert_eq!(ids(filter.apply(POSTS)), vec![1, 3]);
    }

    #[test]
    fn test_category_and_search_intersect() {
        let filter = NewsFilter::new(Some("cybersecurity"), Some("ransom"));
        assert_eq!(ids(filter.apply(POSTS)), vec![3]);

        let filter = NewsFilter::new(Some("compliance"), Some("ransom"));
        assert!(filter.apply(POSTS).is_empty());
    }

    #[test]
    fn test_search_covers_tags_case_insensitively() {
        let filter = NewsFilter::new(None, Some("AUDIT"));
        assert_eq!(ids(filter.apply(POSTS)), vec![2]);
    }

    #[test]
    fn test_unmatched_search_is_empty() {
        let filter = NewsFilter::new(None, Some("quantum"));
        assert!(filter.apply(POSTS).is_empty());
    }
}
