//! News listing and filtering.

use std::sync::Arc;

use crate::domain::entities::{BlogPost, NewsFilter};
use crate::domain::repositories::PostRepository;

/// Service for filtering the news post list.
pub struct NewsService<R: PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository> NewsService<R> {
    /// Creates a new news service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Posts matching `filter`, in list order.
    pub fn list(&self, filter: &NewsFilter) -> Vec<&'static BlogPost> {
        filter.apply(self.repository.all())
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for post in self.repository.all() {
            if !seen.contains(&post.category) {
                seen.push(post.category);
            }
        }
        seen
    }

    /// Total number of posts regardless of filter.
    pub fn total(&self) -> usize {
        self.repository.all().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPostRepository;

    static POSTS: &[BlogPost] = &[
        BlogPost {
            id: 1,
            title: "Cloud IAM pitfalls",
            excerpt: "",
            category: "cloud",
            author: "A",
            date: "2024-01-03",
            read_time: "3 min read",
            tags: &[],
            likes: 0,
            comments: 0,
        },
        BlogPost {
            id: 2,
            title: "Phishing metrics",
            excerpt: "",
            category: "cybersecurity",
            author: "B",
            date: "2024-01-02",
            read_time: "3 min read",
            tags: &[],
            likes: 0,
            comments: 0,
        },
        BlogPost {
            id: 3,
            title: "Cloud logging",
            excerpt: "",
            category: "cloud",
            author: "C",
            date: "2024-01-01",
            read_time: "3 min read",
            tags: &[],
            likes: 0,
            comments: 0,
        },
    ];

    fn service() -> NewsService<MockPostRepository> {
        let mut repo = MockPostRepository::new();
        repo.expect_all().return_const(POSTS);
        NewsService::new(Arc::new(repo))
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        assert_eq!(service().categories(), vec!["cloud", "cybersecurity"]);
    }

    #[test]
    fn test_list_filters_by_category() {
        let posts = service().list(&NewsFilter::new(Some("cloud"), None));
        let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_list_with_unmatched_search_is_empty() {
        let posts = service().list(&NewsFilter::new(None, Some("blockchain")));
        assert!(posts.is_empty());
        assert_eq!(service().total(), 3);
    }
}
