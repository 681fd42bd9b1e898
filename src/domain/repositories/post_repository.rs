//! Repository trait for news posts.

use crate::domain::entities::BlogPost;

/// Read access to the fixed news post list.
///
/// # Implementations
///
/// - [`crate::infrastructure::content::StaticPostRepository`] - Compiled-in posts
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    fn all(&self) -> &'static [BlogPost];
}
