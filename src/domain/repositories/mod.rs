//! Repository trait definitions for the domain layer.
//!
//! Content is compiled into the binary, so these traits are synchronous.
//! Implementations live in `crate::infrastructure::content`; mocks are
//! generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`CatalogRepository`] - Service categories and entries
//! - [`PostRepository`] - News posts

pub mod catalog_repository;
pub mod post_repository;

pub use catalog_repository::CatalogRepository;
pub use post_repository::PostRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
