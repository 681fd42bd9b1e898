//! Compiled-in site content.
//!
//! - [`StaticCatalogRepository`] - Service categories and entries
//! - [`StaticPostRepository`] - News posts

mod catalog;
mod posts;

pub use catalog::{CATALOG, StaticCatalogRepository};
pub use posts::{POSTS, StaticPostRepository};
