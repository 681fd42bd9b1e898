//! Core domain entities.
//!
//! Entities are plain data structures. Catalog and post entities borrow
//! `'static` content since the site ships them compiled in.
//!
//! # Entity Types
//!
//! - [`ServiceCategory`] / [`ServiceEntry`] - Service catalog
//! - [`BlogPost`] / [`NewsFilter`] - News page posts and filtering
//! - [`Inquiry`] - A validated contact form submission

pub mod inquiry;
pub mod post;
pub mod service;

pub use inquiry::Inquiry;
pub use post::{ALL_CATEGORIES, BlogPost, NewsFilter};
pub use service::{ServiceCategory, ServiceEntry};
