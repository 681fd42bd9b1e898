//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod backdrop;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod news;
pub mod theme;

pub use backdrop::backdrop_handler;
pub use catalog::{catalog_handler, category_handler};
pub use contact::contact_handler;
pub use health::health_handler;
pub use news::news_list_handler;
pub use theme::theme_handler;
