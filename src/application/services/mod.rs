//! Business logic services for the application layer.

pub mod backdrop_service;
pub mod catalog_service;
pub mod contact_service;
pub mod news_service;

pub use backdrop_service::{BackdropService, GeneratedBackdrop, PreviewReport};
pub use catalog_service::CatalogService;
pub use contact_service::ContactService;
pub use news_service::NewsService;
