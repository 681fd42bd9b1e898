//! # Consulting Site
//!
//! Marketing site for a security consultancy, served by Axum with server-side
//! rendered Askama templates, plus the ambient particle backdrop engine that
//! sits behind every page.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Backdrop engine, theme flag, content entities and repository traits
//! - **Application Layer** ([`application`]) - Catalog, news, contact and backdrop services
//! - **Infrastructure Layer** ([`infrastructure`]) - Hard-coded content, inquiry sinks, headless render host
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages, mega-menu and theme toggle
//!
//! ## Features
//!
//! - One configurable particle backdrop replacing per-page copies
//! - Service catalog with category and detail pages
//! - News page with category and free-text filtering
//! - Contact forms delivered asynchronously with retry
//! - Dark/light theme carried in a cookie
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export INQUIRY_LOG_PATH="inquiries.jsonl"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BackdropService, CatalogService, ContactService, NewsService,
    };
    pub use crate::domain::backdrop::{Backdrop, BackdropConfig, BackdropState, ParticleBuffers};
    pub use crate::domain::entities::{BlogPost, Inquiry, NewsFilter, ServiceCategory};
    pub use crate::domain::theme::ThemeContext;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
