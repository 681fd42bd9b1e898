//! Application layer services.
//!
//! Services consume repository traits and domain types and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Service catalog lookups
//! - [`services::news_service::NewsService`] - News filtering
//! - [`services::contact_service::ContactService`] - Contact form validation and queueing
//! - [`services::backdrop_service::BackdropService`] - Backdrop presets, buffers and previews

pub mod services;
