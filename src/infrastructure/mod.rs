//! Infrastructure layer for content, delivery and rendering.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`content`] - Compiled-in catalog and post repositories
//! - [`sinks`] - Contact inquiry delivery targets
//! - [`render`] - Render hosts for the backdrop engine

pub mod content;
pub mod render;
pub mod sinks;
