//! Server-rendered site pages.
//!
//! Uses Askama templates from `templates/`; every page extends `base.html`,
//! which carries the mega-menu, the theme toggle and the backdrop container.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page and form route configuration
//! - [`theme`] - Theme cookie extractor and toggle
//! - [`view`] - Layout and navigation view models

pub mod handlers;
pub mod routes;
pub mod theme;
pub mod view;
