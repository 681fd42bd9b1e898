//! Render hosts for the backdrop engine.
//!
//! - [`HeadlessHost`] - In-memory host used for previews and tests

mod headless;

pub use headless::HeadlessHost;
