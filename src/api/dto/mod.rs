//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; form input is
//! validated through [`crate::domain::contact::ContactFormState`].

pub mod backdrop;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod news;
pub mod theme;
