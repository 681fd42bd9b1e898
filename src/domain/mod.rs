//! Domain layer containing the site's entities and logic.
//!
//! # Architecture
//!
//! - [`backdrop`] - Ambient particle backdrop engine
//! - [`theme`] - Dark/light theme flag
//! - [`contact`] - Contact form state and validation
//! - [`entities`] - Catalog, post and inquiry data structures
//! - [`repositories`] - Content access trait definitions
//! - [`inquiry_worker`] - Asynchronous inquiry delivery worker
//!
//! # Inquiry Flow
//!
//! 1. HTTP handler validates a [`contact::ContactFormState`]
//! 2. An [`entities::Inquiry`] is sent to the async channel
//! 3. [`inquiry_worker::run_inquiry_worker`] delivers it with retry
//! 4. The configured [`crate::infrastructure::sinks::InquirySink`] stores or logs it

pub mod backdrop;
pub mod contact;
pub mod entities;
pub mod inquiry_worker;
pub mod repositories;
pub mod theme;
