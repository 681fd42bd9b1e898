//! Delivery targets for contact inquiries.
//!
//! Provides an [`InquirySink`] trait with two implementations:
//! - [`LogInquirySink`] - Structured log event per inquiry
//! - [`JsonlInquirySink`] - JSON-lines file

mod jsonl_sink;
mod log_sink;
mod service;

pub use jsonl_sink::JsonlInquirySink;
pub use log_sink::LogInquirySink;
pub use service::{InquirySink, SinkError, SinkResult};

#[cfg(test)]
pub use service::MockInquirySink;
