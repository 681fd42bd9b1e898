//! Inquiry sink trait and error types.

use async_trait::async_trait;

use crate::domain::entities::Inquiry;

/// Errors that can occur while delivering an inquiry.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Inquiry sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inquiry serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for validated contact inquiries.
///
/// Delivery is driven by [`crate::domain::inquiry_worker::run_inquiry_worker`],
/// which retries failed deliveries, so implementations should simply report
/// errors rather than retry themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::sinks::LogInquirySink`] - Structured log only
/// - [`crate::infrastructure::sinks::JsonlInquirySink`] - Appends JSON lines to a file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquirySink: Send + Sync {
    /// Delivers one inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the inquiry could not be stored or forwarded.
    async fn deliver(&self, inquiry: &Inquiry) -> SinkResult<()>;

    /// Short name for logs and health output.
    fn name(&self) -> &'static str;
}
