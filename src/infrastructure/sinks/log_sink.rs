//! Sink that records inquiries in the structured log.

use super::service::{InquirySink, SinkResult};
use crate::domain::entities::Inquiry;
use async_trait::async_trait;
use tracing::info;

/// Writes each inquiry as a structured `info` event.
///
/// Used when no `INQUIRY_LOG_PATH` is configured, so submissions are at
/// least visible to whoever reads the service logs.
#[derive(Debug, Default)]
pub struct LogInquirySink;

impl LogInquirySink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InquirySink for LogInquirySink {
    async fn deliver(&self, inquiry: &Inquiry) -> SinkResult<()> {
        info!(
            inquiry_id = %inquiry.id,
            service = %inquiry.service,
            email = %inquiry.email,
            name = %inquiry.name,
            phone = inquiry.phone.as_deref().unwrap_or("-"),
            message_len = inquiry.message.len(),
            "Contact inquiry received"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
