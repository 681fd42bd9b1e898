//! Sink appending inquiries to a JSON-lines file.

use super::service::{InquirySink, SinkResult};
use crate::domain::entities::Inquiry;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Appends one JSON object per line to a file.
///
/// The file is opened in append mode for every delivery, so it can be
/// rotated externally while the service runs.
#[derive(Debug)]
pub struct JsonlInquirySink {
    path: PathBuf,
}

impl JsonlInquirySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InquirySink for JsonlInquirySink {
    async fn deliver(&self, inquiry: &Inquiry) -> SinkResult<()> {
        let mut line = serde_json::to_vec(inquiry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        debug!(inquiry_id = %inquiry.id, path = %self.path.display(), "Inquiry appended");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{ContactField, ContactFormState};
    use chrono::Utc;

    fn inquiry(name: &str) -> Inquiry {
        let mut form = ContactFormState::new("BCMS");
        form.set_field(ContactField::Name, name);
        form.set_field(ContactField::Email, "ops@example.com");
        form.set_field(ContactField::Message, "Business continuity plan review");
        Inquiry::from_form(form, Utc::now())
    }

    #[tokio::test]
    async fn test_appends_one_line_per_inquiry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inquiries.jsonl");
        let sink = JsonlInquirySink::new(&path);

        sink.deliver(&inquiry("First")).await.unwrap();
        sink.deliver(&inquiry("Second")).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "First");
        assert_eq!(lines[1]["name"], "Second");
        assert_eq!(lines[1]["service"], "BCMS");
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlInquirySink::new(dir.path().join("missing").join("x.jsonl"));

        assert!(sink.deliver(&inquiry("Nobody")).await.is_err());
    }
}
