//! Contact form submission.

use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::contact::ContactFormState;
use crate::domain::entities::Inquiry;
use crate::error::AppError;

/// Validates contact forms and queues them for delivery.
///
/// Delivery itself happens in [`crate::domain::inquiry_worker::run_inquiry_worker`];
/// submission never waits on the sink.
pub struct ContactService {
    sender: mpsc::Sender<Inquiry>,
}

impl ContactService {
    /// Creates a new contact service feeding `sender`.
    pub fn new(sender: mpsc::Sender<Inquiry>) -> Self {
        Self { sender }
    }

    /// Validates and queues a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field details if the form is invalid.
    /// Returns [`AppError::Unavailable`] if the delivery queue is full.
    /// Returns [`AppError::Internal`] if the delivery worker has stopped.
    pub fn submit(&self, form: ContactFormState) -> Result<Inquiry, AppError> {
        form.validate()?;

        let inquiry = Inquiry::from_form(form, Utc::now());

        match self.sender.try_send(inquiry.clone()) {
            Ok(()) => {
                info!(inquiry_id = %inquiry.id, service = %inquiry.service, "Inquiry queued");
                metrics::counter!("contact_inquiries_total").increment(1);
                Ok(inquiry)
            }
            Err(TrySendError::Full(_)) => {
                warn!(inquiry_id = %inquiry.id, "Inquiry queue full");
                Err(AppError::unavailable(
                    "Too many inquiries right now, please try again shortly",
                    json!({}),
                ))
            }
            Err(TrySendError::Closed(_)) => Err(AppError::internal(
                "Inquiry delivery is not running",
                json!({}),
            )),
        }
    }

    pub fn is_queue_open(&self) -> bool {
        !self.sender.is_closed()
    }

    /// Free slots in the delivery queue.
    pub fn queue_capacity(&self) -> usize {
        self.sender.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactField;

    fn form() -> ContactFormState {
        let mut form = ContactFormState::new("Mobile Application Testing");
        form.set_field(ContactField::Name, "Alan Turing");
        form.set_field(ContactField::Email, "alan@example.com");
        form.set_field(ContactField::Message, "Please test our banking app.");
        form
    }

    #[tokio::test]
    async fn test_submit_queues_inquiry() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = ContactService::new(tx);

        let inquiry = service.submit(form()).unwrap();
        let queued = rx.recv().await.unwrap();

        assert_eq!(queued, inquiry);
        assert_eq!(queued.service, "Mobile Application Testing");
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_queued() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = ContactService::new(tx);

        let mut bad = form();
        bad.set_field(ContactField::Email, "nope");

        let err = service.submit(bad).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_queue_is_unavailable() {
        let (tx, _rx) = mpsc::channel(1);
        let service = ContactService::new(tx);

        service.submit(form()).unwrap();
        let err = service.submit(form()).unwrap_err();

        assert!(matches!(err, AppError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_closed_queue_is_internal() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let service = ContactService::new(tx);

        assert!(!service.is_queue_open());
        assert!(matches!(
            service.submit(form()).unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
