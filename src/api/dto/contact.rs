//! DTOs for the contact endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::contact::{ContactField, ContactFormState};
use crate::domain::entities::Inquiry;

/// JSON contact submission.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Builds the form state field by field, as the page's inputs would.
    pub fn into_form(self) -> ContactFormState {
        let mut form = ContactFormState::new(self.service.unwrap_or_default());
        form.set_field(ContactField::Name, &self.name);
        form.set_field(ContactField::Email, &self.email);
        form.set_field(ContactField::Phone, self.phone.as_deref().unwrap_or(""));
        form.set_field(ContactField::Message, &self.message);
        form
    }
}

/// Acknowledgement returned once an inquiry is queued.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub id: String,
    pub service: String,
    pub received_at: DateTime<Utc>,
}

impl From<Inquiry> for ContactAccepted {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            service: inquiry.service,
            received_at: inquiry.received_at,
        }
    }
}
