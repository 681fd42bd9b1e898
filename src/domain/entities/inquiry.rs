//! Contact inquiry entity handed to delivery sinks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::contact::ContactFormState;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Inquiry {
    /// Builds an inquiry with a fresh random id.
    ///
    /// The caller is expected to have validated the form.
    pub fn from_form(form: ContactFormState, received_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("inq_{:016x}", rand::random::<u64>()),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.map(|p| p.trim().to_string()),
            service: form.service,
            message: form.message.trim().to_string(),
            received_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactField;

    #[test]
    fn test_from_form_trims_and_assigns_id() {
        let mut form = ContactFormState::new("GRC Advisory");
        form.set_field(ContactField::Name, "  Ada Lovelace ");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Message, "We need an ISO 27001 gap analysis.");

        let a = Inquiry::from_form(form.clone(), Utc::now());
        let b = Inquiry::from_form(form, Utc::now());

        assert_eq!(a.name, "Ada Lovelace");
        assert_eq!(a.service, "GRC Advisory");
        assert!(a.phone.is_none());
        assert!(a.id.starts_with("inq_"));
        assert_eq!(a.id.len(), 20);
        assert_ne!(a.id, b.id);
    }
}
