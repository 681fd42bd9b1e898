//! Contact form state.
//!
//! Mirrors the controlled inputs of the page: each field is updated on its
//! own, and the service field is fixed by the page the form lives on.

use regex::Regex;
use serde::Serialize;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for phone validation: digits, spaces and `+-()`.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]{7,20}$").unwrap());

/// Service label used when the form is not tied to a specific service page.
pub const GENERAL_INQUIRY: &str = "General Inquiry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FromStr for ContactField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "service" => Ok(Self::Service),
            "message" => Ok(Self::Message),
            _ => Err(()),
        }
    }
}

/// Contact form fields as currently entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Validate)]
pub struct ContactFormState {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(regex(path = "*PHONE_REGEX", message = "Enter a valid phone number"))]
    pub phone: Option<String>,

    pub service: String,

    #[validate(length(min = 10, max = 5000, message = "Message must be 10-5000 characters"))]
    pub message: String,
}

impl ContactFormState {
    /// Empty form for the given (read-only) service.
    pub fn new(service: impl Into<String>) -> Self {
        let service = service.into();
        let service = if service.trim().is_empty() {
            GENERAL_INQUIRY.to_string()
        } else {
            service
        };

        Self {
            service,
            ..Self::default()
        }
    }

    /// Updates exactly one field. Returns `false` for the read-only service field.
    ///
    /// A blank phone clears it, since the phone is optional.
    pub fn set_field(&mut self, field: ContactField, value: &str) -> bool {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Phone => {
                self.phone = Some(value.trim())
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
            }
            ContactField::Message => self.message = value.to_string(),
            ContactField::Service => return false,
        }
        true
    }

    /// Applies raw `name=value` pairs, ignoring unknown names and the service field.
    pub fn apply_pairs<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in pairs {
            if let Ok(field) = name.parse::<ContactField>() {
                self.set_field(field, value);
            }
        }
    }

    /// Per-field error messages for re-rendering the form.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let mut out: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    (
                        field.to_string(),
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string()),
                    )
                })
            })
            .collect();
        out.sort();
        out
    }
}
