//! Contact page and form submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::backdrop::PagePreset;
use crate::domain::contact::{ContactFormState, GENERAL_INQUIRY};
use crate::domain::theme::ThemeContext;
use crate::state::AppState;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

/// A contact form as rendered by `templates/contact_form.html`.
///
/// Shared by the contact page and every service detail page; only the
/// action URL and the fixed service differ.
#[derive(Debug, Clone)]
pub struct ContactFormView {
    pub action: String,
    pub form: ContactFormState,
    pub errors: Vec<(String, String)>,
    /// Inquiry id once a submission was accepted.
    pub submitted: Option<String>,
    /// Message shown when the inquiry could not be queued.
    pub failure: Option<String>,
}

impl ContactFormView {
    pub fn empty(action: impl Into<String>, service: &str) -> Self {
        Self {
            action: action.into(),
            form: ContactFormState::new(service),
            errors: Vec::new(),
            submitted: None,
            failure: None,
        }
    }

    /// First error message for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn phone(&self) -> &str {
        self.form.phone.as_deref().unwrap_or_default()
    }
}

/// Applies posted pairs to a fresh form for `service` and queues it.
///
/// Invalid forms come back with their values and per-field errors; an
/// accepted form comes back empty with the inquiry id.
pub fn submit_contact_form(
    state: &AppState,
    action: &str,
    service: &str,
    pairs: &[(String, String)],
) -> (StatusCode, ContactFormView) {
    let mut view = ContactFormView::empty(action, service);
    view.form
        .apply_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let errors = view.form.field_errors();
    if !errors.is_empty() {
        view.errors = errors;
        return (StatusCode::BAD_REQUEST, view);
    }

    match state.contact_service.submit(view.form.clone()) {
        Ok(inquiry) => {
            let mut done = ContactFormView::empty(action, service);
            done.submitted = Some(inquiry.id);
            (StatusCode::OK, done)
        }
        Err(e) => {
            warn!(error = %e, "Contact form submission rejected");
            view.failure = Some(e.to_error_info().message);
            (e.status(), view)
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub contact: ContactFormView,
}

fn contact_layout(state: &AppState, theme: ThemeContext) -> Layout {
    Layout::for_page(state, theme, "Contact Us", PagePreset::Contact, "/contact")
}

/// `GET /contact`
pub async fn contact_page_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
) -> impl IntoResponse {
    ContactTemplate {
        layout: contact_layout(&state, theme),
        contact: ContactFormView::empty("/contact", GENERAL_INQUIRY),
    }
}

/// Handles the general contact form.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// Re-renders the page with errors (`400`), with a confirmation (`200`),
/// or with a failure notice when the inquiry queue is unavailable (`503`).
/// A posted `service` field is ignored.
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let (status, contact) = submit_contact_form(&state, "/contact", GENERAL_INQUIRY, &pairs);
    let page = ContactTemplate {
        layout: contact_layout(&state, theme),
        contact,
    };
    (status, page).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_error_for_picks_field() {
        let mut view = ContactFormView::empty("/contact", GENERAL_INQUIRY);
        view.errors = vec![
            ("email".to_string(), "Enter a valid email address".to_string()),
            ("name".to_string(), "Name must be 2-100 characters".to_string()),
        ];

        assert_eq!(view.error_for("email"), Some("Enter a valid email address"));
        assert_eq!(view.error_for("message"), None);
    }

    #[tokio::test]
    async fn test_posted_service_is_ignored() {
        let (state, mut rx) = crate::state::tests::test_state();

        let (status, view) = submit_contact_form(
            &state,
            "/contact",
            GENERAL_INQUIRY,
            &pairs(&[
                ("name", "Katherine Johnson"),
                ("email", "kj@example.com"),
                ("service", "Free Pentest"),
                ("message", "Trajectory review for our launch systems."),
            ]),
        );

        assert_eq!(status, StatusCode::OK);
        assert!(view.submitted.is_some());
        assert_eq!(rx.recv().await.unwrap().service, GENERAL_INQUIRY);
    }

    #[test]
    fn test_invalid_submission_keeps_values() {
        let (state, _rx) = crate::state::tests::test_state();

        let (status, view) = submit_contact_form(
            &state,
            "/contact",
            GENERAL_INQUIRY,
            &pairs(&[("name", "K"), ("email", "kj@example.com"), ("message", "short")]),
        );

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(view.form.email, "kj@example.com");
        assert!(view.error_for("name").is_some());
        assert!(view.error_for("message").is_some());
        assert!(view.submitted.is_none());
    }
}
