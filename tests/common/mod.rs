#![allow(dead_code)]

use axum::{Router, routing::get};
use consulting_site::api;
use consulting_site::api::handlers::health_handler;
use consulting_site::application::services::ContactService;
use consulting_site::domain::contact::{ContactField, ContactFormState};
use consulting_site::domain::entities::Inquiry;
use consulting_site::domain::theme::ThemeContext;
use consulting_site::state::AppState;
use consulting_site::web;
use consulting_site::web::handlers::not_found_handler;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn create_test_state() -> (AppState, mpsc::Receiver<Inquiry>) {
    create_test_state_with(100, ThemeContext::dark())
}

pub fn create_test_state_with(
    capacity: usize,
    default_theme: ThemeContext,
) -> (AppState, mpsc::Receiver<Inquiry>) {
    let (tx, rx) = mpsc::channel(capacity);
    let contact_service = Arc::new(ContactService::new(tx));

    (AppState::new(contact_service, default_theme), rx)
}

/// Every route of the site without the per-IP rate limiters, which need a
/// peer address the test transport does not provide.
pub fn site_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(web::routes::form_routes())
        .route("/health", get(health_handler))
        .nest(
            "/api",
            api::routes::api_routes().merge(api::routes::backdrop_routes()),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn valid_form(service: &str) -> ContactFormState {
    let mut form = ContactFormState::new(service);
    form.set_field(ContactField::Name, "Ada Lovelace");
    form.set_field(ContactField::Email, "ada@example.com");
    form.set_field(ContactField::Message, "We need help with our ISO 27001 scope.");
    form
}
