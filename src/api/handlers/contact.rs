//! Handler for JSON contact submissions.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::contact::{ContactAccepted, ContactRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Validates an inquiry and queues it for delivery.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "phone": "+44 20 7946 0958",
///   "service": "Vendor Risk Assessment",
///   "message": "We onboard around forty suppliers a quarter."
/// }
/// ```
///
/// `phone` and `service` are optional; a missing service becomes
/// `General Inquiry`.
///
/// # Response Codes
///
/// - **202 Accepted**: Inquiry queued; body carries its id
/// - **400 Bad Request**: Validation failed; `details.fields` lists messages per field
/// - **503 Service Unavailable**: Delivery queue is full
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactAccepted>), AppError> {
    let inquiry = state.contact_service.submit(payload.into_form())?;
    Ok((StatusCode::ACCEPTED, Json(ContactAccepted::from(inquiry))))
}
