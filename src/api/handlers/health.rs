//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The inquiry queue is closed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "inquiry_queue": {
///       "status": "ok",
///       "message": "Capacity: 1000"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let queue_check = check_inquiry_queue(&state);
    let healthy = queue_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            inquiry_queue: queue_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks if the inquiry delivery queue is operational.
fn check_inquiry_queue(state: &AppState) -> CheckStatus {
    if state.contact_service.is_queue_open() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Capacity: {}",
                state.contact_service.queue_capacity()
            )),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Inquiry queue is closed".to_string()),
        }
    }
}
