//! Application-wide error type and its JSON representation.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by every failing JSON response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts the error into the serializable payload without consuming a response.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => {
                ("service_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<Value> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| Value::String(m.to_string()))
                            .unwrap_or_else(|| Value::String(e.code.to_string()))
                    })
                    .collect();
                (field.to_string(), Value::Array(messages))
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unavailable("x", json!({})).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_are_mapped_per_field() {
        let errors = Sample {
            name: "ab".to_string(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["fields"]["name"][0], "too short");
    }
}
