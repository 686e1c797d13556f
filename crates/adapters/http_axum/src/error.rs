//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use spotbook_domain::error::{ConflictError, ForbiddenError, SpotbookError, ValidationErrors};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    title: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

impl ErrorBody {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            errors: None,
        }
    }
}

/// Everything a handler can fail with.
pub enum ApiError {
    /// An error raised by the application services.
    Domain(SpotbookError),
    /// The request carries no usable caller identity.
    Unauthorized,
    /// The JSON body could not be extracted.
    Json(JsonRejection),
}

impl From<SpotbookError> for ApiError {
    fn from(err: SpotbookError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Json(rejection)
    }
}

fn domain_response(err: SpotbookError) -> (StatusCode, ErrorBody) {
    match err {
        SpotbookError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBody {
                errors: Some(errors),
                ..ErrorBody::new("Validation error", "Bad Request")
            },
        ),
        SpotbookError::NotFound(err) => (
            StatusCode::NOT_FOUND,
            ErrorBody::new(format!("{} Not Found", err.entity), err.to_string()),
        ),
        SpotbookError::Forbidden(err) => {
            let title = match err {
                ForbiddenError::NotOwner => "Forbidden",
                ForbiddenError::OwnSpotReview => "No review for your own spot",
            };
            (StatusCode::FORBIDDEN, ErrorBody::new(title, err.to_string()))
        }
        SpotbookError::Conflict(err) => {
            let title = match err {
                ConflictError::DuplicateReview => "Review already exists",
                ConflictError::DuplicateUser => "User already exists",
            };
            (StatusCode::CONFLICT, ErrorBody::new(title, err.to_string()))
        }
        SpotbookError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Internal Server Error", "internal server error"),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Domain(err) => domain_response(err),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Authentication required", "Authentication required"),
            ),
            Self::Json(rejection) => {
                let status = rejection.status();
                let title = status.canonical_reason().unwrap_or("Bad Request");
                (status, ErrorBody::new(title, rejection.body_text()))
            }
        };

        (status, Json(body)).into_response()
    }
}
