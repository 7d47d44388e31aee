//! Mapping of failures to HTTP responses.
//!
//! Every failure is rendered as `{ "success": false, "error": <message> }`. Core failures are
//! reported as 500 with their message verbatim, and so are panics raised inside a handler.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medform_core::CoreError;
use std::any::Any;

const PANIC_FALLBACK_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read (for example it exceeded the body limit).
    Rejected { status: StatusCode, message: String },
    /// The request body was declared as JSON but did not parse.
    BadRequest(String),
    /// A handler failed while building its response.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected { status, .. } => *status,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. }
            | ApiError::BadRequest(message)
            | ApiError::Internal(message) => message,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::warn!(%status, error = self.message(), "request rejected");
        }

        (status, Json(ErrorRes::new(self.message()))).into_response()
    }
}

/// Render a panic caught at the router boundary as a 500 error body.
///
/// The panic payload becomes the error message when it is a string.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        PANIC_FALLBACK_MESSAGE.to_owned()
    };

    tracing::error!("Handler panicked: {}", message);
    ApiError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_are_internal_with_verbatim_message() {
        let err = ApiError::from(CoreError::NotASequence {
            field: "medications",
            found: "undefined",
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "medications must be an array, found undefined");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn panic_payloads_become_the_error_message() {
        let response = panic_response(Box::new("form pipeline exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(String::from("formatted panic")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
