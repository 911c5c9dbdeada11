//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`Error`](crate::domain::Error) into Actix responses here. Every failure
//! serialises as the uniform `{"error": <message>}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, InvalidUserId, PayloadErrors};

/// Generic prose for faults whose detail must never reach clients.
pub const INTERNAL_FAULT_MESSAGE: &str = "Unexpected error has occurred on the server side";

/// Error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    #[serde(skip)]
    code: ErrorCode,
    #[schema(example = "User not found")]
    error: String,
}

impl ApiError {
    /// Failure category driving the status code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message carried in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error.as_str()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidId | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound | ErrorCode::NonExistingEndpoint => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if err.code() == ErrorCode::InternalError {
            // The detailed message goes to the logs; clients get the
            // enumerated generic prose.
            error!(detail = %err, "internal fault during dispatch");
            return Self {
                code: ErrorCode::InternalError,
                error: INTERNAL_FAULT_MESSAGE.to_owned(),
            };
        }
        Self {
            code: err.code(),
            error: err.message().to_owned(),
        }
    }
}

impl From<InvalidUserId> for ApiError {
    fn from(err: InvalidUserId) -> Self {
        Error::from(err).into()
    }
}

impl From<PayloadErrors> for ApiError {
    fn from(errors: PayloadErrors) -> Self {
        Error::from(errors).into()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
