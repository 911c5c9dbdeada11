//! Domain-level failure taxonomy.
//!
//! These errors are transport agnostic; the inbound HTTP adapter maps them to
//! status codes and the `{"error": ...}` envelope. Domain-predictable
//! outcomes (not-found, invalid id, validation failure) travel as ordinary
//! values so callers cannot forget to handle them; only genuinely unexpected
//! conditions use [`ErrorCode::InternalError`].

use super::user::InvalidUserId;
use super::validation::PayloadErrors;

/// Stable machine-readable failure category.
///
/// The set is closed: tests match on the category, while the human-readable
/// prose stays in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The path's identifier segment is not well formed.
    InvalidId,
    /// The payload misses, mistypes, or over-supplies schema fields.
    ValidationFailed,
    /// A well-formed identifier with no matching record, or a structurally
    /// disallowed route/method combination on the resource.
    NotFound,
    /// A path outside the resource surface.
    NonExistingEndpoint,
    /// An unexpected condition during dispatch; never leaks detail.
    InternalError,
}

/// Domain error carrying a failure category and its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The path's identifier segment failed to parse.
    #[must_use]
    pub fn invalid_id() -> Self {
        Self::new(ErrorCode::InvalidId, "UserId is invalid")
    }

    /// No record matches a well-formed identifier.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound, "User not found")
    }

    /// PUT or DELETE addressed the resource root without an identifier.
    #[must_use]
    pub fn id_absent() -> Self {
        Self::new(
            ErrorCode::NotFound,
            "User id is absent. Please, enter user id to endpoint",
        )
    }

    /// POST addressed an identifier sub-path; creation must not name an id.
    #[must_use]
    pub fn id_not_allowed() -> Self {
        Self::new(
            ErrorCode::NotFound,
            "You are not allowed to send id to endpoint in method POST",
        )
    }

    /// The path lies outside the resource surface.
    #[must_use]
    pub fn non_existing_endpoint() -> Self {
        Self::new(ErrorCode::NonExistingEndpoint, "Non-existing endpoint")
    }

    /// An unexpected condition during dispatch. The message is for logs
    /// only; the HTTP adapter redacts it before responding.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<InvalidUserId> for Error {
    fn from(_: InvalidUserId) -> Self {
        Self::invalid_id()
    }
}

impl From<PayloadErrors> for Error {
    fn from(errors: PayloadErrors) -> Self {
        Self::new(ErrorCode::ValidationFailed, errors.to_string())
    }
}
