//! User record model and identifier parsing.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use uuid::{Uuid, Variant, Version};

/// Error returned when a path segment is not a well-formed user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("UserId is invalid")]
pub struct InvalidUserId;

/// Stable user identifier in hyphenated UUID v4 form.
///
/// Identifiers are minted by the service on creation and never supplied by
/// clients; incoming path segments go through [`UserId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
pub struct UserId(Uuid);

impl UserId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the hyphenated UUID v4 textual form.
    ///
    /// Only the canonical 36-character hyphenated layout is accepted: the
    /// version nibble must be 4 and the variant RFC 4122. Simple (32 hex
    /// digits) and URN layouts are rejected even when the digits themselves
    /// form a valid UUID.
    pub fn parse(raw: &str) -> Result<Self, InvalidUserId> {
        if raw.len() != 36 {
            return Err(InvalidUserId);
        }
        let uuid = Uuid::try_parse(raw).map_err(|_| InvalidUserId)?;
        if uuid.get_version() != Some(Version::Random) {
            return Err(InvalidUserId);
        }
        if !matches!(uuid.get_variant(), Variant::RFC4122) {
            return Err(InvalidUserId);
        }
        Ok(Self(uuid))
    }

    /// Whether `raw` conforms to the identifier grammar.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record stored by the service.
///
/// ## Invariants
/// - `id` is unique within the store for the process lifetime.
/// - `hobbies` may be empty; every element is text.
///
/// `age` is carried as a raw JSON number so that `30` round-trips as `30`
/// rather than `30.0`; the schema validator accepts any JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// System-assigned identifier.
    pub id: UserId,
    /// Display name.
    #[schema(example = "Ada")]
    pub username: String,
    /// Age in years.
    #[schema(value_type = u64, example = 36)]
    pub age: Number,
    /// Ordered list of hobby names, possibly empty.
    pub hobbies: Vec<String>,
}
