//! Domain core: records, schema validation, the in-memory store, and the
//! failure taxonomy. Nothing in here knows about HTTP.

pub mod error;
pub mod store;
pub mod user;
pub mod validation;

pub use error::{Error, ErrorCode};
pub use store::UserStore;
pub use user::{InvalidUserId, User, UserId};
pub use validation::{PayloadErrors, UserDraft, ValidationMode};
