//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
