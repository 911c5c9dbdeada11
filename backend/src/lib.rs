//! In-memory users CRUD service.
//!
//! A single `user` resource exposed over HTTP at `/api/users`, backed by a
//! process-memory store. The domain core (records, schema validation, store,
//! failure taxonomy) is transport agnostic; the inbound HTTP adapter maps it
//! onto status codes and the uniform `{"error": ...}` envelope.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
