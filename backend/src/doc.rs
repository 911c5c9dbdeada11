//! OpenAPI document aggregating the users API surface.
//!
//! The document is exported for tooling and tests; no documentation UI is
//! mounted because every path outside the resource surface must return the
//! JSON 404 envelope.

use utoipa::OpenApi;

/// OpenAPI description of the users CRUD surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        crate::domain::User,
        crate::domain::UserDraft,
        crate::inbound::http::ApiError,
    )),
    tags((name = "users", description = "In-memory users CRUD"))
)]
pub struct ApiDoc;
