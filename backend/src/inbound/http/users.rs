//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users        {"username":"Ada","age":36,"hobbies":["maths"]}
//! GET    /api/users/{id}
//! PUT    /api/users/{id}   {"username":"Ada","age":37,"hobbies":[]}
//! DELETE /api/users/{id}
//! ```
//!
//! Request bodies are taken as raw bytes and decoded here: a body that fails
//! to parse as JSON flows into schema validation as an absent payload, which
//! reports it as undecodable rather than short-circuiting with a framework
//! error.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Error, User, UserDraft, UserId, ValidationMode};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Routing table for the users resource.
///
/// Routes are registered by hand rather than through route macros so each
/// resource can carry a default service: an unrecognised method on a known
/// path is an internal fault, not a 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(
                web::resource("")
                    .route(web::get().to(list_users))
                    .route(web::post().to(create_user))
                    .route(web::put().to(reject_absent_id))
                    .route(web::delete().to(reject_absent_id))
                    .default_service(web::to(unroutable_method)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_user))
                    .route(web::post().to(reject_id_on_create))
                    .route(web::put().to(update_user))
                    .route(web::delete().to(delete_user))
                    .default_service(web::to(unroutable_method)),
            ),
    );
}

/// List every user record.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All records in insertion order", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users()?.snapshot();
    Ok(web::Json(users))
}

/// Fetch one user record by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID v4)")),
    responses(
        (status = 200, description = "Matching record", body = User),
        (status = 400, description = "Malformed identifier", body = ApiError),
        (status = 404, description = "No matching record", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::parse(path.as_str())?;
    let user = state.users()?.get(id).ok_or_else(Error::not_found)?;
    Ok(web::Json(user))
}

/// Create a user record; the identifier is assigned by the service.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "Created record, identifier included", body = User),
        (status = 400, description = "Payload fails the schema", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let draft = decode_draft(&body, ValidationMode::Full)?;
    let user = state.users_mut()?.insert(draft);
    debug!(id = %user.id, "user created");
    Ok(HttpResponse::Created().json(user))
}

/// Replace every field of an existing user record.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID v4)")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Updated record", body = User),
        (status = 400, description = "Malformed identifier or invalid payload", body = ApiError),
        (status = 404, description = "No matching record", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = UserId::parse(path.as_str())?;
    // Existence is checked before the payload: an unknown id is 404 even
    // when the body is invalid.
    let mut users = state.users_mut()?;
    if users.get(id).is_none() {
        return Err(Error::not_found().into());
    }
    let draft = decode_draft(&body, ValidationMode::Partial)?;
    let user = users.replace(id, draft).ok_or_else(Error::not_found)?;
    debug!(id = %user.id, "user updated");
    Ok(web::Json(user))
}

/// Delete a user record.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID v4)")),
    responses(
        (status = 204, description = "Record removed; empty body"),
        (status = 400, description = "Malformed identifier", body = ApiError),
        (status = 404, description = "No matching record", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = UserId::parse(path.as_str())?;
    let removed = state.users_mut()?.remove(id).ok_or_else(Error::not_found)?;
    debug!(id = %removed.id, "user deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// PUT or DELETE on the resource root: the identifier segment is mandatory.
pub async fn reject_absent_id() -> ApiResult<HttpResponse> {
    Err(Error::id_absent().into())
}

/// POST on an identifier sub-path: creation must not name an id.
pub async fn reject_id_on_create() -> ApiResult<HttpResponse> {
    Err(Error::id_not_allowed().into())
}

/// Fallback for HTTP methods outside the routing table.
pub async fn unroutable_method() -> ApiResult<HttpResponse> {
    Err(Error::internal("unroutable HTTP method").into())
}

/// Application-level fallback for paths outside the resource surface.
pub async fn non_existing_endpoint() -> ApiResult<HttpResponse> {
    Err(Error::non_existing_endpoint().into())
}

fn decode_draft(body: &[u8], mode: ValidationMode) -> Result<UserDraft, ApiError> {
    let payload = serde_json::from_slice::<Value>(body).ok();
    UserDraft::try_from_payload(payload.as_ref(), mode).map_err(ApiError::from)
}
