//! Server construction and middleware wiring.

mod config;

pub use config::{DEFAULT_PORT, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, NormalizePath};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::middleware::RequestLog;

/// Assemble the application: middleware, the users routing table, and the
/// catch-all for paths outside the resource surface.
///
/// Path normalisation trims trailing slashes, so `/api/users/` addresses the
/// resource root and `/api/users/{id}/` the identifier sub-path. The default
/// headers mirror the wire contract: every response is JSON and cross-origin
/// access is unrestricted.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(RequestLog)
        .wrap(
            DefaultHeaders::new()
                .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
                .add((header::CONTENT_TYPE, "application/json")),
        )
        .wrap(NormalizePath::trim())
        .configure(users::configure)
        .default_service(web::to(users::non_existing_endpoint))
}

/// Construct an Actix HTTP server over the shared state.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: web::Data<HttpState>, config: ServerConfig) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn unknown_paths_return_the_endpoint_error() {
        let app = actix_test::init_service(build_app(web::Data::new(HttpState::new()))).await;
        let request = actix_test::TestRequest::get().uri("/api/products").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        assert_eq!(value, json!({"error": "Non-existing endpoint"}));
    }

    #[actix_web::test]
    async fn responses_carry_the_cors_and_content_type_headers() {
        let app = actix_test::init_service(build_app(web::Data::new(HttpState::new()))).await;
        let request = actix_test::TestRequest::get().uri("/api/users").to_request();
        let response = actix_test::call_service(&app, request).await;
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[actix_web::test]
    async fn trailing_slash_addresses_the_resource_root() {
        let app = actix_test::init_service(build_app(web::Data::new(HttpState::new()))).await;
        let request = actix_test::TestRequest::get().uri("/api/users/").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn create_server_binds_an_ephemeral_port() {
        let config = ServerConfig::new(std::net::SocketAddr::from(([127, 0, 0, 1], 0)));
        let server = create_server(web::Data::new(HttpState::new()), config);
        assert!(server.is_ok(), "server should bind an ephemeral port");
    }
}
