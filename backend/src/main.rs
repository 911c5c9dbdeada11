//! Service entry point: logging, configuration, and listener bootstrap.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use userbase::inbound::http::state::HttpState;
use userbase::server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let state = web::Data::new(HttpState::new());
    info!(addr = %config.bind_addr(), "users service listening");
    create_server(state, config)?.await
}
