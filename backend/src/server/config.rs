//! Server configuration sourced from the environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tracing::warn;

/// Port used when `PORT` is absent or unparsable.
pub const DEFAULT_PORT: u16 = 4000;

/// Runtime configuration for the HTTP listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration binding to an explicit address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read the listening port from `PORT`, falling back to
    /// [`DEFAULT_PORT`] when the variable is absent or not a port number.
    #[must_use]
    pub fn from_env() -> Self {
        let port = parse_port(env::var("PORT").ok().as_deref());
        Self::new(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            port,
        )))
    }

    /// Address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(value, "PORT is not a valid port number, using the default");
            DEFAULT_PORT
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None, DEFAULT_PORT)]
    #[case::valid(Some("8080"), 8080)]
    #[case::padded(Some(" 8080 "), 8080)]
    #[case::empty(Some(""), DEFAULT_PORT)]
    #[case::not_a_number(Some("users"), DEFAULT_PORT)]
    #[case::out_of_range(Some("70000"), DEFAULT_PORT)]
    #[case::negative(Some("-1"), DEFAULT_PORT)]
    fn parse_port_defaults_on_invalid_input(#[case] raw: Option<&str>, #[case] expected: u16) {
        assert_eq!(parse_port(raw), expected);
    }
}
