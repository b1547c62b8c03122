//! HTTP server configuration.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::Parser;

/// Command-line configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "random-misc-api", version, about = "Random data generation API")]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// TCP port to listen on.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the configured bind address.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not a valid IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        let config = ServerConfig::parse_from(["random-misc-api"]);
        let addr = config.bind_addr().expect("valid default address");
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn flags_override_the_defaults() {
        let config =
            ServerConfig::parse_from(["random-misc-api", "--host", "127.0.0.1", "--port", "9000"]);
        let addr = config.bind_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn invalid_host_is_rejected() {
        let config = ServerConfig::parse_from(["random-misc-api", "--host", "not-an-ip"]);
        assert!(config.bind_addr().is_err());
    }
}
