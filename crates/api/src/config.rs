//! Server configuration.

use clap::Parser;

/// Item API server configuration, read from CLI flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "shelf-api", about = "In-memory item HTTP service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(short = 'H', long, env = "SHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SHELF_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Default log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHELF_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Service name reported by the health endpoint
    #[arg(long, env = "SHELF_SERVICE_NAME", default_value = "shelf-api")]
    pub service_name: String,
}

impl ServerConfig {
    /// Socket address for binding, as `host:port`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "shelf-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--service-name",
            "items",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:9100");
        assert_eq!(config.service_name, "items");
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(ServerConfig::try_parse_from(["shelf-api", "--port", "eighty"]).is_err());
    }
}
