//! Environment-driven configuration
//!
//! Everything is read once at startup from the process environment
//! (optionally seeded by a `.env` file, see `main`). The core receives
//! already-resolved values; no component reads the environment on the
//! request path.

use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Capacity K of the in-memory request-log ring.
    pub buffer_capacity: usize,
    /// Every T observed requests trigger one archive batch write.
    pub flush_threshold: usize,
    /// Upper bound on a single archive write before it is abandoned.
    pub archive_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            buffer_capacity: env::var("LOG_BUFFER_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(3),
            flush_threshold: env::var("LOG_FLUSH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(10),
            archive_timeout: Duration::from_secs(
                env::var("ARCHIVE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_env();
        assert!(config.buffer_capacity > 0);
        assert!(config.flush_threshold > 0);
        assert!(config.archive_timeout >= Duration::from_secs(1));
    }

    #[test]
    fn test_bind_address_format() {
        let config = Config {
            server_host: "0.0.0.0".to_string(),
            server_port: 9000,
            buffer_capacity: 3,
            flush_threshold: 10,
            archive_timeout: Duration::from_secs(10),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
