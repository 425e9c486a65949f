use std::path::PathBuf;
use std::time::Duration;

use logship_frame::DEFAULT_MAX_PAYLOAD;

/// Well-known collector socket path used when nothing else is configured.
///
/// Client and collector must agree on this; it is deployment configuration,
/// not protocol.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/logship.sock";

/// Environment variable overriding the collector socket path process-wide.
pub const SOCKET_PATH_ENV: &str = "LOGSHIP_SOCKET";

/// Connection configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Collector socket path.
    pub socket_path: PathBuf,
    /// Client id stamped on every frame. `None` uses the OS process id.
    pub client_id: Option<i32>,
    /// Write timeout on the connection; `None` blocks until the OS gives up.
    pub write_timeout: Option<Duration>,
    /// Maximum payload size accepted by the send path.
    pub max_payload_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let socket_path = std::env::var_os(SOCKET_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH));
        Self {
            socket_path,
            client_id: None,
            write_timeout: None,
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_socket_path_honors_env_override() {
        // Single test covers both branches so no other test races the var.
        std::env::remove_var(SOCKET_PATH_ENV);
        assert_eq!(
            ClientConfig::default().socket_path,
            PathBuf::from(DEFAULT_SOCKET_PATH)
        );

        std::env::set_var(SOCKET_PATH_ENV, "/tmp/elsewhere.sock");
        assert_eq!(
            ClientConfig::default().socket_path,
            PathBuf::from("/tmp/elsewhere.sock")
        );
        std::env::remove_var(SOCKET_PATH_ENV);
    }
}
