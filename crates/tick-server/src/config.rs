//! Server configuration.

use serde::{Deserialize, Serialize};

/// Bind configuration for the Tick server.
///
/// The default binds the loopback interface on an ephemeral port, which is
/// what tests want; the binary overrides both from its CLI flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind; `0` asks the OS for a free port.
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
        }
    }
}
