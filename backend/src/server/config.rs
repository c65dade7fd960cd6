//! Server configuration: environment-backed settings plus the assembled
//! configuration object handed to [`super::create_server`].

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "data";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}

/// Settings loaded from CLI arguments, `MURAL_*` environment variables, and
/// the optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MURAL")]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Root directory for persisted state: PDF blobs, photo blobs, and the
    /// JSON documents.
    #[ortho_config(default = PathBuf::from(DEFAULT_DATA_DIR))]
    pub data_dir: PathBuf,
    /// Prebuilt SPA bundle directory. Unset runs the API-only variant.
    pub static_dir: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to port 3001 on
    /// all interfaces.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the configured data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Return the configured SPA bundle directory, if any.
    #[must_use]
    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Construct a server configuration binding to `bind_addr`.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            static_dir: None,
        }
    }

    /// Attach the SPA bundle directory for the combined deployment.
    #[must_use]
    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
