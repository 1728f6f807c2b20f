//! Binary error type.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use site::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("{action} `{}`: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("serializing structured data: {0}")]
    StructuredData(#[from] serde_json::Error),
    #[error("formatting build timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("binding {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
    #[error("server failed: {0}")]
    Serve(io::Error),
    #[error("dev server already running (lock `{}` held by pid {pid}); pass --clean if it crashed", path.display())]
    DevLockHeld { path: PathBuf, pid: String },
}

impl AppError {
    /// Adapter for `map_err` that records what was being done to which path.
    pub fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_owned();
        move |source| Self::Io { action, path, source }
    }
}
