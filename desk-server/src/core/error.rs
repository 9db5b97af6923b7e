use thiserror::Error;

/// Server startup/runtime errors
///
/// Distinct from [`shared::AppError`], which is the per-request error type;
/// this covers failures around the serve loop itself.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
