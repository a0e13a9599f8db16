//! Error types for blockdown

use thiserror::Error;

/// Main error type for blockdown operations.
///
/// Parsing itself is total and never fails; errors only arise in the
/// configuration and I/O layers around it, which is why there is no
/// parse variant here.
#[derive(Error, Debug)]
pub enum BlockdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for blockdown operations
pub type Result<T> = std::result::Result<T, BlockdownError>;
