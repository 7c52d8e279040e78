//! Platform error types

use thiserror::Error;

/// Platform-related errors
///
/// Unavailable geometry is deliberately NOT represented here: a window
/// that cannot answer an inset query yet is a normal no-op path, not a
/// failure. These variants cover calls into the host environment that
/// went wrong for other reasons.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Platform not supported on this OS or OS version
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Host facility exists but is not currently available
    #[error("Platform not available: {0}")]
    Unavailable(String),

    /// A call into the host windowing environment failed
    #[error("Host call failed: {0}")]
    Host(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
