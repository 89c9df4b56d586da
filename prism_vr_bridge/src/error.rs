//! Error types for the texture bridge
//!
//! The error surface mirrors the narrow result-code contract of the
//! consuming runtime API: every fallible operation resolves to one of
//! three failure classes, and success carries the value directly.

use std::fmt;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Texture bridge errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The session key does not name a live, registered session
    InvalidSession(String),

    /// Malformed descriptor, unsupported texture type, or stale handle
    InvalidParameter(String),

    /// Native-API failure: context gate, texture allocation, or a
    /// mirror-texture singleton violation
    RuntimeException(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSession(msg) => write!(f, "Invalid session: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::RuntimeException(msg) => write!(f, "Runtime exception: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR entry and return the matching error from the enclosing
/// function
///
/// # Example
///
/// ```no_run
/// use prism_vr_bridge::bridge_bail;
///
/// fn check(length: usize) -> prism_vr_bridge::prism::Result<()> {
///     if length == 0 {
///         bridge_bail!("prism::Example", InvalidParameter, "length must be non-zero");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bridge_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::bridge_error!($source, "{}", message);
        return Err($crate::prism::Error::$variant(message));
    }};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
