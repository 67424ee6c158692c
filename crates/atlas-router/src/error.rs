//! # Error Types
//!
//! Router service errors.
//!
//! Resolution itself can never fail (see `atlas-core`); the only failures at
//! this layer are channel failures - sending a command to a service that has
//! already shut down.

use thiserror::Error;

/// Result type for router handle operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Errors surfaced by [`RouterHandle`](crate::RouterHandle) operations.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The service task is gone and its command channel is closed.
    #[error("Router command channel closed: {0}")]
    ChannelClosed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouterError::ChannelClosed("service stopped".to_string());
        assert_eq!(
            format!("{}", err),
            "Router command channel closed: service stopped"
        );
    }
}
