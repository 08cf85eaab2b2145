//! HTTP server errors

use super::OpenAssetsError;

/// Creates an error for a server that failed to bind or stopped unexpectedly
pub fn failed(message: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::ServerFailed {
        message: message.into(),
    }
}
