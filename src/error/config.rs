//! Configuration errors

use super::OpenAssetsError;

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::ConfigInvalid {
        message: message.into(),
    }
}
