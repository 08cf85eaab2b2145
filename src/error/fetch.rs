//! Network fetch errors

use super::OpenAssetsError;

/// Creates an error for a non-success HTTP response
pub fn failed(url: impl Into<String>, status: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::FetchFailed {
        url: url.into(),
        status: status.into(),
    }
}

/// Creates a transport-level HTTP error
pub fn http_error(message: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::HttpError {
        message: message.into(),
    }
}
