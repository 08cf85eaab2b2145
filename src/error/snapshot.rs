//! Snapshot errors

use super::OpenAssetsError;

/// Creates a snapshot read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::SnapshotReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a snapshot write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::SnapshotWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
