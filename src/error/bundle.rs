//! Archive build errors

use super::OpenAssetsError;

/// Creates an archive build failed error
pub fn build_failed(name: impl Into<String>, reason: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::ArchiveBuildFailed {
        name: name.into(),
        reason: reason.into(),
    }
}
