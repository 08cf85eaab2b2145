//! Asset lookup errors

use super::OpenAssetsError;

/// Creates an asset not found error
pub fn not_found(location: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::AssetNotFound {
        location: location.into(),
    }
}

/// Creates an error for a record without its category/name/type/file fields
pub fn location_missing(name: impl Into<String>) -> OpenAssetsError {
    OpenAssetsError::AssetLocationMissing { name: name.into() }
}
