use thiserror::Error;

/// Result type for backing-store operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("hostname did not resolve: {0}")]
    Unresolvable(String),
    #[error("name resolution timed out: {0}")]
    Timeout(String),
}

/// Errors returned by registry operations.
///
/// `InvalidUrl`, `MalformedCode`, and `NotFound` are ordinary domain
/// outcomes and must never abort the request; only `Storage` is allowed
/// to surface as a server failure.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("malformed short code: {0}")]
    MalformedCode(String),
    #[error("no record for short code {0}")]
    NotFound(u64),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for RegistryError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
