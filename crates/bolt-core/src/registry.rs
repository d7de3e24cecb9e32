use crate::error::RegistryError;
use crate::store::UrlRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, RegistryError>;

/// The URL registry: validates, deduplicates, and assigns short codes.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Validates and shortens a URL.
    ///
    /// Repeated submission of the exact same URL string returns the
    /// existing record; whether the record was found or freshly created
    /// is not distinguishable from the result.
    async fn shorten(&self, raw_url: &str) -> Result<UrlRecord>;

    /// Resolves a short code (a decimal string) to its stored record.
    ///
    /// Non-numeric input yields `MalformedCode`; a well-formed code with
    /// no matching record yields `NotFound`. No side effects.
    async fn resolve(&self, code: &str) -> Result<UrlRecord>;

    /// Returns records newest first, capped at `limit` (or the service
    /// default when `None`).
    async fn list(&self, limit: Option<usize>) -> Result<Vec<UrlRecord>>;

    /// Returns the total number of records ever created.
    async fn count(&self) -> Result<u64>;
}
