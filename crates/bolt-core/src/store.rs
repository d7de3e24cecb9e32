use crate::error::StorageResult;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL record.
///
/// Records are created exactly once on the first successful shorten of a
/// new URL string and are never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The validated URL, stored verbatim (case-preserving).
    pub original_url: String,
    /// The monotonically assigned short code.
    pub short_code: ShortCode,
    /// When the record was created. Informational only.
    pub created_at: Timestamp,
}

/// The persistence capability behind the registry.
///
/// Both implementations (process-local map, MySQL) satisfy the same
/// contract: codes are unique, strictly increasing, and assigned
/// atomically with respect to concurrent `create_record` calls. The store
/// is the sole owner of the counter and the record set.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Looks up a record by its exact original URL string.
    async fn find_by_original_url(&self, url: &str) -> StorageResult<Option<UrlRecord>>;

    /// Looks up a record by its short code.
    async fn find_by_short_code(&self, code: ShortCode) -> StorageResult<Option<UrlRecord>>;

    /// Assigns the next short code and persists a new record.
    async fn create_record(&self, url: &str) -> StorageResult<UrlRecord>;

    /// Returns up to `limit` records, newest first (descending code).
    async fn list_records(&self, limit: usize) -> StorageResult<Vec<UrlRecord>>;

    /// Returns the total number of records ever created, which equals the
    /// highest assigned short code (0 when empty).
    async fn count_records(&self) -> StorageResult<u64>;
}
