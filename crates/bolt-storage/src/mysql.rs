use async_trait::async_trait;
use bolt_core::error::{StorageError, StorageResult};
use bolt_core::shortcode::ShortCode;
use bolt_core::store::{UrlRecord, UrlStore};
use jiff::Timestamp;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

/// Name of the counter row that owns short-code assignment.
const COUNTER_NAME: &str = "url_counter";

/// MySQL implementation of the store.
///
/// Records live in `short_urls`; the next short code comes from a
/// single-row `counters` table that is incremented and read in one
/// statement, so concurrent creations never observe the same value.
/// Records are insert-only; there is no update or delete path.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Atomically increments the counter row and returns the new value.
    ///
    /// `LAST_INSERT_ID(expr)` makes the incremented value readable from
    /// the statement result, so the increment-and-fetch is a single round
    /// trip for both the first creation and every one after it.
    async fn next_short_code(&self) -> StorageResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO counters (name, value)
            VALUES (?, LAST_INSERT_ID(1))
            ON DUPLICATE KEY UPDATE value = LAST_INSERT_ID(value + 1)
            "#,
        )
        .bind(COUNTER_NAME)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_id())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn row_to_record(row: &MySqlRow) -> StorageResult<UrlRecord> {
    let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;
    let short_code: u64 = row.try_get("short_code").map_err(map_sqlx_error)?;
    let created_at_raw: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

    let created_at = Timestamp::from_second(created_at_raw).map_err(|e| {
        StorageError::InvalidData(format!(
            "invalid created_at timestamp '{created_at_raw}': {e}"
        ))
    })?;

    Ok(UrlRecord {
        original_url,
        short_code: ShortCode::new(short_code),
        created_at,
    })
}

#[async_trait]
impl UrlStore for MySqlStore {
    async fn find_by_original_url(&self, url: &str) -> StorageResult<Option<UrlRecord>> {
        let row = sqlx::query(
            r#"
            SELECT short_code, original_url, created_at
            FROM short_urls
            WHERE original_url = ?
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn find_by_short_code(&self, code: ShortCode) -> StorageResult<Option<UrlRecord>> {
        let row = sqlx::query(
            r#"
            SELECT short_code, original_url, created_at
            FROM short_urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn create_record(&self, url: &str) -> StorageResult<UrlRecord> {
        let short_code = self.next_short_code().await?;
        let created_at = Timestamp::now();

        sqlx::query(
            r#"
            INSERT INTO short_urls (short_code, original_url, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(short_code)
        .bind(url)
        .bind(created_at.as_second())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(UrlRecord {
            original_url: url.to_owned(),
            short_code: ShortCode::new(short_code),
            created_at,
        })
    }

    async fn list_records(&self, limit: usize) -> StorageResult<Vec<UrlRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT short_code, original_url, created_at
            FROM short_urls
            ORDER BY short_code DESC
            LIMIT ?
            "#,
        )
        .bind(limit as u64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_record).collect()
    }

    async fn count_records(&self) -> StorageResult<u64> {
        let row = sqlx::query(
            r#"
            SELECT value
            FROM counters
            WHERE name = ?
            LIMIT 1
            "#,
        )
        .bind(COUNTER_NAME)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row.try_get("value").map_err(map_sqlx_error),
            None => Ok(0),
        }
    }
}
