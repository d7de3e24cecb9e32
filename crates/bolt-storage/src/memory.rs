use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bolt_core::error::{StorageError, StorageResult};
use bolt_core::shortcode::ShortCode;
use bolt_core::store::{UrlRecord, UrlStore};
use jiff::Timestamp;

#[derive(Debug, Default)]
struct Inner {
    /// Highest code assigned so far; the next record gets `counter + 1`.
    counter: u64,
    by_code: BTreeMap<u64, UrlRecord>,
    code_by_url: HashMap<String, u64>,
}

/// In-memory implementation of the store.
///
/// One mutex guards the counter and both indexes, so the
/// read-increment-write on the counter happens atomically with the
/// insert. All state is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Operation("store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl UrlStore for InMemoryStore {
    async fn find_by_original_url(&self, url: &str) -> StorageResult<Option<UrlRecord>> {
        let inner = self.lock()?;
        Ok(inner
            .code_by_url
            .get(url)
            .and_then(|code| inner.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(&self, code: ShortCode) -> StorageResult<Option<UrlRecord>> {
        Ok(self.lock()?.by_code.get(&code.value()).cloned())
    }

    async fn create_record(&self, url: &str) -> StorageResult<UrlRecord> {
        let mut inner = self.lock()?;
        inner.counter += 1;
        let record = UrlRecord {
            original_url: url.to_owned(),
            short_code: ShortCode::new(inner.counter),
            created_at: Timestamp::now(),
        };

        let code = inner.counter;
        inner.by_code.insert(code, record.clone());
        inner.code_by_url.insert(url.to_owned(), code);
        Ok(record)
    }

    async fn list_records(&self, limit: usize) -> StorageResult<Vec<UrlRecord>> {
        let inner = self.lock()?;
        Ok(inner.by_code.values().rev().take(limit).cloned().collect())
    }

    async fn count_records(&self) -> StorageResult<u64> {
        Ok(self.lock()?.counter)
    }
}
