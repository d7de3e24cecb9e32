use std::sync::Arc;

use async_trait::async_trait;
use bolt_core::error::RegistryError;
use bolt_core::registry::Registry;
use bolt_core::resolver::HostResolver;
use bolt_core::shortcode::ShortCode;
use bolt_core::store::{UrlRecord, UrlStore};
use tracing::debug;
use url::Url;

type Result<T> = std::result::Result<T, RegistryError>;

/// Cap applied to `list` when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// A concrete implementation of the `Registry` trait.
///
/// Wraps a `UrlStore` and a `HostResolver` to handle:
/// - URL validation (syntax, scheme, resolvable host)
/// - Dedup on the exact URL string
/// - Monotonic short code assignment via the store
///
/// Codes are assigned only after validation succeeds, so rejected
/// submissions never consume a code.
#[derive(Debug, Clone)]
pub struct RegistryService<S, R> {
    store: Arc<S>,
    resolver: Arc<R>,
}

impl<S: UrlStore, R: HostResolver> RegistryService<S, R> {
    /// Creates a new `RegistryService` over a store and a resolver.
    pub fn new(store: S, resolver: R) -> Self {
        Self {
            store: Arc::new(store),
            resolver: Arc::new(resolver),
        }
    }

    /// Checks syntax and scheme, returning the hostname to resolve.
    ///
    /// Only absolute `http`/`https` URLs with a host are accepted. The
    /// scheme comparison runs against the parsed (lowercased) scheme.
    fn validate_url(url: &str) -> Result<String> {
        let parsed =
            Url::parse(url).map_err(|e| RegistryError::InvalidUrl(format!("{url}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(RegistryError::InvalidUrl(format!(
                    "scheme must be http or https, got {other}"
                )))
            }
        }

        match parsed.host_str() {
            Some(host) => Ok(host.to_owned()),
            None => Err(RegistryError::InvalidUrl(format!("missing host: {url}"))),
        }
    }
}

#[async_trait]
impl<S: UrlStore, R: HostResolver> Registry for RegistryService<S, R> {
    async fn shorten(&self, raw_url: &str) -> Result<UrlRecord> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::InvalidUrl("url is empty".to_string()));
        }

        let host = Self::validate_url(trimmed)?;
        self.resolver.resolve(&host).await.map_err(|e| {
            debug!(url = trimmed, error = %e, "hostname failed to resolve");
            RegistryError::InvalidUrl(format!("unresolvable host: {e}"))
        })?;

        if let Some(existing) = self.store.find_by_original_url(trimmed).await? {
            debug!(code = %existing.short_code, "url already shortened");
            return Ok(existing);
        }

        // Two concurrent submissions of the same new URL can both miss the
        // lookup above and mint two codes; the store does not enforce
        // uniqueness on the URL string.
        let record = self.store.create_record(trimmed).await?;
        debug!(code = %record.short_code, url = trimmed, "created url record");
        Ok(record)
    }

    async fn resolve(&self, code: &str) -> Result<UrlRecord> {
        let code = ShortCode::parse(code)?;
        self.store
            .find_by_short_code(code)
            .await?
            .ok_or(RegistryError::NotFound(code.value()))
    }

    async fn list(&self, limit: Option<usize>) -> Result<Vec<UrlRecord>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        Ok(self.store.list_records(limit).await?)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.store.count_records().await?)
    }
}
