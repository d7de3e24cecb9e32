use crate::error::ResolveError;
use async_trait::async_trait;

/// Name-resolution capability used during URL validation.
///
/// Resolution is the only validation step that may block, so it is
/// injected into the registry rather than hard-coded; tests substitute a
/// stub instead of touching the system resolver.
#[async_trait]
pub trait HostResolver: Send + Sync + 'static {
    /// Succeeds when the hostname resolves to at least one address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
