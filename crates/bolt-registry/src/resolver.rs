use std::time::Duration;

use async_trait::async_trait;
use bolt_core::error::ResolveError;
use bolt_core::resolver::HostResolver;

/// Default bound on a single name-resolution attempt.
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(3);

/// Resolves hostnames through the operating system resolver.
///
/// A timeout counts as resolution failure; the registry maps both
/// outcomes to the same rejection.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_RESOLVE_TIMEOUT)
    }

    /// Creates a resolver with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // The port is irrelevant; lookup_host needs one to form a socket
        // address to resolve.
        let lookup = tokio::net::lookup_host((host, 80));

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(mut addrs)) => {
                if addrs.next().is_some() {
                    Ok(())
                } else {
                    Err(ResolveError::Unresolvable(host.to_string()))
                }
            }
            Ok(Err(err)) => Err(ResolveError::Unresolvable(format!("{host}: {err}"))),
            Err(_) => Err(ResolveError::Timeout(host.to_string())),
        }
    }
}
