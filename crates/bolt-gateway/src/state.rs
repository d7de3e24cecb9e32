use std::sync::Arc;
use std::time::Instant;

use bolt_core::Registry;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
    started_at: Instant,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            started_at: Instant::now(),
        }
    }

    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
