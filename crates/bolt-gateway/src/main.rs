mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use crate::app::App;
use crate::cli::{StorageBackendArg, CLI};
use crate::state::AppState;
use bolt_core::Registry;
use bolt_registry::{RegistryService, SystemResolver};
use bolt_storage::{InMemoryStore, MySqlStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let resolver = SystemResolver::with_timeout(Duration::from_secs(config.resolver_timeout_secs));

    let registry: Arc<dyn Registry> = match config.storage {
        StorageBackendArg::InMemory => {
            Arc::new(RegistryService::new(InMemoryStore::new(), resolver))
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            match MySqlStore::connect(&mysql_dsn).await {
                Ok(store) => Arc::new(RegistryService::new(store, resolver)),
                Err(err) => {
                    // Records created in this mode do not survive a restart.
                    warn!(error = %err, "mysql unavailable, falling back to in-memory store");
                    Arc::new(RegistryService::new(InMemoryStore::new(), resolver))
                }
            }
        }
    };

    let router = App::router(AppState::new(registry));
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
