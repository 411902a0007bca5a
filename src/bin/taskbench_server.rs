//! Runs the taskbench HTTP server.
//!
//! Configuration is read from the JSON file named by `CONFIG_FILE`, or from
//! `config/config-<APP_ENV>.json` when that is unset. A minimal file:
//!
//! ```json
//! {
//!   "port": 3000,
//!   "auth": { "secret": "change-me" },
//!   "database": { "url": "postgres://localhost/taskbench", "maxConnections": 8 },
//!   "logging": { "level": "info", "directory": "logs" }
//! }
//! ```
//!
//! Without a `database` section tasks are kept in memory. `LOG_LEVEL`
//! overrides the configured log level.

use std::sync::Arc;

use eyre::{Result, WrapErr};
use mockable::DefaultClock;
use secrecy::ExposeSecret;
use taskbench::{
    auth::{adapters::JwtCredentialVerifier, ports::CredentialVerifier},
    config::{AppConfig, DatabaseConfig, Environment, LOG_LEVEL_VAR},
    http::{self, AppState},
    task::{
        adapters::{memory::InMemoryTaskStore, postgres::PostgresTaskStore},
        ports::TaskStore,
    },
    telemetry,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let environment = Environment::from_env();
    let config = AppConfig::load(&environment)
        .inspect_err(|err| {
            telemetry::with_bootstrap_logger(|| {
                error!(
                    error = %err,
                    environment = environment.as_str(),
                    "failed to load configuration"
                );
            });
        })
        .wrap_err("failed to load configuration")?;
    let level_override = std::env::var(LOG_LEVEL_VAR).ok();
    let _log_guard = telemetry::init(
        &environment,
        &config.logging,
        config.log_level(level_override.as_deref()),
    )
    .wrap_err("failed to initialise logging")?;
    info!(environment = environment.as_str(), "configuration loaded");

    let store = open_store(config.database.as_ref())?;
    let verifier: Arc<dyn CredentialVerifier> =
        Arc::new(JwtCredentialVerifier::new(&config.auth.secret, DefaultClock));
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .wrap_err_with(|| format!("failed to bind port {}", config.port))?;

    http::serve(listener, AppState::new(store, verifier))
        .await
        .wrap_err("server terminated")
}

fn open_store(database: Option<&DatabaseConfig>) -> Result<Arc<dyn TaskStore>> {
    let Some(settings) = database else {
        info!("no database configured; using in-memory task store");
        return Ok(Arc::new(InMemoryTaskStore::new()));
    };
    let store = PostgresTaskStore::connect(
        settings.url.expose_secret(),
        settings.max_connections,
    )
    .wrap_err("failed to connect to PostgreSQL")?;
    info!(max_connections = settings.max_connections, "using PostgreSQL task store");
    Ok(Arc::new(store))
}
