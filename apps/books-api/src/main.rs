use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{MongoConfig, check_health_detailed, connect_from_config, disconnect};
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Build the client for `config` and probe it once.
///
/// A configuration the driver rejects leaves the service without a store; an
/// unreachable server only logs a warning because the driver reconnects lazily.
async fn open_store(config: &MongoConfig) -> Option<(Client, Database)> {
    info!("Connecting to MongoDB at {}", config.redacted_url());

    let client = match connect_from_config(config).await {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "Invalid MongoDB configuration; running without a store");
            return None;
        }
    };

    let status = check_health_detailed(&client).await;
    if status.healthy {
        info!(
            database = config.database(),
            response_time_ms = status.response_time_ms,
            "Successfully connected to MongoDB"
        );
    } else {
        warn!(
            database = config.database(),
            error = status.message.as_deref().unwrap_or("unknown"),
            "MongoDB is not reachable yet; requests will retry the connection"
        );
    }

    let db = client.database(config.database());
    Some((client, db))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let (mongo_client, db) = match config.mongodb {
        Some(ref mongo) => match open_store(mongo).await {
            Some((client, db)) => (Some(client), Some(db)),
            None => (None, None),
        },
        None => {
            warn!("DATABASE_URL and DATABASE_NAME must both be set to enable the store");
            (None, None)
        }
    };

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // API routes under /api, banner and diagnostic at the top level
    let api_routes = api::routes(&state);
    let root_routes = api::root_routes(&state);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, root_routes)?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!("Starting Books API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                disconnect(client).await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Books API shutdown complete");
    Ok(())
}
