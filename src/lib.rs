pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod store;
pub(crate) mod types;
pub(crate) mod utils;

use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::config::{Args, parse_users};
use crate::core::error::ConfigError as Error;
use crate::core::state::AppState;
use crate::store::credentials::MemoryCredentialStore;

pub async fn run() -> Result<(), Error> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let users = parse_users(&config.users)?;
    let store = MemoryCredentialStore::from_seed(&users, config.bcrypt_cost)?;

    let token_ttl = match config.token_ttl {
        0 => {
            tracing::warn!("Token expiry disabled, issued tokens never expire");
            None
        }
        secs => Some(Duration::from_secs(secs)),
    };

    let state = AppState::new(
        Arc::new(store),
        &config.secret,
        token_ttl,
        config.bcrypt_cost,
    )?;

    let app = routes::router::routes(state, config.rate_limit.max(1));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::info!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
