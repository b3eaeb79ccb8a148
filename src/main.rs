// src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use turnover_watch::{build_router, config::AppConfig, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("turnover_watch=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // The store is optional: without it snapshots arrive via PUT /api/v1/snapshot
    let pool = match config.database_url.as_deref() {
        Some(url) => Some(db::connect(url, config.db_max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL not set; waiting for pushed snapshots");
            None
        }
    };

    let load_on_start = config.load_snapshot_on_start;
    let port = config.port;
    let state = AppState::new(config, pool);

    if let (true, Some(pool)) = (load_on_start, state.pool.as_ref()) {
        match db::load_snapshot(pool).await {
            Ok((properties, reservations)) => {
                state.store.replace(properties, reservations);
            }
            // keep serving; POST /api/v1/snapshot/reload can retry
            Err(e) => tracing::error!(error = %e, "initial snapshot load failed"),
        }
    }

    let api = build_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API listening");

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}
