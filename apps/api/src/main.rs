mod config;
mod errors;
mod extract;
mod form;
mod layout;
mod models;
mod prefs;
mod render;
mod routes;
mod state;
mod workspace;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::{default_page_geometry, SizingConfig};
use crate::prefs::store::JsonFileStore;
use crate::render::export::FileExporter;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workspace::Workspace;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (malformed values abort startup)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvforge v{}", env!("CARGO_PKG_VERSION"));

    let sizing = SizingConfig {
        thresholds: config.size_thresholds,
        ..SizingConfig::default()
    };
    info!(
        "Size thresholds: normal >= {}, dense >= {}",
        sizing.thresholds.normal_min, sizing.thresholds.dense_min
    );

    let page_geometry = default_page_geometry();
    info!("Export page: {}", page_geometry.css_page_rule());

    let prefs = Arc::new(JsonFileStore::new(&config.preferences_path));
    info!("Preferences at {}", config.preferences_path.display());

    let exporter = Arc::new(FileExporter::new(&config.export_dir));
    info!("Exports written to {}", config.export_dir.display());

    let state = AppState {
        workspace: Arc::new(Mutex::new(Workspace::default())),
        sizing: Arc::new(sizing),
        page_geometry,
        exporter,
        prefs,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
