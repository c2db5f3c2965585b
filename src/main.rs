mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
};
use state::AppState;
use store::ProverbStore;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine (plain process env); an unreadable one is not.
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => return Err(err).context("Failed to read .env file"),
    }

    tracing_subscriber::fmt::init();

    tracing::info!("proverbs-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = ProverbStore::load(&config.data_file)?;

    let data_file = config.data_file.clone();
    let addr = format!("{}:{}", config.host_address, config.host_port);

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::PROVERBS, get(list_handler).post(create_handler))
        .route(
            routes::PROVERB_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("API server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Draining: in-flight requests have completed, snapshot before exit.
    // A failed save is logged and the process still exits cleanly.
    tracing::info!("Saving proverbs...");
    if let Err(err) = store.save(&data_file).await {
        tracing::error!("Failed to save proverbs: {:#}", err);
    }
    tracing::info!("Bye.");

    Ok(())
}

/// Resolves on the first SIGINT or SIGTERM, starting graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
