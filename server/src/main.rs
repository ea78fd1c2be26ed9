mod security;

use app::{AppConfig, AppState};
use axum::{Router, http::StatusCode, middleware, response::Json, routing::get};
use dotenvy::dotenv;
use security::{security_headers, validate_production_env};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "search-app",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

fn build_app(state: AppState) -> Router {
    app::router(state)
        .route("/health", get(health_handler))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() {
    // `.env` may carry RUST_LOG, so it is loaded before the subscriber.
    let env_file = dotenv();

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(log_filter())
        .init();

    if env_file.is_err() {
        warn!("There is no corresponding .env file");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {}", err);
            return;
        }
    };

    if let Err(problems) = validate_production_env(&config) {
        for problem in &problems {
            error!("{}", problem);
        }
        return;
    }
    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set; using the built-in development default");
    }

    let addr = config.site_addr;
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            error!("Failed to initialise application state: {}", err);
            return;
        }
    };
    let app = build_app(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    info!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;
    match serve_result {
        Ok(()) => {
            info!("Server shutdown gracefully");
        }
        Err(err) => {
            error!("Failed to serve app: {}", err);
            error!("Error details: {:?}", err);
        }
    }
}
