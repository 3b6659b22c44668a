use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::advisor::TipsAdvisor;
use crate::api;
use crate::config::WeatherWiseConfig;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: `/api` routes plus CORS, body limit, timeout and tracing layers.
pub fn app(advisor: TipsAdvisor, config: &WeatherWiseConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // One forecast call plus up to three LLM calls, each with its own timeout
    let request_timeout = Duration::from_secs(
        u64::from(config.weather.timeout_seconds) + 3 * u64::from(config.llm.timeout_seconds) + 5,
    );

    Router::new()
        .nest("/api", api::router(advisor))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &WeatherWiseConfig, advisor: TipsAdvisor) -> Result<()> {
    let app = app(advisor, config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
