use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use frontdesk::config::AppConfig;
use frontdesk::handlers;
use frontdesk::services::platform::http::HttpPlatform;
use frontdesk::services::roster::ScheduleCache;
use frontdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let platform = HttpPlatform::new(
        config.platform_api_url.clone(),
        config.platform_api_token.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        platform: Box::new(platform),
        schedule: ScheduleCache::new(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/calendar/day", get(handlers::calendar::day_view))
        .route("/api/calendar/grid", get(handlers::calendar::grid_view))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/bookings/preview", post(handlers::bookings::preview_booking))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/cache/refresh", post(handlers::cache::refresh_cache))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
