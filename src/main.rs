//! Liturgy Reader API - Main Entry Point

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use liturgy_reader::application::services::{BibleService, LiturgicalService};
use liturgy_reader::infrastructure::driven_adapters::config::AppConfig;
use liturgy_reader::infrastructure::driven_adapters::database;
use liturgy_reader::infrastructure::driving_adapters::api_rest::docs::ApiDoc;
use liturgy_reader::infrastructure::driving_adapters::api_rest::handlers::{bible, liturgical};
use liturgy_reader::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use liturgy_reader::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liturgy_reader=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create the shared database pool (lazy: no connection until first use)
    let pool = database::create_pool(&config.database)?;
    tracing::info!("Database pool created");

    // Create services
    let bible_service = Arc::new(BibleService::new());
    let liturgical_service = Arc::new(LiturgicalService::new());

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        db: pool,
        bible_service,
        liturgical_service,
    };

    // Build router
    let app = Router::new()
        .nest("/bible", bible::router())
        .nest("/liturgical", liturgical::router())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server ready at http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
