//! courtbook HTTP server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtbook::adapters::http::{api_router, BookingAppState, MemberAppState, ProgramAppState};
use courtbook::adapters::postgres::{
    PostgresMemberRepository, PostgresProgramRepository, PostgresSlotRepository,
};
use courtbook::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    info!(
        environment = ?config.server.environment,
        port = config.server.port,
        "starting courtbook"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    info!("database pool ready");

    if config.database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        info!("migrations applied");
    }

    let members = Arc::new(PostgresMemberRepository::new(pool.clone()));
    let slots = Arc::new(PostgresSlotRepository::new(pool.clone()));
    let programs = Arc::new(PostgresProgramRepository::new(pool));

    let app = api_router(
        MemberAppState {
            members,
            coach_registration_key: config.coach.registration_key().to_string(),
        },
        BookingAppState {
            slots: slots.clone(),
        },
        ProgramAppState { programs, slots },
    )
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )))
    .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install shutdown handler");
    }
}
