//! # spotbookd: spotbook daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Register the configured seed users
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use axum::Router;
use tracing_subscriber::EnvFilter;

use spotbook_adapter_http_axum::state::AppState;
use spotbook_adapter_storage_sqlite_sqlx::{
    SqliteReviewImageRepository, SqliteReviewRepository, SqliteSpotImageRepository,
    SqliteSpotRepository, SqliteUserRepository,
};
use spotbook_app::services::review_service::ReviewService;
use spotbook_app::services::spot_service::SpotService;
use spotbook_app::services::user_service::UserService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;
    init_tracing(&config.logging.filter);

    let app = build_app(&config).await?;

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "spotbookd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("spotbookd stopped");
    Ok(())
}

/// Open the database, seed users and wire the services into a router.
async fn build_app(config: &config::Config) -> Result<Router, Box<dyn std::error::Error>> {
    // Database
    let db = spotbook_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let spot_service = SpotService::new(
        SqliteSpotRepository::new(pool.clone()),
        SqliteSpotImageRepository::new(pool.clone()),
        SqliteReviewRepository::new(pool.clone()),
        SqliteUserRepository::new(pool.clone()),
    );
    let review_service = ReviewService::new(
        SqliteSpotRepository::new(pool.clone()),
        SqliteReviewRepository::new(pool.clone()),
        SqliteReviewImageRepository::new(pool.clone()),
        SqliteUserRepository::new(pool.clone()),
    );
    let user_service = UserService::new(SqliteUserRepository::new(pool));

    // Seed
    let seeded = user_service.seed_users(config.seed_users()).await?;
    tracing::info!(seeded, "user seeding done");

    // HTTP
    let state = AppState::new(spot_service, review_service, user_service);
    Ok(spotbook_adapter_http_axum::router::build(state))
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}, falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
