use notification_service::api::router::build_router;
use notification_service::api::AppState;
use notification_service::config::Config;
use notification_service::database::Database;
use notification_service::models::OrganisationInfo;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "notification_service=debug,tower_http=debug,axum=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Organisation info is validated once here; an invalid file is fatal
    let organisation = OrganisationInfo::from_file(&config.organisation_config)?;
    tracing::info!(
        "Organisation configuration loaded for {}",
        organisation.name
    );

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Build application state and router
    let state = AppState::new(db, organisation);
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
