use anyhow::Result;
use common::database::{DatabaseConfig, health_check, init_pool};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marketplace::{
    AppState,
    config::AppConfig,
    create_app,
    jwt::{JwtConfig, JwtService},
    schema,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting marketplace service");

    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    schema::init_schema(&pool).await?;

    let jwt_service = JwtService::new(JwtConfig::from_app_config(&config));
    let app = create_app(AppState::new(pool, jwt_service), &config);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("Marketplace service listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
