use std::sync::Arc;

use auth::TokenCodec;
use authhub_service::config::Config;
use authhub_service::domain::user::service::AuthService;
use authhub_service::inbound::http::router::create_router;
use authhub_service::outbound::repositories::PostgresCredentialRepository;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authhub_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "authhub-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // A missing secret already failed Config::load; a weak one fails here.
    let token_codec = TokenCodec::new(config.jwt.secret.as_bytes())?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let repository = Arc::new(PostgresCredentialRepository::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(
        repository,
        token_codec,
        Duration::hours(config.jwt.expiration_hours),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service);
    axum::serve(http_listener, application).await?;

    Ok(())
}
