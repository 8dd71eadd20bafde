use std::sync::Arc;

use chrono::Duration;
use roster_service::config::Config;
use roster_service::domain::auth::service::AuthService;
use roster_service::inbound::http::router::create_router;
use roster_service::outbound::repositories::InMemorySessionRepository;
use roster_service::outbound::repositories::InMemoryUserRepository;
use roster_service::seed::seed_demo_users;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "roster-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        session_ttl_hours = config.session.ttl_hours,
        seed_demo_users = config.seed.demo_users,
        "Configuration loaded"
    );

    // Stores live for the whole process and reset with it; every consumer
    // gets the same instances by reference, never ambient globals.
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let session_repository = Arc::new(InMemorySessionRepository::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&session_repository),
        Duration::hours(config.session.ttl_hours),
    ));

    if config.seed.demo_users {
        seed_demo_users(user_repository.as_ref()).await?;
        tracing::info!("Demo users seeded (password: password123)");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(Arc::clone(&auth_service));
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
