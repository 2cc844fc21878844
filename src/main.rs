use langify::{config::ServerConfig, db, handlers, AppState};

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "langify=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    // Database connection
    let pool = db::create_pool(&config).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );

    db::run_migrations(&pool).await?;
    tracing::info!("Migrations applied");

    let app_state = AppState::new(pool);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app: Router = handlers::api_router(app_state);

    if let Some(static_dir) = &config.static_dir {
        tracing::info!(dir = %static_dir.display(), "Serving frontend assets");
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
