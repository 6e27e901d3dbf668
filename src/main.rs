use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workshop::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workshop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let profile = config::profile_from_args(std::env::args());
    let config = config::Config::from_env(profile);
    tracing::info!(profile = %config.profile, "Starting workshop");

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if config.is_test_profile() {
        tracing::info!("Seeding test data...");
        if let Err(e) = seed::seed_test_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
            std::process::exit(1);
        }
    }

    let app = server::build_router(db, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }
}
