//! User Registry Backend
//!
//! HTTP service for user registration, login, and account management
//! backed by SQLite.

use user_registry::{api, core, db};

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (handles CLI args, env vars, and config file)
    let config = match core::config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Print error to stderr since logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging system based on configuration
    let _logger = match core::Logger::init(&config.logging) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return Err(e);
        }
    };

    info!("Configuration loaded successfully");
    info!("Starting User Registry Backend v{}", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Server configuration"
    );
    info!(
        path = ?config.database.path,
        "Database configuration"
    );

    // Initialize database (creates parent directories and runs migrations)
    info!("Initializing database...");
    let db = std::sync::Arc::new(db::DatabaseManager::new(
        &config.database.path,
        config.database.connection_pool_size as u32,
        std::time::Duration::from_millis(config.database.busy_timeout),
    )?);
    info!("Database initialized successfully");

    if config.security.seed_users {
        seed_users(db.clone()).await?;
    }

    // Initialize API server
    info!("Initializing HTTP server...");
    let server_url = format!("http://{}:{}", config.server.host, config.server.port);
    let server = api::ApiServer::new(config, db)?;

    info!("User Registry Backend initialized successfully");
    info!(url = %server_url, "Server ready - starting to serve requests");

    // Start serving (this will block until shutdown signal)
    server.serve().await?;

    Ok(())
}

/// Insert sample accounts into an empty database
async fn seed_users(db: std::sync::Arc<db::DatabaseManager>) -> Result<()> {
    use user_registry::auth::hash_secret;
    use user_registry::db::models::User;
    use user_registry::db::repository::{Repository, UserRepository};
    use uuid::Uuid;

    let user_repo = UserRepository::new(db);
    let count = user_repo.count().await?;

    if count > 0 {
        return Ok(());
    }

    info!("No users found, seeding sample accounts...");
    let samples = [
        ("Alice Example", "alice@example.com", "Alice123"),
        ("Bob Example", "bob@example.com", "BobPass1"),
        ("Carol Example", "carol@example.com", "Carol456"),
    ];

    for (name, email, password) in samples {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_digest: hash_secret(&format!("{}{}", password, email)),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        user_repo.create(&user).await?;
        info!(email = %email, "Seeded user");
    }

    Ok(())
}
