//! Profile Service
//!
//! REST API for user profiles and résumé sections.
//! Reads configuration from a TOML file (`$PROFILE_CONFIG` or
//! ~/.config/profile-service/config.toml).

use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use profile_service::config::{LogFormat, LoggingConfig};
use profile_service::infrastructure::crypto::jwt::JwtConfig;
use profile_service::shared::shutdown::ShutdownSignal;
use profile_service::{create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&app_cfg.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!(
            "Failed to load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
    }

    info!("Starting Profile Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::new(app_cfg.database.url.clone());
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let jwt_config = JwtConfig::from(&app_cfg.security);
    info!(
        access_ttl_minutes = jwt_config.access_ttl.num_minutes(),
        refresh_ttl_days = jwt_config.refresh_ttl.num_days(),
        "JWT configured"
    );

    let api_router = create_api_router(db.clone(), jwt_config);

    // ── Shutdown ───────────────────────────────────────────────
    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_os_signals();

    // ── REST API server ────────────────────────────────────────
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown.clone();
    let mut api_server = tokio::spawn(async move {
        axum::serve(listener, api_router)
            .with_graceful_shutdown(async move {
                api_shutdown.wait().await;
                info!("REST API server received shutdown signal");
            })
            .await
    });

    let drain_timeout = Duration::from_secs(app_cfg.server.shutdown_timeout);
    let result = tokio::select! {
        result = &mut api_server => Some(result),
        _ = shutdown.wait() => {
            match tokio::time::timeout(drain_timeout, &mut api_server).await {
                Ok(result) => Some(result),
                Err(_) => {
                    warn!("Connections still open after {:?}, aborting", drain_timeout);
                    api_server.abort();
                    None
                }
            }
        }
    };

    match result {
        Some(Ok(Ok(()))) => info!("REST API server stopped"),
        Some(Ok(Err(e))) => error!("REST API server error: {}", e),
        Some(Err(e)) => error!("REST API server task panicked: {}", e),
        None => {}
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Profile Service shutdown complete");
    Ok(())
}
