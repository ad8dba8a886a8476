use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::sync::Arc;

use adtrack::config::Config;
use adtrack::db::{create_pool, init_db, queries, AppState};
use adtrack::handlers;
use adtrack::models::{CreateIntegration, Gateway};
use adtrack::status::StatusMap;

#[derive(Parser, Debug)]
#[command(name = "adtrack")]
#[command(about = "Webhook reconciliation backend for ad campaign tracking")]
struct Cli {
    /// Seed the database with dev data (one integration and one campaign)
    #[arg(long)]
    seed: bool,

    /// Delete the database on exit (dev mode only, useful for fresh starts)
    #[arg(long)]
    ephemeral: bool,
}

/// Seeds the database with dev data for testing webhooks locally.
/// Creates one CloudFy integration with a campaign attached, and prints
/// the webhook URL to hit. Only runs in dev mode and when the database
/// is empty.
fn seed_dev_data(state: &AppState, addr: &str) {
    let conn = state.db.get().expect("Failed to get db connection for seeding");

    let count = queries::count_integrations(&conn).expect("Failed to count integrations");
    if count > 0 {
        tracing::info!("Database already has data, skipping seed");
        return;
    }

    let integration = queries::create_integration(
        &conn,
        &CreateIntegration {
            gateway: Gateway::CloudFy,
            name: "Dev CloudFy Integration".to_string(),
        },
    )
    .expect("Failed to create dev integration");

    let campaign = queries::create_campaign(&conn, &integration.id, "Dev Campaign")
        .expect("Failed to create dev campaign");

    tracing::info!("============================================");
    tracing::info!("DEV DATA SEEDED");
    tracing::info!("Integration: {} (id: {})", integration.name, integration.id);
    tracing::info!("Campaign: {} (id: {})", campaign.name, campaign.id);
    tracing::info!(
        "Webhook URL: http://{}/webhook/{}/{}",
        addr,
        integration.gateway,
        integration.id
    );
    tracing::info!("============================================");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.dev_mode {
        tracing::info!("Running in DEVELOPMENT mode");
    }

    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
    }

    // Status map is loaded once; an override file replaces the built-in table.
    let status_map = match config.status_map_path {
        Some(ref path) => {
            let map = StatusMap::from_file(path).expect("Failed to load status map override");
            tracing::info!("Loaded status map v{} from {}", map.version(), path);
            map
        }
        None => StatusMap::builtin(),
    };
    tracing::info!("Status map version: {}", status_map.version());

    let state = AppState {
        db: db_pool,
        status_map: Arc::new(status_map),
    };

    let addr = config.addr();

    // Seed dev data if --seed flag is passed (only in dev mode)
    if cli.seed {
        if !config.dev_mode {
            tracing::warn!("--seed flag ignored: not in dev mode (set ADTRACK_ENV=dev)");
        } else {
            seed_dev_data(&state, &addr);
        }
    }

    let app = handlers::webhooks::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    let cleanup_on_exit = cli.ephemeral && config.dev_mode;
    let db_path = config.database_path.clone();

    if cleanup_on_exit {
        tracing::info!("EPHEMERAL MODE: database will be deleted on exit");
    }

    tracing::info!("adtrack server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    if cleanup_on_exit {
        tracing::info!("Cleaning up ephemeral database...");
        if let Err(e) = std::fs::remove_file(&db_path) {
            tracing::warn!("Failed to remove {}: {}", db_path, e);
        } else {
            tracing::info!("Removed {}", db_path);
        }
        let _ = std::fs::remove_file(format!("{}-wal", db_path));
        let _ = std::fs::remove_file(format!("{}-shm", db_path));
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
