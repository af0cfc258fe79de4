//! Wishlist server - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wishlist_server::api::routes;
use wishlist_server::infrastructure::clock::SystemClock;
use wishlist_server::infrastructure::ports::ClockPort;
use wishlist_server::infrastructure::wishes::SqliteWishRepo;
use wishlist_server::use_cases::AdminGate;
use wishlist_server::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the server runs from `crates/server`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wishlist_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wishlist server");

    // Load configuration
    let db_path = std::env::var("WISHLIST_DB").unwrap_or_else(|_| "wishlist.db".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Admin credentials. The gate rejects every administrative request until
    // both are set; the secret itself is never logged.
    let admin_email = std::env::var("ADMIN_EMAIL").unwrap_or_default();
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_default();
    if admin_email.trim().is_empty() || admin_password.is_empty() {
        tracing::warn!(
            "ADMIN_EMAIL / ADMIN_PASSWORD not set; administrative operations will be rejected"
        );
    }
    let gate = Arc::new(AdminGate::configured(admin_email.trim(), admin_password));

    // Create clock for repositories
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    // Open storage
    tracing::info!("Opening wish database at {}", db_path);
    let wish_repo = Arc::new(SqliteWishRepo::new(&db_path, clock).await?);

    // Create application
    let app = Arc::new(App::new(wish_repo, gate));

    // Build router
    let mut router = routes().with_state(app).layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let Some(allowed_origins) = allowed_origins else {
        return None;
    };

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Admin requests carry credential headers and JSON content types,
        // which trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static("x-admin-email"),
            HeaderName::from_static("x-admin-secret"),
            axum::http::header::CONTENT_TYPE,
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
