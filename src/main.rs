//! Team Profile Directory Backend
//!
//! A REST backend for a team-profile directory: a public listing with
//! filters and pagination, an embeddable variant for third-party sites,
//! and an authenticated admin CRUD surface, backed by SQLite.

mod api;
mod auth;
mod config;
mod db;
mod directory;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Team Profile Directory Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.admin_password.is_none() {
        tracing::warn!(
            "No admin credentials configured (TEAMDIR_ADMIN_EMAIL / TEAMDIR_ADMIN_PASSWORD). \
             Admin login is disabled!"
        );
    }
    if config.embed_origins.is_empty() {
        tracing::warn!(
            "No embed origins configured (TEAMDIR_EMBED_ORIGINS). \
             Embed endpoints accept any origin!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
        sessions: SessionStore::new(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration: the public listing is open, the embed routes
    // accept only the configured embedding origins.
    let public_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let embed_origin = if state.config.embed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            state
                .config
                .embed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };
    let embed_cors = CorsLayer::new()
        .allow_origin(embed_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone session store for the auth layer
    let sessions = state.sessions.clone();

    // Public listing
    let public_routes = Router::new()
        .route("/directory", get(api::public_directory))
        .route("/admin/login", post(api::login))
        .layer(public_cors);

    // Embed surface
    let embed_routes = Router::new()
        .route("/embed/directory", get(api::embed_directory))
        .route("/embed/sync", post(api::embed_sync))
        .layer(embed_cors);

    // Admin CRUD surface, session-guarded
    let admin_routes = Router::new()
        .route("/admin/logout", post(api::logout))
        .route("/profiles", get(api::list_profiles))
        .route("/profiles", post(api::create_profile))
        .route("/profiles/{id}", get(api::get_profile))
        .route("/profiles/{id}", put(api::update_profile))
        .route("/profiles/{id}", delete(api::delete_profile))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest(
            "/api",
            public_routes.merge(embed_routes).merge(admin_routes),
        )
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
