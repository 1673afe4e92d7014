//! Products API Server
//!
//! A minimal CRUD service over a single `Product` resource.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::SqlProductStore;
use app::{ProductsController, PRODUCTS_ROUTE};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductsController<SqlProductStore>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Products
        .route(
            PRODUCTS_ROUTE,
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            &format!("{}/:id", PRODUCTS_ROUTE),
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        // Middleware
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,products_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Products API...");

    // Load configuration
    let config = Config::from_env();
    if config.is_in_memory() {
        tracing::warn!("DATABASE_URL not set to a persistent database; data lives in memory");
    }

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = adapters::sql::connect(&config)
        .await
        .context("Failed to connect to database")?;
    adapters::sql::ensure_schema(&db)
        .await
        .context("Failed to create schema")?;
    tracing::info!("Database connected");

    // Create adapters and controllers
    let product_store = Arc::new(SqlProductStore::new(db));
    let state = AppState {
        products: Arc::new(ProductsController::new(product_store)),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
