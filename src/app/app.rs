
use axum::{Router, http::{Method, StatusCode, header::CONTENT_TYPE}, routing::get};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, error};

use crate::config::app_conf::AppConfig;
use crate::config::database_conf::DatabaseConfig;
use crate::router::invoice_router::invoice_router;
use crate::router::quote_router::quote_router;
use crate::router::reservation_router::reservation_router;
use crate::service::record_store::{RecordStoreImpl, SharedRecordStore};


pub struct App {
    config: AppConfig,
    router: Router,
    pool: SqlitePool,
}

impl App {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env();
        let database_config = DatabaseConfig::from_env()?;
        Self::with_config(config, &database_config).await
    }

    pub async fn with_config(
        config: AppConfig,
        database_config: &DatabaseConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let (store, pool) = RecordStoreImpl::open(database_config).await?;
        let record_store: SharedRecordStore = Arc::new(store);
        let router = create_router(record_store);
        Ok(App { config, router, pool })
    }

    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.socket_addr()?;
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;
        self.pool.close().await;
        info!("Database pool closed");
        served.map_err(Into::into)
    }
}

/// Full HTTP surface: the three record routers, health probe, CORS and request tracing.
pub fn create_router(store: SharedRecordStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(quote_router(store.clone()))
        .merge(reservation_router(store.clone()))
        .merge(invoice_router(store))
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
