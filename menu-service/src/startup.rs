//! Application wiring: store selection, router and server lifecycle.

use crate::config::{MenuConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryMenuStore, MenuStore, MongoDb, MongoMenuStore};
use axum::{
    middleware,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. The store is the only dependency handlers have.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }
}

/// Build the HTTP router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/menu",
            get(handlers::list_menu_items).post(handlers::create_menu_item),
        )
        .route(
            "/menu/:id",
            get(handlers::get_menu_item)
                .put(handlers::update_menu_item)
                .delete(handlers::delete_menu_item),
        )
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create the store selected by configuration.
pub async fn build_store(config: &MenuConfig) -> Result<Arc<dyn MenuStore>, AppError> {
    match config.store.backend {
        StoreBackend::Mongodb => {
            let uri = config.mongodb.uri.as_deref().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!(
                    "MONGODB_URI is required for the mongodb store backend"
                ))
            })?;
            let db = MongoDb::connect(uri, &config.mongodb.database)
                .await
                .map_err(AppError::from)?;
            tracing::info!(
                collection = %config.mongodb.collection,
                "Using MongoDB menu store"
            );
            Ok(Arc::new(MongoMenuStore::new(db, &config.mongodb.collection)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory menu store; data is lost on restart");
            Ok(Arc::new(InMemoryMenuStore::new()))
        }
    }
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(config: MenuConfig) -> Result<Self, AppError> {
        let store = build_store(&config).await?;
        Self::build_with_store(config, store).await
    }

    /// Build around an existing store, bypassing backend selection.
    pub async fn build_with_store(
        config: MenuConfig,
        store: Arc<dyn MenuStore>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(store);

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Menu service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
