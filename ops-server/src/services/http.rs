//! HTTP Service
//!
//! Builds the axum application and runs it with graceful shutdown.

use axum::{Router, middleware};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Config, ServerState};
use shared::AppError;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::orders::router())
        // Catalog APIs
        .merge(crate::api::products::router())
        .merge(crate::api::coupons::router())
        .merge(crate::api::delivery_fees::router())
        .merge(crate::api::motoboys::router())
        // Ledger APIs
        .merge(crate::api::cashflow::router())
        .merge(crate::api::reports::router())
}

/// Plain HTTP server for the operations API
#[derive(Clone, Debug)]
pub struct HttpService {
    config: Config,
}

impl HttpService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Serve until the shutdown signal resolves, then drain for up to
    /// ten seconds
    pub async fn start_server<F>(
        &self,
        state: ServerState,
        shutdown_signal: F,
    ) -> Result<(), AppError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = build_app()
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn(log_request));

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🍕 Starting HTTP server on {}", addr);

        let handle = axum_server::Handle::new();

        let handle_clone = handle.clone();
        tokio::spawn(async move {
            shutdown_signal.await;
            handle_clone.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}
