// ABOUTME: HTTP server assembly: merges routers, applies middleware, serves with graceful shutdown
// ABOUTME: Single entry point used by the binary and by tests that need the full middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::AppError;
use crate::middleware::{
    create_request_span, propagate_request_id_layer, set_request_id_layer, setup_cors,
};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RestaurantRoutes};
use axum::{body::Body, http::Request, response::IntoResponse, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Build the complete application router
///
/// Layers run outermost first: a request id is assigned, the request span is
/// opened with it, CORS is applied, and the id is copied onto the response.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RestaurantRoutes::routes(resources))
        .fallback(route_not_found)
        .layer(propagate_request_id_layer())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(create_request_span::<Body>)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(set_request_id_layer())
}

async fn route_not_found(request: Request<Body>) -> impl IntoResponse {
    AppError::not_found(format!("Route {}", request.uri().path()))
}

/// Bind the configured address and serve until ctrl-c or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> anyhow::Result<()> {
    let addr = resources.config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Oilwatch server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
