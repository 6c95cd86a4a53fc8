//! HTTP routes for Courier
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod analyze;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::cors_middleware, AppState};

/// Create the main application router
///
/// `/api/analyze` is registered for every method: preflight `OPTIONS` is
/// short-circuited by the cross-origin middleware and the handler
/// rejects anything other than `POST` with a descriptive 405 body.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", any(analyze::analyze))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        // Applied last so it runs first: preflight never reaches handlers
        // and every response is stamped with the CORS headers.
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}
