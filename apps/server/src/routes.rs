//! Route table and middleware stack.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{catalog, health, sales};
use crate::AppState;

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/sales", post(sales::create_sale).get(sales::list_sales))
        .route("/api/sales/report", get(sales::report))
        .route("/api/catalog", get(catalog::catalog))
        .layer(TraceLayer::new_for_http())
        // The form and report pages are served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
