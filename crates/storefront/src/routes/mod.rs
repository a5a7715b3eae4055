//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Menu page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Ready once the catalogue is loaded
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Add one unit (label + badge fragments)
//! POST /cart/remove            - Remove one unit (label + badge fragments)
//!
//! # Checkout (HTMX fragments)
//! GET  /checkout               - Checkout body (summary or empty message)
//! POST /checkout/place-order   - Clear the cart and confirm the order
//!
//! GET  /static/*               - Static assets, including the catalogue
//! ```

pub mod cart;
pub mod checkout;
pub mod menu;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/place-order", post(checkout::place_order))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
}

/// Build the complete application with health checks, static files and
/// request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalogue.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the catalogue has been loaded.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.storefront().lock().await.is_catalogue_loaded() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
