//! Checkout route handlers.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;
use crate::view::HtmxView;

/// Render the checkout body (HTMX).
///
/// Shows the "cart is empty" message for an empty cart, otherwise the priced
/// summary and the place-order button.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let mut view = HtmxView::new();
    let checkout_state = state.storefront().lock().await.checkout(&mut view)?;

    tracing::debug!(state = ?checkout_state, "Checkout rendered");
    Ok(Html(view.render()?))
}

/// Place the order (HTMX).
///
/// Clears the cart, resets every quantity label and the badge, re-renders
/// the now-empty checkout and appends the confirmation alert.
#[instrument(skip(state))]
pub async fn place_order(State(state): State<AppState>) -> Result<Html<String>> {
    let mut view = HtmxView::new();
    let items_ordered = {
        let mut storefront = state.storefront().lock().await;
        let items_ordered = storefront.cart().total_quantity();
        storefront.place_order(&mut view);
        items_ordered
    };

    add_breadcrumb("checkout", "Order placed", None);
    tracing::info!(items = items_ordered, "Order placed");

    Ok(Html(view.render()?))
}
