//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each response carries out-of-band fragments for the item's quantity label
//! and the checkout badge.

use axum::{Form, extract::State, response::Html};
use menu_cart_core::{ItemId, Storefront};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::view::HtmxView;

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub item_id: String,
}

/// Resolve a posted id against the catalogue.
///
/// The cart itself accepts any id; the HTTP hooks only exist for catalogue
/// items, so anything else is a 404.
fn catalogue_item_id(storefront: &Storefront, form: CartItemForm) -> Result<ItemId> {
    let item_id = ItemId::from(form.item_id.trim());
    if item_id.as_str().is_empty() {
        return Err(AppError::BadRequest("item_id is required".to_string()));
    }
    if !storefront.catalogue().contains(&item_id) {
        return Err(AppError::NotFound(format!("catalogue item {item_id}")));
    }
    Ok(item_id)
}

/// Add one unit of an item (HTMX).
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> Result<Html<String>> {
    let mut view = HtmxView::new();
    let (item_id, added) = {
        let mut storefront = state.storefront().lock().await;
        let item_id = catalogue_item_id(&storefront, form)?;
        let added = storefront.on_add_clicked(&item_id, &mut view);
        (item_id, added)
    };

    if added {
        add_breadcrumb("cart", "Added item", Some(&[("item_id", item_id.as_str())]));
        tracing::debug!(item_id = %item_id, "Item added to cart");
    } else {
        tracing::warn!(item_id = %item_id, "Item quantity at maximum, add ignored");
    }

    Ok(Html(view.render()?))
}

/// Remove one unit of an item (HTMX).
///
/// Removing an item that is not in the cart is not an error; the label is
/// simply refreshed with its current quantity of zero.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> Result<Html<String>> {
    let mut view = HtmxView::new();
    let item_id = {
        let mut storefront = state.storefront().lock().await;
        let item_id = catalogue_item_id(&storefront, form)?;
        storefront.on_remove_clicked(&item_id, &mut view);
        item_id
    };

    add_breadcrumb("cart", "Removed item", Some(&[("item_id", item_id.as_str())]));
    tracing::debug!(item_id = %item_id, "Item removed from cart");

    Ok(Html(view.render()?))
}

