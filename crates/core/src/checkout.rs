//! Checkout state machine and the boundary to the view layer.
//!
//! [`Storefront`] owns the catalogue, the cart and the pricing engine for a
//! single shopping session. The view layer wires its controls to the
//! `on_*` hooks and implements [`StorefrontView`] to receive the resulting
//! updates.
//!
//! ```text
//!            checkout (empty cart)
//!   Empty ─────────────────────────▶ Empty
//!     │ checkout (items)                ▲
//!     ▼                                 │ checkout
//!   Populated ──── place order ────▶ Ordered
//! ```

use serde::Serialize;

use crate::cart::Cart;
use crate::catalogue::{Catalogue, CatalogueError, CatalogueStore};
use crate::pricing::{CheckoutSummary, PricingEngine, SummaryError};
use crate::types::ItemId;

/// Where the checkout view currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Nothing rendered yet, or the "cart is empty" message.
    #[default]
    Empty,
    /// A summary with a place-order control is shown.
    Populated,
    /// The order confirmation is showing and the cart has been cleared.
    Ordered,
}

/// What the checkout view should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutBody {
    /// The "cart is empty" message, with no summary or place-order control.
    Empty,
    /// A priced summary and a place-order control.
    Summary(CheckoutSummary),
}

/// Rendering capability supplied by the view layer.
///
/// Every method is a notification; the core never reads anything back.
pub trait StorefrontView {
    /// An item's quantity label must show `quantity`.
    fn refresh_quantity_label(&mut self, item_id: &ItemId, quantity: u32);

    /// The checkout badge must show `total_quantity`.
    fn refresh_checkout_badge(&mut self, total_quantity: u64);

    /// The checkout body must be replaced with `body`.
    fn render_checkout(&mut self, body: &CheckoutBody);

    /// A dismissible "order placed" notice must be shown.
    fn render_order_confirmation(&mut self);
}

/// A single shopper's session: catalogue, cart and checkout state.
#[derive(Debug, Default)]
pub struct Storefront {
    catalogue: CatalogueStore,
    cart: Cart,
    pricing: PricingEngine,
    state: CheckoutState,
}

impl Storefront {
    /// Create a session with an unloaded catalogue and an empty cart.
    #[must_use]
    pub fn new(pricing: PricingEngine) -> Self {
        Self {
            pricing,
            ..Self::default()
        }
    }

    /// Install the catalogue once it has been fetched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::AlreadyLoaded`] if a catalogue is already
    /// installed.
    pub fn populate_catalogue(&mut self, catalogue: Catalogue) -> Result<(), CatalogueError> {
        self.catalogue.populate(catalogue)
    }

    /// Whether the catalogue has been installed.
    #[must_use]
    pub const fn is_catalogue_loaded(&self) -> bool {
        self.catalogue.is_loaded()
    }

    /// The session catalogue (empty until loaded).
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        self.catalogue.catalogue()
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current checkout state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// The pricing engine in use.
    #[must_use]
    pub const fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// The "+" control of an item was pressed.
    ///
    /// Returns `false` if the item is already at its quantity cap. The view is
    /// refreshed either way.
    pub fn on_add_clicked(&mut self, item_id: &ItemId, view: &mut impl StorefrontView) -> bool {
        let added = self.cart.add_item(item_id);
        self.refresh_item(item_id, view);
        added
    }

    /// The "-" control of an item was pressed.
    pub fn on_remove_clicked(&mut self, item_id: &ItemId, view: &mut impl StorefrontView) {
        self.cart.remove_item(item_id);
        self.refresh_item(item_id, view);
    }

    /// Compute the current summary without touching the view.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] if the cart references an item the catalogue
    /// does not contain or an amount overflows.
    pub fn summary(&self) -> Result<CheckoutSummary, SummaryError> {
        self.pricing.compute_summary(&self.cart, self.catalogue.catalogue())
    }

    /// Render the checkout view for the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] if the summary cannot be priced. Nothing is
    /// rendered and the state is left unchanged in that case.
    pub fn checkout(
        &mut self,
        view: &mut impl StorefrontView,
    ) -> Result<CheckoutState, SummaryError> {
        if self.cart.is_empty() {
            view.render_checkout(&CheckoutBody::Empty);
            self.state = CheckoutState::Empty;
            return Ok(self.state);
        }

        let summary = self.summary()?;
        view.render_checkout(&CheckoutBody::Summary(summary));
        self.state = CheckoutState::Populated;
        Ok(self.state)
    }

    /// Place the order: clear the cart, re-render and confirm.
    ///
    /// There is no duplicate-submission guard. Placing an order with an empty
    /// cart still re-renders the empty checkout and shows a confirmation.
    pub fn place_order(&mut self, view: &mut impl StorefrontView) {
        self.cart.clear();

        for item_id in self.catalogue.catalogue().ids() {
            view.refresh_quantity_label(item_id, 0);
        }
        view.refresh_checkout_badge(0);

        view.render_checkout(&CheckoutBody::Empty);
        view.render_order_confirmation();
        self.state = CheckoutState::Ordered;
    }

    fn refresh_item(&self, item_id: &ItemId, view: &mut impl StorefrontView) {
        view.refresh_checkout_badge(self.cart.total_quantity());
        view.refresh_quantity_label(item_id, self.cart.quantity_of(item_id));
    }
}
