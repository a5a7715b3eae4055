//! HTML rendering of storefront updates.
//!
//! [`HtmxView`] implements the core [`StorefrontView`] boundary by collecting
//! one HTMX out-of-band fragment per notification. The handler then renders
//! them all into a single response body, so one click can update a quantity
//! label, the checkout badge and the checkout body at once.

use askama::Template;
use menu_cart_core::{CheckoutBody, CheckoutSummary, ItemId, StorefrontView, SummaryLine};

// =============================================================================
// View Models
// =============================================================================

/// A checkout summary line formatted for display.
#[derive(Debug, Clone)]
pub struct SummaryLineView {
    pub item_id: String,
    pub name: String,
    pub price: String,
    /// `" x3"` when more than one unit is in the cart, empty otherwise.
    pub quantity_suffix: String,
}

impl From<&SummaryLine> for SummaryLineView {
    fn from(line: &SummaryLine) -> Self {
        Self {
            item_id: line.item_id.to_string(),
            name: line.name.clone(),
            price: line.price.display(),
            quantity_suffix: if line.quantity > 1 {
                format!(" x{}", line.quantity)
            } else {
                String::new()
            },
        }
    }
}

/// A checkout summary formatted for display.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub lines: Vec<SummaryLineView>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<&CheckoutSummary> for SummaryView {
    fn from(summary: &CheckoutSummary) -> Self {
        Self {
            lines: summary.lines.iter().map(SummaryLineView::from).collect(),
            subtotal: summary.subtotal.display(),
            tax: summary.tax.display(),
            total: summary.total.display(),
        }
    }
}

// =============================================================================
// Fragment Templates
// =============================================================================

/// Quantity label of one menu card.
#[derive(Template)]
#[template(path = "partials/quantity_label.html")]
pub struct QuantityLabelTemplate {
    pub item_id: String,
    pub quantity: u32,
    pub oob: bool,
}

/// The "Checkout (N)" button.
#[derive(Template)]
#[template(path = "partials/checkout_badge.html")]
pub struct CheckoutBadgeTemplate {
    pub total_quantity: u64,
    pub oob: bool,
}

/// Body of the checkout panel.
#[derive(Template)]
#[template(path = "partials/checkout_body.html")]
pub struct CheckoutBodyTemplate {
    pub summary: Option<SummaryView>,
}

/// Dismissible "order placed" alert.
#[derive(Template)]
#[template(path = "partials/order_confirmation.html")]
pub struct OrderConfirmationTemplate;

enum Fragment {
    QuantityLabel(QuantityLabelTemplate),
    CheckoutBadge(CheckoutBadgeTemplate),
    CheckoutBody(CheckoutBodyTemplate),
    OrderConfirmation(OrderConfirmationTemplate),
}

impl Fragment {
    fn render(&self) -> askama::Result<String> {
        match self {
            Self::QuantityLabel(t) => t.render(),
            Self::CheckoutBadge(t) => t.render(),
            Self::CheckoutBody(t) => t.render(),
            Self::OrderConfirmation(t) => t.render(),
        }
    }
}

// =============================================================================
// HtmxView
// =============================================================================

/// Collects storefront updates as HTMX out-of-band fragments.
#[derive(Default)]
pub struct HtmxView {
    fragments: Vec<Fragment>,
}

impl HtmxView {
    /// Create a view with no pending fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every fragment, in notification order.
    ///
    /// # Errors
    ///
    /// Returns the first template rendering error.
    pub fn render(&self) -> askama::Result<String> {
        self.fragments
            .iter()
            .map(Fragment::render)
            .collect::<askama::Result<Vec<_>>>()
            .map(|parts| parts.join("\n"))
    }
}

impl StorefrontView for HtmxView {
    fn refresh_quantity_label(&mut self, item_id: &ItemId, quantity: u32) {
        self.fragments
            .push(Fragment::QuantityLabel(QuantityLabelTemplate {
                item_id: item_id.to_string(),
                quantity,
                oob: true,
            }));
    }

    fn refresh_checkout_badge(&mut self, total_quantity: u64) {
        self.fragments
            .push(Fragment::CheckoutBadge(CheckoutBadgeTemplate {
                total_quantity,
                oob: true,
            }));
    }

    fn render_checkout(&mut self, body: &CheckoutBody) {
        let summary = match body {
            CheckoutBody::Empty => None,
            CheckoutBody::Summary(summary) => Some(SummaryView::from(summary)),
        };
        self.fragments
            .push(Fragment::CheckoutBody(CheckoutBodyTemplate { summary }));
    }

    fn render_order_confirmation(&mut self) {
        self.fragments
            .push(Fragment::OrderConfirmation(OrderConfirmationTemplate));
    }
}
