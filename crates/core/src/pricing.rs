//! Checkout summary computation.
//!
//! Tax is derived by *dividing* the subtotal by the configured sales tax
//! divisor (7.25 by default), so a $100.00 subtotal carries $13.79 of tax.
//! All arithmetic is done at full decimal precision; [`Price::display`]
//! rounds to cents when the summary is shown.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::cart::Cart;
use crate::catalogue::Catalogue;
use crate::types::{ItemId, Price};

/// A cart entry references an item the catalogue does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cart references unknown catalogue item: {item_id}")]
pub struct CartIntegrityError {
    /// The identifier with no catalogue match.
    pub item_id: ItemId,
}

/// Errors computing a checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// A cart entry has no catalogue item.
    #[error(transparent)]
    CartIntegrity(#[from] CartIntegrityError),

    /// A line total, the subtotal, the tax or the total does not fit in a
    /// `Decimal`.
    #[error("checkout amount out of range while computing {0}")]
    Overflow(&'static str),
}

/// Errors configuring the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The divisor must be strictly positive.
    #[error("sales tax divisor must be greater than zero (got {0})")]
    InvalidDivisor(Decimal),
}

/// Sales tax expressed as a divisor of the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesTax {
    divisor: Decimal,
}

impl SalesTax {
    /// The store's fixed divisor, 7.25.
    pub const DEFAULT_DIVISOR: Decimal = Decimal::from_parts(725, 0, 0, false, 2);

    /// Create a sales tax from a divisor.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDivisor`] if the divisor is zero or
    /// negative.
    pub fn new(divisor: Decimal) -> Result<Self, PricingError> {
        if divisor <= Decimal::ZERO {
            return Err(PricingError::InvalidDivisor(divisor));
        }
        Ok(Self { divisor })
    }

    /// The configured divisor.
    #[must_use]
    pub const fn divisor(&self) -> Decimal {
        self.divisor
    }

    /// Tax owed on a subtotal, or `None` if it overflows.
    #[must_use]
    pub fn tax_on(&self, subtotal: Price) -> Option<Price> {
        subtotal.checked_div(self.divisor)
    }
}

impl Default for SalesTax {
    fn default() -> Self {
        Self {
            divisor: Self::DEFAULT_DIVISOR,
        }
    }
}

/// One priced line of a checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// Catalogue item id.
    pub item_id: ItemId,
    /// Item name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units in the cart.
    pub quantity: u32,
    /// `price * quantity`.
    pub line_total: Price,
}

/// Price breakdown shown before an order is placed.
///
/// Derived from the cart and catalogue on every checkout request and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Lines in cart order.
    pub lines: Vec<SummaryLine>,
    /// Sum of line totals.
    pub subtotal: Price,
    /// `subtotal / divisor`.
    pub tax: Price,
    /// `subtotal + tax`.
    pub total: Price,
}

/// Computes checkout summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine {
    sales_tax: SalesTax,
}

impl PricingEngine {
    /// Create an engine with the given sales tax.
    #[must_use]
    pub const fn new(sales_tax: SalesTax) -> Self {
        Self { sales_tax }
    }

    /// The engine's sales tax.
    #[must_use]
    pub const fn sales_tax(&self) -> SalesTax {
        self.sales_tax
    }

    /// Price every cart entry against the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::CartIntegrity`] for the first entry whose id is
    /// not in the catalogue, and [`SummaryError::Overflow`] if any amount
    /// leaves the range of `Decimal`.
    pub fn compute_summary(
        &self,
        cart: &Cart,
        catalogue: &Catalogue,
    ) -> Result<CheckoutSummary, SummaryError> {
        let lines = cart
            .entries()
            .iter()
            .map(|entry| -> Result<SummaryLine, SummaryError> {
                let item = catalogue
                    .find(entry.item_id())
                    .ok_or_else(|| CartIntegrityError {
                        item_id: entry.item_id().clone(),
                    })?;
                let line_total = item
                    .price
                    .checked_mul(entry.quantity())
                    .ok_or(SummaryError::Overflow("line total"))?;
                Ok(SummaryLine {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    price: item.price,
                    quantity: entry.quantity(),
                    line_total,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = lines
            .iter()
            .try_fold(Price::ZERO, |acc, line| acc.checked_add(line.line_total))
            .ok_or(SummaryError::Overflow("subtotal"))?;
        let tax = self
            .sales_tax
            .tax_on(subtotal)
            .ok_or(SummaryError::Overflow("tax"))?;
        let total = subtotal
            .checked_add(tax)
            .ok_or(SummaryError::Overflow("total"))?;

        Ok(CheckoutSummary {
            lines,
            subtotal,
            tax,
            total,
        })
    }
}
