//! Menu Cart Core - cart, catalogue and pricing library.
//!
//! This crate holds everything about the storefront that has invariants:
//! - [`catalogue`] - the read-only list of purchasable items
//! - [`cart`] - per-item quantities in first-added order
//! - [`pricing`] - subtotal, tax and total computation
//! - [`checkout`] - the checkout state machine and the view boundary
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! rendering. The storefront binary adapts it to HTML through the
//! [`checkout::StorefrontView`] trait.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalogue;
pub mod checkout;
pub mod pricing;
pub mod types;

pub use cart::{Cart, CartEntry};
pub use catalogue::{Catalogue, CatalogueError, CatalogueItem, CatalogueStore};
pub use checkout::{CheckoutBody, CheckoutState, Storefront, StorefrontView};
pub use pricing::{
    CartIntegrityError, CheckoutSummary, PricingEngine, PricingError, SalesTax, SummaryError,
    SummaryLine,
};
pub use types::*;
