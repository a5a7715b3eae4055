//! Core value types.
//!
//! This module provides type-safe wrappers for identifiers and money.

pub mod id;
pub mod price;

pub use id::ItemId;
pub use price::Price;
