//! The shopper's in-memory cart.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// One line of the cart.
///
/// The quantity is never zero: an entry that would drop to zero is removed
/// from the [`Cart`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    item_id: ItemId,
    quantity: NonZeroU32,
}

impl CartEntry {
    /// The referenced catalogue item.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Number of units, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }
}

/// Ordered collection of cart entries, one per item id.
///
/// Entries are kept in the order their item was first added. The cart does
/// not validate ids against the catalogue; that happens when the checkout
/// summary is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of an item, appending a new entry if it is not in the cart.
    ///
    /// Returns `false` and leaves the cart unchanged if the item already has
    /// `u32::MAX` units.
    pub fn add_item(&mut self, item_id: &ItemId) -> bool {
        match self.entries.iter_mut().find(|e| &e.item_id == item_id) {
            Some(entry) => match entry.quantity.checked_add(1) {
                Some(quantity) => {
                    entry.quantity = quantity;
                    true
                }
                None => false,
            },
            None => {
                self.entries.push(CartEntry {
                    item_id: item_id.clone(),
                    quantity: NonZeroU32::MIN,
                });
                true
            }
        }
    }

    /// Remove one unit of an item. Removing an absent item does nothing.
    pub fn remove_item(&mut self, item_id: &ItemId) {
        let Some(position) = self.position(item_id) else {
            return;
        };
        let Some(entry) = self.entries.get_mut(position) else {
            return;
        };
        match NonZeroU32::new(entry.quantity.get() - 1) {
            Some(quantity) => entry.quantity = quantity,
            None => {
                self.entries.remove(position);
            }
        }
    }

    /// Quantity of an item, or 0 if it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, item_id: &ItemId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.item_id == item_id)
            .map_or(0, CartEntry::quantity)
    }

    /// Total number of units across all entries.
    ///
    /// Widened to `u64` so several entries near the per-item cap still sum
    /// exactly.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity())).sum()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-added order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.entries.iter().position(|e| &e.item_id == item_id)
    }
}
