//! The catalogue of purchasable items.
//!
//! A [`Catalogue`] is built once from the catalogue resource and never
//! mutated afterwards. [`CatalogueStore`] enforces the load-once lifecycle
//! for the long-lived storefront.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ItemId, Price};

/// Errors that can occur when building a [`Catalogue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// Two items share an identifier.
    #[error("duplicate catalogue item id: {0}")]
    DuplicateId(ItemId),
    /// An item has a price below zero.
    #[error("catalogue item {id} has a negative price ({price})")]
    NegativePrice {
        /// Offending item.
        id: ItemId,
        /// Its price.
        price: Price,
    },
    /// The store was already populated.
    #[error("catalogue has already been loaded")]
    AlreadyLoaded,
    /// The resource could not be parsed.
    #[error("malformed catalogue: {0}")]
    Malformed(String),
}

/// A purchasable item as described by the catalogue resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueItem {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Short description, also used as image alt text.
    pub description: String,
    /// Image location.
    #[serde(rename = "imgUrl")]
    pub image_ref: String,
}

/// An ordered, immutable set of catalogue items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    items: Vec<CatalogueItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalogue {
    /// Build a catalogue, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if two items share an id or an item has a negative
    /// price.
    pub fn new(items: Vec<CatalogueItem>) -> Result<Self, CatalogueError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.price.is_negative() {
                return Err(CatalogueError::NegativePrice {
                    id: item.id.clone(),
                    price: item.price,
                });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogueError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse a catalogue from the JSON resource body.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Malformed`] if the body is not an array of
    /// catalogue items, or any error from [`Catalogue::new`].
    pub fn from_json(body: &[u8]) -> Result<Self, CatalogueError> {
        let items: Vec<CatalogueItem> =
            serde_json::from_slice(body).map_err(|e| CatalogueError::Malformed(e.to_string()))?;
        Self::new(items)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&CatalogueItem> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Whether an item with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Items in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueItem> {
        self.items.iter()
    }

    /// Identifiers in catalogue order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalogue has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Holds the session's catalogue and allows it to be populated exactly once.
///
/// Before loading, the store behaves like an empty catalogue, so the menu is
/// simply blank while the resource is in flight or after a failed load.
#[derive(Debug, Default)]
pub struct CatalogueStore {
    catalogue: Catalogue,
    loaded: bool,
}

impl CatalogueStore {
    /// Create an empty, unloaded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::AlreadyLoaded`] on a second call.
    pub fn populate(&mut self, catalogue: Catalogue) -> Result<(), CatalogueError> {
        if self.loaded {
            return Err(CatalogueError::AlreadyLoaded);
        }
        self.catalogue = catalogue;
        self.loaded = true;
        Ok(())
    }

    /// Whether a catalogue has been installed.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The current catalogue (empty until loaded).
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MENU: &str = r#"[
        {"id": 1, "name": "Espresso", "price": 3.5, "description": "Short and strong", "imgUrl": "img/espresso.png"},
        {"id": "2", "name": "Latte", "price": 4.25, "description": "Milky", "imgUrl": "img/latte.png"}
    ]"#;

    fn item(id: &str, cents: i64) -> CatalogueItem {
        CatalogueItem {
            id: ItemId::from(id),
            name: format!("Item {id}"),
            price: Price::from_cents(cents),
            description: String::new(),
            image_ref: String::new(),
        }
    }

    #[test]
    fn test_from_json_keeps_order_and_fields() {
        let catalogue = Catalogue::from_json(MENU.as_bytes()).unwrap();
        assert_eq!(catalogue.len(), 2);

        let names: Vec<_> = catalogue.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Espresso", "Latte"]);

        let latte = catalogue.find(&ItemId::from("2")).unwrap();
        assert_eq!(latte.price, Price::from_cents(425));
        assert_eq!(latte.image_ref, "img/latte.png");
    }

    #[test]
    fn test_numeric_id_found_by_string() {
        let catalogue = Catalogue::from_json(MENU.as_bytes()).unwrap();
        assert!(catalogue.contains(&ItemId::from("1")));
        assert!(!catalogue.contains(&ItemId::from("3")));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalogue::from_json(b"{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, CatalogueError::Malformed(_)));

        let err = Catalogue::from_json(b"[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogueError::Malformed(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalogue::new(vec![item("1", 100), item("1", 200)]).unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateId(ItemId::from("1")));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Catalogue::new(vec![item("1", -5)]).unwrap_err();
        assert!(matches!(err, CatalogueError::NegativePrice { .. }));
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(Catalogue::new(vec![item("free", 0)]).is_ok());
    }

    #[test]
    fn test_store_populates_once() {
        let mut store = CatalogueStore::new();
        assert!(!store.is_loaded());
        assert!(store.catalogue().is_empty());

        store.populate(Catalogue::new(vec![item("1", 100)]).unwrap()).unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.catalogue().len(), 1);

        let err = store.populate(Catalogue::default()).unwrap_err();
        assert_eq!(err, CatalogueError::AlreadyLoaded);
        assert_eq!(store.catalogue().len(), 1);
    }
}
