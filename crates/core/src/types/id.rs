//! Catalogue item identifiers.
//!
//! The catalogue resource allows an `id` to be either a JSON string or a JSON
//! number. Both are normalised to their textual form so that an id read from
//! the catalogue and an id posted back from an HTML form compare equal.
//! Numbers are written without trailing fractional zeros, so `1`, `1.0` and
//! `"1"` are one id while `"1.0"` (a string) stays distinct.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a catalogue item.
///
/// ## Examples
///
/// ```
/// use menu_cart_core::ItemId;
///
/// let from_number: ItemId = serde_json::from_str("1").unwrap();
/// let from_text: ItemId = serde_json::from_str("\"1\"").unwrap();
///
/// assert_eq!(from_number, from_text);
/// assert_eq!(from_number, ItemId::from("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number_text(&number)),
        })
    }
}

/// Canonical text of a numeric id.
///
/// Numbers outside the range of `Decimal` keep their JSON rendering.
fn number_text(number: &serde_json::Number) -> String {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_or(text, |value| value.normalize().to_string())
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
