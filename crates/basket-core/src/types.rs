//! # Domain Types
//!
//! The basket as it is stored, and the shapes handed to the renderer.
//!
//! ## Stored Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  storage["basket"] =                                                    │
//! │  [                                                                      │
//! │    { "product": "apple",  "addons": ["whipped-cream"] },               │
//! │    { "product": "banana", "addons": [] },                              │
//! │    { "product": null,     "addons": ["chocolate"] }   ← legacy only    │
//! │  ]                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are never deduplicated in storage. Two apples are two items;
//! grouping happens in [`crate::summary`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Basket Item
// =============================================================================

/// One product instance and the add-ons attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasketItem {
    /// Catalog product id. `None` only for items migrated from the legacy
    /// format that started with an add-on.
    pub product: Option<String>,

    /// Catalog add-on ids, in the order they were added.
    #[serde(default)]
    pub addons: Vec<String>,
}

impl BasketItem {
    /// A product with no add-ons yet.
    pub fn product(id: impl Into<String>) -> Self {
        BasketItem {
            product: Some(id.into()),
            addons: Vec::new(),
        }
    }

    /// Builder-style helper used mostly by tests and migration.
    pub fn with_addons<I, S>(mut self, addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addons.extend(addons.into_iter().map(Into::into));
        self
    }

    #[inline]
    pub fn product_id(&self) -> Option<&str> {
        self.product.as_deref()
    }

    #[inline]
    pub fn has_product(&self) -> bool {
        self.product.is_some()
    }
}

// =============================================================================
// Basket
// =============================================================================

/// Ordered basket contents, persisted as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Product ids present, in basket order.
    pub fn product_ids(&self) -> impl Iterator<Item = &str> + Clone {
        self.items.iter().filter_map(BasketItem::product_id)
    }

    /// Counts items that carry a product. Add-ons never count on their own.
    pub fn item_count(&self) -> usize {
        self.items.iter().filter(|item| item.has_product()).count()
    }

    pub(crate) fn push(&mut self, item: BasketItem) {
        self.items.push(item);
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<BasketItem> {
        &mut self.items
    }
}

impl From<Vec<BasketItem>> for Basket {
    fn from(items: Vec<BasketItem>) -> Self {
        Basket { items }
    }
}

impl FromIterator<BasketItem> for Basket {
    fn from_iter<T: IntoIterator<Item = BasketItem>>(iter: T) -> Self {
        Basket {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// What a successful add did to the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Added {
    /// A new product item was appended.
    Product { product: String },

    /// An add-on was attached to the item at `index`.
    ///
    /// `created` is true when the target product had to be appended first.
    Addon {
        addon: String,
        product: String,
        index: usize,
        created: bool,
    },
}

// =============================================================================
// Display Group
// =============================================================================

/// Identical basket items folded together for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayGroup {
    pub product: String,

    /// Add-ons in the order of the first item that formed the group.
    pub addons: Vec<String>,

    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_serializes_as_plain_array() {
        let basket: Basket = vec![
            BasketItem::product("apple").with_addons(["whipped-cream"]),
            BasketItem::product("banana"),
        ]
        .into();

        let json = serde_json::to_string(&basket).unwrap();
        assert_eq!(
            json,
            r#"[{"product":"apple","addons":["whipped-cream"]},{"product":"banana","addons":[]}]"#
        );
    }

    #[test]
    fn test_null_product_round_trips() {
        let json = r#"[{"product":null,"addons":["chocolate"]}]"#;
        let basket: Basket = serde_json::from_str(json).unwrap();
        assert_eq!(basket.items()[0].product, None);
        assert_eq!(serde_json::to_string(&basket).unwrap(), json);
    }

    #[test]
    fn test_item_count_ignores_productless_items() {
        let basket: Basket = vec![
            BasketItem::default().with_addons(["chocolate"]),
            BasketItem::product("apple"),
            BasketItem::product("apple").with_addons(["pancakes"]),
        ]
        .into();

        assert_eq!(basket.len(), 3);
        assert_eq!(basket.item_count(), 2);
        assert_eq!(basket.product_ids().collect::<Vec<_>>(), ["apple", "apple"]);
    }
}
