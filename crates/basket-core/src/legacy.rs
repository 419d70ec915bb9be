//! # Stored Format Decoding
//!
//! Turns the raw stored text back into a [`Basket`], upgrading the legacy
//! flat encoding on the way.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Structured (current)                                                   │
//! │    [{"product":"apple","addons":["chocolate"]},{"product":"banana",..}] │
//! │                                                                         │
//! │  Legacy (flat ids, products and add-ons interleaved)                    │
//! │    ["apple", "chocolate", "banana"]                                     │
//! │                                                                         │
//! │  Migration                                                              │
//! │    "apple"      product  → open {apple, []}                             │
//! │    "chocolate"  add-on   → {apple, [chocolate]}                         │
//! │    "banana"     product  → push apple item, open {banana, []}           │
//! │    end                   → push banana item                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An add-on seen before any product opens an item with no product. That
//! item can never be rendered with a name, but it is kept as-is.

use serde::Deserialize;

use crate::catalog::{Catalog, ItemKind};
use crate::error::{BasketError, CoreResult};
use crate::types::{Basket, BasketItem};

/// The stored value after parsing, before any upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredBasket {
    /// Current shape. Also matches `[]`.
    Structured(Basket),

    /// Flat list of ids from before add-ons were attached to products.
    Legacy(Vec<String>),
}

/// A decoded basket and whether it needs to be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub basket: Basket,
    pub migrated: bool,
}

/// Parses stored text, migrating the legacy format when found.
///
/// ## Errors
/// [`BasketError::StorageCorrupt`] when the text matches neither format.
pub fn decode(catalog: &Catalog, raw: &str) -> CoreResult<Decoded> {
    let stored: StoredBasket =
        serde_json::from_str(raw).map_err(|e| BasketError::StorageCorrupt(e.to_string()))?;

    Ok(match stored {
        StoredBasket::Structured(basket) => Decoded {
            basket,
            migrated: false,
        },
        StoredBasket::Legacy(ids) => Decoded {
            basket: migrate_legacy(catalog, &ids),
            migrated: true,
        },
    })
}

/// Groups a flat id list into basket items.
///
/// Unknown ids are dropped. Reserved add-ons are dropped too, so they can
/// never reach storage through a migration.
pub fn migrate_legacy<S: AsRef<str>>(catalog: &Catalog, ids: &[S]) -> Basket {
    let mut migrated = Basket::new();
    let mut current: Option<BasketItem> = None;

    for id in ids.iter().map(AsRef::as_ref) {
        match catalog.classify(id) {
            Some(ItemKind::Product) => {
                if let Some(done) = current.replace(BasketItem::product(id)) {
                    migrated.push(done);
                }
            }
            Some(ItemKind::Addon) if !catalog.is_reserved(id) => {
                current
                    .get_or_insert_with(BasketItem::default)
                    .addons
                    .push(id.to_string());
            }
            _ => {}
        }
    }

    if let Some(done) = current {
        migrated.push(done);
    }

    migrated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default_menu()
    }

    #[test]
    fn test_migrates_interleaved_ids() {
        let basket = migrate_legacy(&catalog(), &["apple", "chocolate", "banana"]);
        assert_eq!(
            basket.items(),
            [
                BasketItem::product("apple").with_addons(["chocolate"]),
                BasketItem::product("banana"),
            ]
        );
    }

    #[test]
    fn test_leading_addon_opens_productless_item() {
        let basket = migrate_legacy(&catalog(), &["pancakes", "chocolate", "lemon"]);
        assert_eq!(
            basket.items(),
            [
                BasketItem::default().with_addons(["pancakes", "chocolate"]),
                BasketItem::product("lemon"),
            ]
        );
    }

    #[test]
    fn test_unknown_and_reserved_ids_are_dropped() {
        let basket = migrate_legacy(
            &catalog(),
            &["kiwi", "apple", "vanilla-ice-cream", "whipped-cream", "mango"],
        );
        assert_eq!(
            basket.items(),
            [BasketItem::product("apple").with_addons(["whipped-cream"])]
        );
    }

    #[test]
    fn test_decode_structured_is_not_migrated() {
        let raw = r#"[{"product":"apple","addons":["chocolate"]}]"#;
        let decoded = decode(&catalog(), raw).unwrap();
        assert!(!decoded.migrated);
        assert_eq!(decoded.basket.len(), 1);
    }

    #[test]
    fn test_decode_empty_array_is_structured() {
        let decoded = decode(&catalog(), "[]").unwrap();
        assert!(!decoded.migrated);
        assert!(decoded.basket.is_empty());
    }

    #[test]
    fn test_decode_legacy_is_migrated() {
        let decoded = decode(&catalog(), r#"["apple","chocolate","banana"]"#).unwrap();
        assert!(decoded.migrated);
        assert_eq!(decoded.basket.len(), 2);
    }

    #[test]
    fn test_decode_migration_is_idempotent() {
        let first = decode(&catalog(), r#"["lemon","pancakes","apple"]"#).unwrap();
        let rewritten = serde_json::to_string(&first.basket).unwrap();

        let second = decode(&catalog(), &rewritten).unwrap();
        assert!(!second.migrated);
        assert_eq!(second.basket, first.basket);
    }

    #[test]
    fn test_decode_garbage_is_corrupt() {
        for raw in ["{not json", r#"{"product":"apple"}"#, "42", r#"["apple", 3]"#] {
            let err = decode(&catalog(), raw).unwrap_err();
            assert!(matches!(err, BasketError::StorageCorrupt(_)), "{raw}");
        }
    }
}
