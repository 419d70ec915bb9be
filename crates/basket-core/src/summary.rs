//! # Basket Summary
//!
//! Folds identical basket items into display groups.
//!
//! Two items are identical when they carry the same product and the same
//! set of add-ons, regardless of add-on order:
//!
//! ```text
//! [{apple,[chocolate,pancakes]}, {lemon,[]}, {apple,[pancakes,chocolate]}]
//!                      │
//!                      ▼
//! [ 2x apple [chocolate, pancakes],  1x lemon [] ]
//! ```

use std::collections::HashMap;

use crate::types::{Basket, DisplayGroup};

/// Grouping key: product plus sorted add-ons.
type GroupKey = (String, Vec<String>);

/// Groups basket items by `(product, sorted add-on set)`.
///
/// Groups appear in first-seen order and keep the add-on order of the item
/// that opened them. Items without a product are skipped.
pub fn summarize(basket: &Basket) -> Vec<DisplayGroup> {
    let mut groups: Vec<DisplayGroup> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for item in basket.items() {
        let Some(product) = item.product_id() else {
            continue;
        };

        let mut sorted = item.addons.clone();
        sorted.sort();
        let key = (product.to_string(), sorted);

        match index.get(&key).and_then(|&i| groups.get_mut(i)) {
            Some(group) => group.quantity += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(DisplayGroup {
                    product: product.to_string(),
                    addons: item.addons.clone(),
                    quantity: 1,
                });
            }
        }
    }

    groups
}

/// Number of items carrying a product.
#[inline]
pub fn item_count(basket: &Basket) -> usize {
    basket.item_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BasketItem;

    #[test]
    fn test_groups_ignore_addon_order() {
        let basket: Basket = vec![
            BasketItem::product("apple").with_addons(["chocolate", "pancakes"]),
            BasketItem::product("lemon"),
            BasketItem::product("apple").with_addons(["pancakes", "chocolate"]),
        ]
        .into();

        let groups = summarize(&basket);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0],
            DisplayGroup {
                product: "apple".to_string(),
                addons: vec!["chocolate".to_string(), "pancakes".to_string()],
                quantity: 2,
            }
        );
        assert_eq!(groups[1].product, "lemon");
        assert_eq!(groups[1].quantity, 1);
    }

    #[test]
    fn test_different_addons_stay_separate() {
        let basket: Basket = vec![
            BasketItem::product("apple"),
            BasketItem::product("apple").with_addons(["chocolate"]),
            BasketItem::product("apple"),
        ]
        .into();

        let groups = summarize(&basket);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].quantity, 2);
        assert!(groups[0].addons.is_empty());
        assert_eq!(groups[1].addons, ["chocolate"]);
    }

    #[test]
    fn test_productless_items_are_skipped() {
        let basket: Basket = vec![
            BasketItem::default().with_addons(["chocolate"]),
            BasketItem::product("banana"),
        ]
        .into();

        let groups = summarize(&basket);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].product, "banana");
        assert_eq!(item_count(&basket), 1);
    }

    #[test]
    fn test_empty_basket() {
        assert!(summarize(&Basket::new()).is_empty());
        assert_eq!(item_count(&Basket::new()), 0);
    }
}
