//! # Composition Rules
//!
//! Decides whether an id may be added to a basket and, if so, where it goes.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply_add(item_id, target)                                             │
//! │       │                                                                 │
//! │       ├── not in catalog ─────────────────────► UnknownItem             │
//! │       ├── reserved add-on ────────────────────► Reserved                │
//! │       │                                                                 │
//! │       ├── product                                                       │
//! │       │     ├── exclusion group conflict ─────► Incompatible            │
//! │       │     └── push {product, []}                                      │
//! │       │                                                                 │
//! │       └── add-on                                                        │
//! │             ├── target given                                            │
//! │             │     ├── target unknown ─────────► UnknownItem             │
//! │             │     ├── first item with target, or                        │
//! │             │     │   conflict check + push {target, []}                │
//! │             │     └── attach add-on                                     │
//! │             └── no target                                               │
//! │                   ├── empty / last item productless ─► NoProduct        │
//! │                   └── attach to last item                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check runs before the first mutation, so a rejected add leaves the
//! basket exactly as it was.

use crate::catalog::{Catalog, ItemKind};
use crate::error::{BasketError, CoreResult};
use crate::types::{Added, Basket, BasketItem};

/// Checks that `product_id` may join the products already in `basket`.
pub fn check_compatibility(catalog: &Catalog, basket: &Basket, product_id: &str) -> CoreResult<()> {
    match catalog.conflict(product_id, basket.product_ids()) {
        Some((group, conflicting)) => Err(BasketError::Incompatible {
            product: product_id.to_string(),
            conflicting,
            message: group.message.clone(),
        }),
        None => Ok(()),
    }
}

/// Applies one add to `basket`.
///
/// `target_product` only matters when `item_id` is an add-on; it is ignored
/// for products.
pub fn apply_add(
    catalog: &Catalog,
    basket: &mut Basket,
    item_id: &str,
    target_product: Option<&str>,
) -> CoreResult<Added> {
    let kind = catalog
        .classify(item_id)
        .ok_or_else(|| BasketError::UnknownItem(item_id.to_string()))?;

    if catalog.is_reserved(item_id) {
        return Err(BasketError::Reserved(item_id.to_string()));
    }

    match kind {
        ItemKind::Product => {
            check_compatibility(catalog, basket, item_id)?;
            basket.push(BasketItem::product(item_id));
            Ok(Added::Product {
                product: item_id.to_string(),
            })
        }
        ItemKind::Addon => match target_product {
            Some(target) => attach_to_target(catalog, basket, item_id, target),
            None => attach_to_last(basket, item_id),
        },
    }
}

fn attach_to_target(
    catalog: &Catalog,
    basket: &mut Basket,
    addon: &str,
    target: &str,
) -> CoreResult<Added> {
    if !catalog.is_product(target) {
        return Err(BasketError::UnknownItem(target.to_string()));
    }

    let existing = basket
        .items()
        .iter()
        .position(|item| item.product_id() == Some(target));

    let (index, created) = match existing {
        Some(index) => (index, false),
        None => {
            check_compatibility(catalog, basket, target)?;
            basket.push(BasketItem::product(target));
            (basket.len() - 1, true)
        }
    };

    if let Some(item) = basket.items_mut().get_mut(index) {
        item.addons.push(addon.to_string());
    }

    Ok(Added::Addon {
        addon: addon.to_string(),
        product: target.to_string(),
        index,
        created,
    })
}

fn attach_to_last(basket: &mut Basket, addon: &str) -> CoreResult<Added> {
    let index = basket.len().checked_sub(1).ok_or(BasketError::NoProduct)?;
    let item = basket
        .items_mut()
        .get_mut(index)
        .ok_or(BasketError::NoProduct)?;

    let product = item.product.clone().ok_or(BasketError::NoProduct)?;
    item.addons.push(addon.to_string());

    Ok(Added::Addon {
        addon: addon.to_string(),
        product,
        index,
        created: false,
    })
}
