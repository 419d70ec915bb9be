//! # Basket Widget
//!
//! Composes a [`BasketStore`] with the page renderer so that the header
//! indicator follows every change.
//!
//! ## Refresh Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  widget.add(..)    ── Ok ──► render_indicator                           │
//! │                    ── Err ─► (nothing; the notifier already spoke)      │
//! │                                                                         │
//! │  widget.clear()    ────────► render_indicator   (always)                │
//! │                                                                         │
//! │  widget.refresh()  ────────► render_basket + render_indicator           │
//! │                              (page load, basket page open)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::{Added, BasketIndicator, BasketView};
use tracing::debug;

use crate::error::StoreResult;
use crate::notify::Notifier;
use crate::storage::BasketStorage;
use crate::store::BasketStore;

/// Draws the basket on the page.
pub trait BasketRenderer {
    /// Redraws the basket list.
    fn render_basket(&self, view: &BasketView);

    /// Redraws the item-count badge.
    fn render_indicator(&self, indicator: &BasketIndicator);
}

/// A store whose successful changes are followed by a redraw.
#[derive(Debug)]
pub struct BasketWidget<S, N, R> {
    store: BasketStore<S, N>,
    renderer: R,
}

impl<S, N, R> BasketWidget<S, N, R>
where
    S: BasketStorage,
    N: Notifier,
    R: BasketRenderer,
{
    pub fn new(store: BasketStore<S, N>, renderer: R) -> Self {
        BasketWidget { store, renderer }
    }

    pub fn store(&self) -> &BasketStore<S, N> {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// [`BasketStore::add`], then the indicator on success.
    pub fn add(&self, item_id: &str, target_product: Option<&str>) -> StoreResult<Added> {
        let added = self.store.add(item_id, target_product)?;
        self.renderer.render_indicator(&self.store.indicator());
        Ok(added)
    }

    /// [`BasketStore::clear`], then the indicator.
    ///
    /// The indicator is redrawn even when the delete fails, so it reflects
    /// whatever is actually stored.
    pub fn clear(&self) -> StoreResult<()> {
        let result = self.store.clear();
        self.renderer.render_indicator(&self.store.indicator());
        result
    }

    /// Redraws both the list and the indicator.
    pub fn refresh(&self) {
        debug!("Refreshing basket widget");
        let basket = self.store.load();
        self.renderer
            .render_basket(&basket_core::render_basket(self.store.catalog(), &basket));
        self.renderer
            .render_indicator(&basket_core::render_indicator(&basket));
    }

    /// Splits the widget back into its parts.
    pub fn into_parts(self) -> (BasketStore<S, N>, R) {
        (self.store, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::TracingNotifier;
    use crate::storage::MemoryStorage;
    use basket_core::Catalog;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct Page {
        lists: RefCell<Vec<BasketView>>,
        badges: RefCell<Vec<BasketIndicator>>,
    }

    impl BasketRenderer for Page {
        fn render_basket(&self, view: &BasketView) {
            self.lists.borrow_mut().push(view.clone());
        }

        fn render_indicator(&self, indicator: &BasketIndicator) {
            self.badges.borrow_mut().push(*indicator);
        }
    }

    fn widget() -> BasketWidget<MemoryStorage, TracingNotifier, Page> {
        let store = BasketStore::with_storage(Arc::new(Catalog::default_menu()), MemoryStorage::new());
        BasketWidget::new(store, Page::default())
    }

    #[test]
    fn test_successful_add_renders_indicator() {
        let widget = widget();
        widget.add("apple", None).unwrap();
        widget.add("whipped-cream", None).unwrap();

        let badges = widget.renderer().badges.borrow();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[1].count, 1);
        assert!(widget.renderer().lists.borrow().is_empty());
    }

    #[test]
    fn test_rejected_add_renders_nothing() {
        let widget = widget();
        assert!(widget.add("chocolate", None).is_err());
        assert!(widget.add("vanilla-ice-cream", None).is_err());
        assert!(widget.renderer().badges.borrow().is_empty());
    }

    #[test]
    fn test_clear_always_renders_indicator() {
        let widget = widget();
        widget.clear().unwrap();
        widget.add("lemon", None).unwrap();
        widget.clear().unwrap();

        let badges = widget.renderer().badges.borrow();
        assert_eq!(badges.len(), 3);
        assert!(!badges[2].visible);
    }

    #[test]
    fn test_refresh_renders_both() {
        let widget = widget();
        widget.add("banana", None).unwrap();
        widget.refresh();

        let lists = widget.renderer().lists.borrow();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].lines[0].text, "1x Banana");
        assert!(lists[0].show_cart_buttons);
    }
}
