//! # Basket Store
//!
//! Owns the stored basket: reads it, runs the composition rules against it,
//! writes it back.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Store Operations                              │
//! │                                                                         │
//! │  Page Action              Store Call             Storage Change         │
//! │  ───────────              ──────────             ──────────────         │
//! │                                                                         │
//! │  Click Product ─────────► add(id, None) ───────► write(whole basket)   │
//! │                                                                         │
//! │  Click Add-on on card ──► add(id, Some(p)) ────► write(whole basket)   │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ─────────────► delete()              │
//! │                                                                         │
//! │  Open basket page ──────► load() ──────────────► (read; legacy values  │
//! │                                                   are rewritten once)  │
//! │                                                                         │
//! │  NOTE: Every add is load → apply rules → write. A rejected add never   │
//! │        writes, so storage is untouched.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use basket_core::{
    apply_add, decode, render_basket, render_indicator, summarize, Added, Basket, BasketError,
    BasketIndicator, BasketView, Catalog, Decoded, DisplayGroup,
};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::notify::{Notifier, TracingNotifier};
use crate::storage::BasketStorage;

/// The basket, its storage slot and the notifier for rejected adds.
#[derive(Debug)]
pub struct BasketStore<S, N = TracingNotifier> {
    catalog: Arc<Catalog>,
    storage: S,
    notifier: N,
}

impl<S: BasketStorage> BasketStore<S, TracingNotifier> {
    /// A store that only logs its notices.
    pub fn with_storage(catalog: Arc<Catalog>, storage: S) -> Self {
        BasketStore::new(catalog, storage, TracingNotifier::default())
    }
}

impl<S: BasketStorage, N: Notifier> BasketStore<S, N> {
    pub fn new(catalog: Arc<Catalog>, storage: S, notifier: N) -> Self {
        BasketStore {
            catalog,
            storage,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Reads the stored basket.
    ///
    /// ## Behavior
    /// - Absent value: empty basket
    /// - Legacy flat list: migrated and written back immediately
    /// - Unreadable value or failed read: empty basket and a warning
    pub fn load(&self) -> Basket {
        let raw = match self.storage.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Basket::new(),
            Err(error) => {
                warn!(%error, "Failed to read stored basket, using an empty one");
                return Basket::new();
            }
        };

        match decode(&self.catalog, &raw) {
            Ok(Decoded {
                basket,
                migrated: false,
            }) => basket,
            Ok(Decoded {
                basket,
                migrated: true,
            }) => {
                info!(items = basket.len(), "Migrated legacy basket format");
                if let Err(error) = self.persist(&basket) {
                    warn!(%error, "Failed to write migrated basket");
                }
                basket
            }
            Err(error) => {
                warn!(%error, "Stored basket is unreadable, using an empty one");
                Basket::new()
            }
        }
    }

    /// Adds a product, or an add-on to a product.
    ///
    /// `target_product` names the product an add-on belongs to. Without it,
    /// the add-on joins the last item in the basket.
    ///
    /// ## Returns
    /// - `Ok(Added)` after the basket has been written
    /// - `Err(StoreError::Rejected(_))` when a rule blocks the add; storage is
    ///   untouched and the notifier has been told
    /// - `Err(StoreError::Storage(_))` when the write fails
    pub fn add(&self, item_id: &str, target_product: Option<&str>) -> StoreResult<Added> {
        debug!(item_id, ?target_product, "add to basket");

        let mut basket = self.load();
        match apply_add(&self.catalog, &mut basket, item_id, target_product) {
            Ok(added) => {
                self.persist(&basket)?;
                debug!(?added, items = basket.len(), "Basket updated");
                Ok(added)
            }
            Err(rejection) => {
                self.report(&rejection);
                Err(rejection.into())
            }
        }
    }

    /// Deletes the stored basket. Safe to call on an absent basket.
    pub fn clear(&self) -> StoreResult<()> {
        self.storage.delete()?;
        info!("Basket cleared");
        Ok(())
    }

    /// Groups identical items for display.
    pub fn summarize(&self, basket: &Basket) -> Vec<DisplayGroup> {
        summarize(basket)
    }

    /// Number of items carrying a product.
    pub fn item_count(&self, basket: &Basket) -> usize {
        basket.item_count()
    }

    /// The basket list for the current stored basket.
    pub fn view(&self) -> BasketView {
        render_basket(&self.catalog, &self.load())
    }

    /// The header indicator for the current stored basket.
    pub fn indicator(&self) -> BasketIndicator {
        render_indicator(&self.load())
    }

    fn persist(&self, basket: &Basket) -> StoreResult<()> {
        let json = serde_json::to_string(basket)?;
        self.storage.write(&json)?;
        Ok(())
    }

    fn report(&self, rejection: &BasketError) {
        debug!(%rejection, "add rejected");
        match rejection {
            BasketError::Reserved(_) => self.notifier.notify_reserved(),
            other => {
                if let Some(message) = other.banner_message() {
                    self.notifier.notify_error(&message);
                }
            }
        }
    }
}
