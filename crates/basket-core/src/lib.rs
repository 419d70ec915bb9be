//! # basket-core: Pure Basket Logic
//!
//! The data model of the basket widget and every rule that touches it, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Basket Widget Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page (DOM renderer)                          │   │
//! │  │    Product buttons ──► Basket list ──► Header indicator         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              basket-store (BasketStore, BasketWidget)           │   │
//! │  │        storage slot, notifier, render hook, config              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  rules  │ │ legacy  │ │ summary │ │ render  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO DOM • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Products, add-ons, reserved ids and exclusion groups
//! - [`types`] - Basket, BasketItem, DisplayGroup
//! - [`rules`] - Whether and where an id is added
//! - [`legacy`] - Stored text decoding and flat-list migration
//! - [`summary`] - Grouping identical items for display
//! - [`render`] - Display lines and the item-count indicator
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{apply_add, summarize, Basket, Catalog};
//!
//! let catalog = Catalog::default_menu();
//! let mut basket = Basket::new();
//!
//! apply_add(&catalog, &mut basket, "apple", None).unwrap();
//! apply_add(&catalog, &mut basket, "whipped-cream", None).unwrap();
//!
//! let groups = summarize(&basket);
//! assert_eq!(groups[0].product, "apple");
//! assert_eq!(groups[0].addons, ["whipped-cream"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod legacy;
pub mod render;
pub mod rules;
pub mod summary;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry, ExclusionGroup, ItemKind};
pub use error::{BasketError, CatalogError, CoreResult};
pub use legacy::{decode, migrate_legacy, Decoded, StoredBasket};
pub use render::{render_basket, render_indicator, BasketIndicator, BasketView, DisplayLine};
pub use rules::{apply_add, check_compatibility};
pub use summary::{item_count, summarize};
pub use types::{Added, Basket, BasketItem, DisplayGroup};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the basket lives under, matching the page's local storage.
pub const DEFAULT_STORAGE_KEY: &str = "basket";
