//! # basket-store: Persistence for the Basket Widget
//!
//! Keeps the basket in a single storage slot and wires the page's
//! collaborators (notifier, renderer) around the pure rules in
//! `basket-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Widget Data Flow                          │
//! │                                                                         │
//! │  Page click ("add apple")                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   basket-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   │   │
//! │  │   │ BasketWidget │──►│ BasketStore  │──►│  BasketStorage   │   │   │
//! │  │   │ (widget.rs)  │   │ (store.rs)   │   │  memory / sqlite │   │   │
//! │  │   │ render hook  │   │ load/add/    │   └──────────────────┘   │   │
//! │  │   └──────┬───────┘   │ clear        │──► Notifier (notify.rs) │   │
//! │  │          │           └──────────────┘                         │   │
//! │  └──────────┼──────────────────────────────────────────────────────┘   │
//! │             ▼                                                           │
//! │  BasketRenderer (page): basket list + header indicator                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `BasketStore`: load, add, clear, summaries
//! - [`widget`] - `BasketWidget`: redraws after successful changes
//! - [`storage`] - The storage slot trait and its backends
//! - [`notify`] - Popup/banner seam
//! - [`config`] - TOML configuration
//! - [`telemetry`] - Tracing setup
//! - [`error`] - Store, storage and config errors
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use basket_core::Catalog;
//! use basket_store::{BasketStore, MemoryStorage};
//!
//! let store = BasketStore::with_storage(Arc::new(Catalog::default_menu()), MemoryStorage::new());
//!
//! store.add("apple", None).unwrap();
//! store.add("whipped-cream", None).unwrap();
//! assert!(store.add("vanilla-ice-cream", None).is_err());
//!
//! let basket = store.load();
//! assert_eq!(store.item_count(&basket), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod widget;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{StorageBackend, StorageSettings, UiSettings, WidgetConfig};
pub use error::{ConfigError, StorageError, StoreError, StoreResult};
pub use notify::{Notifier, TracingNotifier};
pub use storage::{BasketStorage, MemoryStorage, SqliteStorage};
pub use store::BasketStore;
pub use widget::{BasketRenderer, BasketWidget};
