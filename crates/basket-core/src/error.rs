//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  └── BasketError      - Rejected adds and unreadable stored data       │
//! │                                                                         │
//! │  basket-store errors (separate crate)                                  │
//! │  ├── StorageError     - Backend read/write/delete failures             │
//! │  └── StoreError       - What callers of BasketStore see                │
//! │                                                                         │
//! │  Flow: BasketError → StoreError → Notifier (user-visible message)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable. A rejected add never touches the basket.

use thiserror::Error;

/// Message shown when an add-on arrives before any product.
pub const NO_PRODUCT_MESSAGE: &str = "Please add a product first before adding add-ons.";

// =============================================================================
// Basket Error
// =============================================================================

/// Basket rule violations and stored-data failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    /// The id is neither a catalog product nor a catalog add-on.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// The add-on is reserved and can never be added.
    #[error("Item {0} is no longer available")]
    Reserved(String),

    /// Adding this product would break an exclusion group.
    ///
    /// ## When This Occurs
    /// ```text
    /// Basket: [{banana, []}]
    ///      │
    ///      ▼
    /// add("strawberry")
    ///      │
    ///      ▼
    /// Incompatible { product: "strawberry", conflicting: "banana", .. }
    ///      │
    ///      ▼
    /// UI shows: "Strawberries and bananas cannot be combined."
    /// ```
    #[error("{message}")]
    Incompatible {
        product: String,
        conflicting: String,
        message: String,
    },

    /// An add-on needs a product to attach to and there is none.
    #[error("{}", NO_PRODUCT_MESSAGE)]
    NoProduct,

    /// The stored value could not be decoded.
    #[error("Stored basket is corrupt: {0}")]
    StorageCorrupt(String),
}

impl BasketError {
    /// Returns the message to surface through `notify_error`, if any.
    ///
    /// Unknown ids are dropped silently and reserved add-ons get their own
    /// notice, so only the composition rules produce an error banner.
    pub fn banner_message(&self) -> Option<String> {
        match self {
            BasketError::Incompatible { .. } | BasketError::NoProduct => Some(self.to_string()),
            _ => None,
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// A catalog that cannot back a basket.
///
/// Only raised when a catalog comes from configuration; the built-in menu
/// is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same id appears twice, or as both a product and an add-on.
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// A reserved id that is not a catalog add-on.
    #[error("Reserved id {0} is not a catalog add-on")]
    UnknownReserved(String),

    /// An exclusion group member that is not a catalog product.
    #[error("Exclusion group member {0} is not a catalog product")]
    UnknownGroupMember(String),

    /// An exclusion group with fewer than two members.
    #[error("Exclusion group needs at least two members")]
    DegenerateGroup,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BasketError.
pub type CoreResult<T> = Result<T, BasketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_displays_group_message() {
        let err = BasketError::Incompatible {
            product: "strawberry".to_string(),
            conflicting: "banana".to_string(),
            message: "Strawberries and bananas cannot be combined.".to_string(),
        };
        assert_eq!(err.to_string(), "Strawberries and bananas cannot be combined.");
        assert_eq!(
            err.banner_message().as_deref(),
            Some("Strawberries and bananas cannot be combined.")
        );
    }

    #[test]
    fn test_no_product_message() {
        assert_eq!(BasketError::NoProduct.to_string(), NO_PRODUCT_MESSAGE);
        assert!(BasketError::NoProduct.banner_message().is_some());
    }

    #[test]
    fn test_silent_errors_have_no_banner() {
        assert!(BasketError::UnknownItem("kiwi".into()).banner_message().is_none());
        assert!(BasketError::Reserved("vanilla-ice-cream".into())
            .banner_message()
            .is_none());
        assert!(BasketError::StorageCorrupt("eof".into())
            .banner_message()
            .is_none());
    }
}
