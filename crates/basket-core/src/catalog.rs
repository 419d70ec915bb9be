//! # Catalog
//!
//! Static reference data: what can go into a basket, and the rules that
//! constrain how it combines.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Catalog                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    products     │   │     addons      │   │       rules         │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  apple      🍏  │   │  whipped-cream  │   │  reserved_addons    │   │
//! │  │  banana     🍌  │   │  chocolate      │   │  exclusion_groups   │   │
//! │  │  lemon      🍋  │   │  pancakes       │   │  {banana,strawberry}│   │
//! │  │  strawberry 🍓  │   │  vanilla-ice-.. │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is built once at startup (either [`Catalog::default_menu`] or
//! from configuration) and shared read-only from then on.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product or add-on the basket can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable id stored in the basket.
    pub id: String,

    /// Display name shown in the basket list.
    pub name: String,

    /// Emoji icon shown next to the name.
    #[serde(default)]
    pub icon: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        CatalogEntry {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Which side of the catalog an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Product,
    Addon,
}

// =============================================================================
// Exclusion Group
// =============================================================================

/// Products that may not share a basket.
///
/// At most one distinct member of a group may appear as a basket item's
/// product. Repeating the same member is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionGroup {
    /// Product ids in the group.
    pub members: Vec<String>,

    /// Message surfaced when the group blocks an add.
    pub message: String,
}

impl ExclusionGroup {
    pub fn contains(&self, product_id: &str) -> bool {
        self.members.iter().any(|m| m == product_id)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Products, add-ons and the composition rules between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<CatalogEntry>,

    #[serde(default)]
    pub addons: Vec<CatalogEntry>,

    /// Add-ons that are listed but can never be obtained.
    #[serde(default)]
    pub reserved_addons: Vec<String>,

    #[serde(default)]
    pub exclusion_groups: Vec<ExclusionGroup>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::default_menu()
    }
}

impl Catalog {
    /// The built-in menu.
    pub fn default_menu() -> Self {
        Catalog {
            products: vec![
                CatalogEntry::new("apple", "Apple", "🍏"),
                CatalogEntry::new("banana", "Banana", "🍌"),
                CatalogEntry::new("lemon", "Lemon", "🍋"),
                CatalogEntry::new("strawberry", "Strawberry", "🍓"),
            ],
            addons: vec![
                CatalogEntry::new("whipped-cream", "Whipped Cream", "🥛"),
                CatalogEntry::new("chocolate", "Chocolate", "🍫"),
                CatalogEntry::new("pancakes", "Pancakes", "🥞"),
                CatalogEntry::new("vanilla-ice-cream", "Vanilla Ice Cream", "🍦"),
            ],
            reserved_addons: vec!["vanilla-ice-cream".to_string()],
            exclusion_groups: vec![ExclusionGroup {
                members: vec!["banana".to_string(), "strawberry".to_string()],
                message: "Strawberries and bananas cannot be combined.".to_string(),
            }],
        }
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&CatalogEntry> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up an add-on by id.
    pub fn addon(&self, id: &str) -> Option<&CatalogEntry> {
        self.addons.iter().find(|a| a.id == id)
    }

    #[inline]
    pub fn is_product(&self, id: &str) -> bool {
        self.product(id).is_some()
    }

    #[inline]
    pub fn is_addon(&self, id: &str) -> bool {
        self.addon(id).is_some()
    }

    #[inline]
    pub fn is_reserved(&self, id: &str) -> bool {
        self.reserved_addons.iter().any(|r| r == id)
    }

    /// Classifies an id. Products win if an id were somehow listed twice.
    pub fn classify(&self, id: &str) -> Option<ItemKind> {
        if self.is_product(id) {
            Some(ItemKind::Product)
        } else if self.is_addon(id) {
            Some(ItemKind::Addon)
        } else {
            None
        }
    }

    /// Finds the first product already present that `product_id` may not join.
    ///
    /// Returns the blocking group and the conflicting product id.
    pub fn conflict<'p, I>(&self, product_id: &str, present: I) -> Option<(&ExclusionGroup, String)>
    where
        I: IntoIterator<Item = &'p str> + Clone,
    {
        self.exclusion_groups
            .iter()
            .filter(|group| group.contains(product_id))
            .find_map(|group| {
                present
                    .clone()
                    .into_iter()
                    .find(|other| *other != product_id && group.contains(other))
                    .map(|other| (group, other.to_string()))
            })
    }

    /// Checks that the catalog is internally consistent.
    ///
    /// ## Rules
    /// - Ids are unique across products and add-ons
    /// - Reserved ids are catalog add-ons
    /// - Exclusion groups have two or more members, all catalog products
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for entry in self.products.iter().chain(self.addons.iter()) {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        if let Some(reserved) = self.reserved_addons.iter().find(|r| !self.is_addon(r)) {
            return Err(CatalogError::UnknownReserved(reserved.clone()));
        }

        for group in &self.exclusion_groups {
            if group.members.len() < 2 {
                return Err(CatalogError::DegenerateGroup);
            }
            if let Some(member) = group.members.iter().find(|m| !self.is_product(m)) {
                return Err(CatalogError::UnknownGroupMember(member.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_valid() {
        assert_eq!(Catalog::default_menu().validate(), Ok(()));
    }

    #[test]
    fn test_classify() {
        let catalog = Catalog::default_menu();
        assert_eq!(catalog.classify("apple"), Some(ItemKind::Product));
        assert_eq!(catalog.classify("chocolate"), Some(ItemKind::Addon));
        assert_eq!(catalog.classify("kiwi"), None);
        assert!(catalog.is_reserved("vanilla-ice-cream"));
        assert!(!catalog.is_reserved("chocolate"));
    }

    #[test]
    fn test_conflict_detects_other_group_member() {
        let catalog = Catalog::default_menu();

        let present = ["apple", "banana"];
        let (group, other) = catalog
            .conflict("strawberry", present.iter().copied())
            .expect("banana blocks strawberry");
        assert_eq!(other, "banana");
        assert_eq!(group.message, "Strawberries and bananas cannot be combined.");

        // Same member twice is allowed
        assert!(catalog.conflict("banana", present.iter().copied()).is_none());
        // Products outside any group never conflict
        assert!(catalog.conflict("lemon", present.iter().copied()).is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = Catalog::default_menu();
        catalog.addons.push(CatalogEntry::new("apple", "Apple Sauce", ""));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("apple".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_rules() {
        let mut catalog = Catalog::default_menu();
        catalog.reserved_addons.push("apple".to_string());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownReserved("apple".to_string()))
        );

        let mut catalog = Catalog::default_menu();
        catalog.exclusion_groups[0].members.push("chocolate".to_string());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownGroupMember("chocolate".to_string()))
        );

        let mut catalog = Catalog::default_menu();
        catalog.exclusion_groups[0].members.truncate(1);
        assert_eq!(catalog.validate(), Err(CatalogError::DegenerateGroup));
    }
}
