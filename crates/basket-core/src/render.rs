//! # Display Model
//!
//! What the DOM layer draws for the basket list and the header indicator.
//! These are plain data; the page code only copies them into elements.
//!
//! ## Basket List
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🍏  2x Apple with Chocolate, Pancakes                                  │
//! │  🍋  1x Lemon                                                           │
//! │                                               [ Clear ] [ Checkout ]   │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  No products in basket.                        (cart buttons hidden)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::summary::summarize;
use crate::types::{Basket, DisplayGroup};

/// Placeholder shown when the basket list is empty.
pub const EMPTY_BASKET_TEXT: &str = "No products in basket.";

/// One row of the basket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    pub icon: String,
    pub text: String,
    pub quantity: u32,
}

/// The full basket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BasketView {
    pub lines: Vec<DisplayLine>,

    /// Text shown instead of lines when there are none.
    pub placeholder: Option<String>,

    /// Whether the clear/checkout button row is shown.
    pub show_cart_buttons: bool,
}

/// The item-count badge on the basket link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BasketIndicator {
    pub count: u32,
    pub visible: bool,
}

/// Formats one display group.
///
/// Unknown ids fall back to the raw id as the name and an empty icon.
pub fn display_line(catalog: &Catalog, group: &DisplayGroup) -> DisplayLine {
    let (icon, name) = match catalog.product(&group.product) {
        Some(entry) => (entry.icon.clone(), entry.name.as_str()),
        None => (String::new(), group.product.as_str()),
    };

    let mut text = format!("{}x {}", group.quantity, name);
    if !group.addons.is_empty() {
        let names: Vec<&str> = group
            .addons
            .iter()
            .map(|id| catalog.addon(id).map_or(id.as_str(), |a| a.name.as_str()))
            .collect();
        text.push_str(" with ");
        text.push_str(&names.join(", "));
    }

    DisplayLine {
        icon,
        text,
        quantity: group.quantity,
    }
}

/// Builds the basket list.
pub fn render_basket(catalog: &Catalog, basket: &Basket) -> BasketView {
    let lines: Vec<DisplayLine> = summarize(basket)
        .iter()
        .map(|group| display_line(catalog, group))
        .collect();

    if lines.is_empty() {
        BasketView {
            lines,
            placeholder: Some(EMPTY_BASKET_TEXT.to_string()),
            show_cart_buttons: false,
        }
    } else {
        BasketView {
            lines,
            placeholder: None,
            show_cart_buttons: true,
        }
    }
}

/// Builds the header indicator. Hidden at zero.
pub fn render_indicator(basket: &Basket) -> BasketIndicator {
    let count = u32::try_from(basket.item_count()).unwrap_or(u32::MAX);
    BasketIndicator {
        count,
        visible: count > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BasketItem;

    #[test]
    fn test_line_with_addons() {
        let group = DisplayGroup {
            product: "apple".to_string(),
            addons: vec!["whipped-cream".to_string(), "chocolate".to_string()],
            quantity: 2,
        };
        let line = display_line(&Catalog::default_menu(), &group);
        assert_eq!(line.icon, "🍏");
        assert_eq!(line.text, "2x Apple with Whipped Cream, Chocolate");
    }

    #[test]
    fn test_line_without_addons() {
        let group = DisplayGroup {
            product: "lemon".to_string(),
            addons: Vec::new(),
            quantity: 1,
        };
        assert_eq!(display_line(&Catalog::default_menu(), &group).text, "1x Lemon");
    }

    #[test]
    fn test_unknown_ids_fall_back_to_raw_id() {
        let group = DisplayGroup {
            product: "kiwi".to_string(),
            addons: vec!["sprinkles".to_string(), "chocolate".to_string()],
            quantity: 1,
        };
        let line = display_line(&Catalog::default_menu(), &group);
        assert_eq!(line.icon, "");
        assert_eq!(line.text, "1x kiwi with sprinkles, Chocolate");
    }

    #[test]
    fn test_empty_view_hides_buttons() {
        let view = render_basket(&Catalog::default_menu(), &Basket::new());
        assert!(view.lines.is_empty());
        assert_eq!(view.placeholder.as_deref(), Some(EMPTY_BASKET_TEXT));
        assert!(!view.show_cart_buttons);
    }

    #[test]
    fn test_productless_only_basket_renders_empty() {
        let basket: Basket = vec![BasketItem::default().with_addons(["chocolate"])].into();
        let view = render_basket(&Catalog::default_menu(), &basket);
        assert!(view.lines.is_empty());
        assert!(!view.show_cart_buttons);
    }

    #[test]
    fn test_indicator() {
        assert_eq!(
            render_indicator(&Basket::new()),
            BasketIndicator {
                count: 0,
                visible: false
            }
        );

        let basket: Basket = vec![
            BasketItem::product("apple").with_addons(["chocolate", "pancakes"]),
            BasketItem::product("lemon"),
        ]
        .into();
        assert_eq!(
            render_indicator(&basket),
            BasketIndicator {
                count: 2,
                visible: true
            }
        );
    }
}
