//! # Menu
//!
//! The restaurant's dishes and drinks, as shown on the public menu page and
//! managed from the admin dashboard.
//!
//! ## Menu Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Our Menu                 [search____]  [ ] Vegetarian [ ] Vegan [ ] GF │
//! │                                                                         │
//! │  Appetizers                                                             │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  Bruschetta al Pomodoro                    🌱          €7.50           │
//! │  Burrata with Heirloom Tomatoes            🌱 GF       €12.00          │
//! │                                                                         │
//! │  Main Courses                                                           │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  Wild Mushroom Risotto                     🌱 GF       €18.50          │
//! │  ...                                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only available items appear on the public page. Unavailable items stay in
//! the catalog so the admin can switch them back on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Longest accepted dish name.
pub const MAX_ITEM_NAME_LEN: usize = 100;

// =============================================================================
// Price
// =============================================================================

/// A menu price in euro cents.
///
/// Integer cents, never floats: `Price::from_cents(1250)` is €12.50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price(i64);

impl Price {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}€{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Section of the menu an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Appetizer,
    Soup,
    Salad,
    MainCourse,
    SideDish,
    Dessert,
    Beverage,
    Alcohol,
    Special,
}

impl MenuCategory {
    /// All categories in menu order.
    pub const ALL: [MenuCategory; 9] = [
        MenuCategory::Appetizer,
        MenuCategory::Soup,
        MenuCategory::Salad,
        MenuCategory::MainCourse,
        MenuCategory::SideDish,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
        MenuCategory::Alcohol,
        MenuCategory::Special,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "appetizer",
            MenuCategory::Soup => "soup",
            MenuCategory::Salad => "salad",
            MenuCategory::MainCourse => "main_course",
            MenuCategory::SideDish => "side_dish",
            MenuCategory::Dessert => "dessert",
            MenuCategory::Beverage => "beverage",
            MenuCategory::Alcohol => "alcohol",
            MenuCategory::Special => "special",
        }
    }

    /// Section heading on the menu page.
    pub const fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "Appetizers",
            MenuCategory::Soup => "Soups",
            MenuCategory::Salad => "Salads",
            MenuCategory::MainCourse => "Main Courses",
            MenuCategory::SideDish => "Side Dishes",
            MenuCategory::Dessert => "Desserts",
            MenuCategory::Beverage => "Beverages",
            MenuCategory::Alcohol => "Wine & Spirits",
            MenuCategory::Special => "House Specials",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        MenuCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: MenuCategory::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: MenuCategory,
    /// Listed on the public menu.
    pub available: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    /// Times the dish was ordered; ranks popular items.
    #[serde(default)]
    pub order_count: u32,
}

/// Admin-supplied fields of a menu item.
///
/// The store assigns `id` and keeps `order_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: MenuCategory,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItemDraft {
    /// Name required and bounded, price not negative.
    pub fn validate(&self) -> ValidationResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required {
                field: "Name".to_string(),
            });
        }
        if name.chars().count() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "Name".to_string(),
                max: MAX_ITEM_NAME_LEN,
            });
        }
        if self.price.is_negative() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "price cannot be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Builds a catalog entry from the draft.
    pub fn into_item(self, id: String, order_count: u32) -> MenuItem {
        MenuItem {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            image_url: self.image_url.filter(|u| !u.trim().is_empty()),
            category: self.category,
            available: self.available,
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            gluten_free: self.gluten_free,
            order_count,
        }
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Menu page filters. Every set criterion must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuFilter {
    pub category: Option<MenuCategory>,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    /// Hide items switched off by the kitchen.
    pub available_only: bool,
    /// Case-insensitive substring of name or description.
    pub search: String,
}

impl MenuFilter {
    /// The public menu: available items only.
    pub fn public() -> Self {
        MenuFilter {
            available_only: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.map_or(true, |c| item.category == c)
            && (!self.vegetarian || item.vegetarian)
            && (!self.vegan || item.vegan)
            && (!self.gluten_free || item.gluten_free)
            && (!self.available_only || item.available)
            && self.matches_search(item)
    }

    fn matches_search(&self, item: &MenuItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        item.name.to_lowercase().contains(&term) || item.description.to_lowercase().contains(&term)
    }

    /// Matching items in catalog order.
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

/// One heading of the menu page with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub category: MenuCategory,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Groups `items` by category in menu order. Empty categories are left out.
pub fn sections(items: &[MenuItem]) -> Vec<MenuSection> {
    MenuCategory::ALL
        .iter()
        .filter_map(|&category| {
            let items: Vec<MenuItem> = items
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();
            (!items.is_empty()).then(|| MenuSection {
                category,
                title: category.display_name().to_string(),
                items,
            })
        })
        .collect()
}

/// The `limit` most-ordered items; ties keep catalog order.
pub fn popular(items: &[MenuItem], limit: usize) -> Vec<MenuItem> {
    let mut ranked: Vec<MenuItem> = items.to_vec();
    ranked.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    ranked.truncate(limit);
    ranked
}
