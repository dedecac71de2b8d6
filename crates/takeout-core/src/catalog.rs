//! # Menu Catalog
//!
//! The static set of purchasable items with prices.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Flattening                              │
//! │                                                                         │
//! │  Catalog (nested, ordered)          flatten()                           │
//! │  ┌──────────────────────┐           ┌────────────────────────────────┐  │
//! │  │ "Burrito"            │           │ 1  Burrito - Chicken     $4.49 │  │
//! │  │   "Chicken"    449   │  ───────► │ 2  Burrito - Beef        $5.49 │  │
//! │  │   "Beef"       549   │           │ 3  Rice Bowl - Teriyaki… $9.99 │  │
//! │  │ "Rice Bowl"          │           │ …                              │  │
//! │  │   "Teriyaki…"  999   │           └────────────────────────────────┘  │
//! │  │ …                    │                                               │
//! │  └──────────────────────┘   1-indexed, category-then-meal order         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insertion order is the iteration order, so the catalog is a vector of
//! categories rather than a map (a `HashMap` would scramble the menu, a
//! `BTreeMap` would alphabetize it).

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Menu Entry
// =============================================================================

/// One numbered row of the flattened menu.
///
/// The `index` is 1-based and stable for the lifetime of the catalog; it is
/// what the customer types at the selection prompt. Index 0 is reserved as
/// the checkout sentinel and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// 1-based menu number.
    pub index: usize,

    /// Display name: `"<category> - <meal>"`.
    pub name: String,

    /// Price at the time the catalog was built.
    pub price: Money,
}

// =============================================================================
// Catalog
// =============================================================================

/// A category of meals on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// (meal name, price) pairs in menu order.
    pub meals: Vec<(String, Money)>,
}

/// The nested category → meal → price catalog.
///
/// ## Invariants
/// - Immutable once built; the session receives it by reference
/// - Category and meal order is insertion order, never sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from `(category, [(meal, price_cents)])` rows.
    ///
    /// ## Example
    /// ```rust
    /// use takeout_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_rows(&[("Burrito", &[("Chicken", 449)])]);
    /// let entries = catalog.flatten();
    /// assert_eq!(entries[0].name, "Burrito - Chicken");
    /// ```
    pub fn from_rows(rows: &[(&str, &[(&str, i64)])]) -> Self {
        let categories = rows
            .iter()
            .map(|(category, meals)| Category {
                name: (*category).to_string(),
                meals: meals
                    .iter()
                    .map(|(meal, cents)| ((*meal).to_string(), Money::from_cents(*cents)))
                    .collect(),
            })
            .collect();
        Catalog { categories }
    }

    /// Produces the stable, 1-indexed ordered list of purchasable items.
    ///
    /// Iteration follows the catalog's category-then-meal insertion order;
    /// names are `"<category> - <meal>"`. Pure and infallible.
    pub fn flatten(&self) -> Vec<MenuEntry> {
        let mut entries = Vec::new();
        for category in &self.categories {
            for (meal, price) in &category.meals {
                entries.push(MenuEntry {
                    index: entries.len() + 1,
                    name: format!("{} - {}", category.name, meal),
                    price: *price,
                });
            }
        }
        entries
    }

    /// Number of purchasable items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.meals.len()).sum()
    }
}

// =============================================================================
// Default Menu
// =============================================================================

/// The hardcoded takeout menu.
///
/// This is the program's only menu source; there is no file or network
/// load. Prices are in cents.
pub fn default_menu() -> Catalog {
    Catalog::from_rows(&[
        (
            "Burrito",
            &[("Chicken", 449), ("Beef", 549), ("Vegetarian", 399)],
        ),
        (
            "Rice Bowl",
            &[("Teriyaki Chicken", 999), ("Sweet and Sour Pork", 899)],
        ),
        (
            "Sushi",
            &[("California Roll", 749), ("Spicy Tuna Roll", 849)],
        ),
        (
            "Noodles",
            &[("Pad Thai", 699), ("Lo Mein", 799), ("Mee Goreng", 899)],
        ),
        (
            "Pizza",
            &[("Cheese", 899), ("Pepperoni", 1099), ("Vegetarian", 999)],
        ),
        ("Burger", &[("Chicken", 749), ("Beef", 849)]),
    ])
}

// =============================================================================
// Unit Tests
// =============================================================================
