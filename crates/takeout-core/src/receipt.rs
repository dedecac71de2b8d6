//! # Receipt Rendering
//!
//! Fixed-width rendering of the menu table and the itemized receipt.
//!
//! All functions here return `String`s; the CLI decides where they go.
//! Keeping rendering pure means the exact column layout is locked down by
//! plain string-equality tests.
//!
//! ## Column Layout
//! ```text
//! Menu table                              Receipt
//! ──────────                              ───────
//! Item # (7) | name (32) | $price         name (32)| $price (6)| quantity
//! ```
//!
//! Widths are best-effort: a name longer than 32 characters overflows its
//! column rather than being truncated.

use crate::catalog::MenuEntry;
use crate::order::Order;
use crate::{NAME_COLUMN_WIDTH, PRICE_COLUMN_WIDTH};

// =============================================================================
// Menu Table
// =============================================================================

/// Renders the numbered menu table shown while browsing.
///
/// ## Example output
/// ```text
/// --------------------------------------------------
/// Item # | Item name                        | Price
/// -------|----------------------------------|-------
/// 1       | Burrito - Chicken                | $4.49
/// ```
pub fn menu_table(entries: &[MenuEntry]) -> String {
    let mut out = String::new();
    out.push_str("--------------------------------------------------\n");
    out.push_str("Item # | Item name                        | Price\n");
    out.push_str("-------|----------------------------------|-------\n");

    for entry in entries {
        out.push_str(&format!(
            "{:<7} | {:<width$} | ${}\n",
            entry.index,
            entry.name,
            entry.price.decimal_string(),
            width = NAME_COLUMN_WIDTH,
        ));
    }

    out
}

// =============================================================================
// Receipt
// =============================================================================

/// Renders the itemized receipt: heading, one row per line item, and a
/// footer with the total to exactly two decimal places.
///
/// ## Example output
/// ```text
/// ----------------------------------------------------
/// Item name                       | Price  | Quantity
/// --------------------------------|--------|----------
/// Burrito - Chicken               | $  4.49| 2
/// ----------------------------------------------------
/// Total price: $8.98
/// ----------------------------------------------------
/// ```
pub fn receipt(order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&receipt_heading());

    for line in &order.lines {
        out.push_str(&format!(
            "{:<name_w$}| ${:>price_w$}| {}\n",
            line.name,
            line.unit_price.decimal_string(),
            line.quantity,
            name_w = NAME_COLUMN_WIDTH,
            price_w = PRICE_COLUMN_WIDTH,
        ));
    }

    out.push_str(&receipt_footer(order));
    out
}

fn receipt_heading() -> String {
    let mut out = String::new();
    out.push_str("----------------------------------------------------\n");
    out.push_str("Item name                       | Price  | Quantity\n");
    out.push_str("--------------------------------|--------|----------\n");
    out
}

fn receipt_footer(order: &Order) -> String {
    let mut out = String::new();
    out.push_str("----------------------------------------------------\n");
    out.push_str(&format!(
        "Total price: ${}\n",
        order.total().decimal_string()
    ));
    out.push_str("----------------------------------------------------\n");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Money;
    use crate::order::LineItem;

    fn one_line_order() -> Order {
        let mut order = Order::new();
        order.push_line(LineItem {
            name: "Burrito - Chicken".to_string(),
            unit_price: Money::from_cents(449),
            quantity: 2,
        });
        order
    }

    #[test]
    fn test_menu_table_rows() {
        let catalog = Catalog::from_rows(&[("Burrito", &[("Chicken", 449)])]);
        let table = menu_table(&catalog.flatten());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "--------------------------------------------------"
        );
        assert_eq!(lines[1], "Item # | Item name                        | Price");
        assert_eq!(lines[2], "-------|----------------------------------|-------");
        assert_eq!(
            lines[3],
            "1       | Burrito - Chicken                | $4.49"
        );
    }

    #[test]
    fn test_receipt_row_widths() {
        let rendered = receipt(&one_line_order());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "Item name                       | Price  | Quantity");
        // Name padded to 32, price right-aligned in 6 behind the `$`.
        assert_eq!(lines[3], "Burrito - Chicken               | $  4.49| 2");
    }

    #[test]
    fn test_receipt_total_has_two_decimals() {
        let rendered = receipt(&one_line_order());
        assert!(rendered.contains("Total price: $8.98"));
    }

    #[test]
    fn test_empty_order_receipt() {
        let rendered = receipt(&Order::new());
        assert!(rendered.contains("Total price: $0.00"));
        // Heading and footer rules only; no item rows.
        assert_eq!(rendered.lines().count(), 6);
    }

    /// Long names overflow their column; rendering never truncates.
    #[test]
    fn test_long_name_is_not_truncated() {
        let mut order = Order::new();
        let name = "Rice Bowl - Extra Large Sweet and Sour Pork Special";
        order.push_line(LineItem {
            name: name.to_string(),
            unit_price: Money::from_cents(1299),
            quantity: 1,
        });

        let rendered = receipt(&order);
        assert!(rendered.contains(name));
    }
}
