//! # Ordering Session
//!
//! The interactive order-collection loop and the single-shot update path.
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      place_order transitions                            │
//! │                                                                         │
//! │            ┌────────────────────────────────────────────┐               │
//! │            ▼                                            │               │
//! │       ┌──────────┐  valid index   ┌──────────────┐      │ "y"           │
//! │       │ Browsing │ ─────────────► │ ItemSelected │      │               │
//! │       └──────────┘                └──────┬───────┘      │               │
//! │         │      ▲                         │ quantity     │               │
//! │   "0"   │      │ invalid input           ▼              │               │
//! │         │      └───────────┐      ┌───────────┐    ┌────┴─────┐         │
//! │         │                  └───── │ line item │ ─► │ Confirmed│         │
//! │         ▼                         │ appended  │    └────┬─────┘         │
//! │      ┌──────┐                     └───────────┘         │ anything      │
//! │      │ Done │ ◄─────────────────────────────────────────┘ but "y"       │
//! │      └──────┘                                                           │
//! │                                                                         │
//! │  Done: total = Σ price × quantity, exact in cents                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use takeout_core::catalog::{Catalog, MenuEntry};
use takeout_core::input::{parse_selection, Selection};
use takeout_core::order::{LineItem, Order};
use takeout_core::receipt::menu_table;
use takeout_core::{InputError, Money};
use tracing::{debug, info};

use crate::prompt::{prompt_quantity, Console};

/// Drives one full ordering session: greeting, menu, the browse/select/
/// confirm loop, and the final total.
///
/// Returns the accumulated order (possibly empty) and its total. The only
/// error path is I/O failure on the console (e.g. stdin closed); every
/// validation failure is recovered by re-prompting.
pub fn place_order<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> io::Result<(Order, Money)> {
    let entries = catalog.flatten();
    let mut order = Order::new();

    console.say("Welcome to the Generic Take Out Restaurant.")?;
    console.say("What would you like to order? ")?;
    console.print(&menu_table(&entries))?;

    // Browsing: each pass handles one selection attempt.
    loop {
        let raw = console.prompt("Type menu number: ")?;

        let entry = match parse_selection(&raw, entries.len()) {
            Ok(Selection::Checkout) => break,
            Ok(Selection::Item(i)) => &entries[i],
            Err(err) => {
                console.say(&err.to_string())?;
                continue;
            }
        };

        // ItemSelected → QuantityEntered: the quantity prompt loops until
        // it gets a positive integer; there is no way to back out.
        let quantity = prompt_quantity(console, &entry.name, None)?;
        order.push_line(LineItem::from_entry(entry, quantity));
        debug!(item = %entry.name, quantity, "line item added");

        // Confirmed: only a case-insensitive "y" keeps the session going.
        let again = console.prompt("Would you like to keep ordering? (N) to quit: ")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    let total = order.total();
    info!(lines = order.line_count(), total = %total, "order complete");
    Ok((order, total))
}

/// Single-shot order update against a pre-numbered entry list.
///
/// A non-looping variant of the collection loop with deliberately weaker
/// validation, retained for one-off updates outside the main session:
/// - an unusable selection leaves the order unchanged;
/// - an unusable quantity falls back to 1 instead of re-prompting.
///
/// Appends at most one line item per call. Both paths produce the same
/// [`LineItem`] shape.
pub fn update_order<R: BufRead, W: Write>(
    order: &mut Order,
    raw_selection: &str,
    entries: &[MenuEntry],
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let entry = match parse_selection(raw_selection, entries.len()) {
        Ok(Selection::Item(i)) => &entries[i],
        Err(InputError::NotANumber) => {
            console.say("Invalid input. Please enter a number.")?;
            return Ok(());
        }
        // The checkout sentinel has no meaning here; 0 is just out of range.
        Ok(Selection::Checkout) | Err(_) => {
            console.say("Invalid input. Please enter a valid number.")?;
            return Ok(());
        }
    };

    let raw_quantity = console.prompt(&format!(
        "How many {} would you like to order? ",
        entry.name
    ))?;
    let quantity = match takeout_core::input::parse_quantity(&raw_quantity) {
        Ok(quantity) => quantity,
        Err(InputError::NotANumber) => {
            console.say("Invalid input. Quantity must be a number.")?;
            1
        }
        Err(_) => {
            console.say("Quantity must be at least 1.")?;
            1
        }
    };

    order.push_line(LineItem::from_entry(entry, quantity));
    console.say(&format!("{} {} added to your order.", quantity, entry.name))?;
    debug!(item = %entry.name, quantity, "line item added (single-shot)");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use takeout_core::catalog::default_menu;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    fn burrito_menu() -> Catalog {
        Catalog::from_rows(&[("Burrito", &[("Chicken", 449)])])
    }

    /// Select item 1, quantity 2, decline to continue.
    #[test]
    fn test_one_item_session() {
        let mut c = console("1\n2\nn\n");
        let (order, total) = place_order(&burrito_menu(), &mut c).unwrap();

        assert_eq!(order.line_count(), 1);
        assert_eq!(order.lines[0].name, "Burrito - Chicken");
        assert_eq!(order.lines[0].unit_price, Money::from_cents(449));
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(total, Money::from_cents(898));

        let out = transcript(c);
        assert!(out.contains("Welcome to the Generic Take Out Restaurant."));
        assert!(out.contains("1       | Burrito - Chicken                | $4.49"));
    }

    /// Immediately typing the sentinel ends with an empty order.
    #[test]
    fn test_immediate_checkout() {
        let mut c = console("0\n");
        let (order, total) = place_order(&burrito_menu(), &mut c).unwrap();

        assert!(order.is_empty());
        assert_eq!(total, Money::zero());
        assert_eq!(total.decimal_string(), "0.00");
    }

    /// Quantity "abc" then "3": exactly one rejection, quantity 3 recorded.
    #[test]
    fn test_quantity_retry_inside_session() {
        let mut c = console("1\nabc\n3\nn\n");
        let (order, _) = place_order(&burrito_menu(), &mut c).unwrap();

        assert_eq!(order.lines[0].quantity, 3);
        let out = transcript(c);
        assert_eq!(out.matches("Please enter a number.").count(), 1);
    }

    /// Bad selections keep the session in browsing; "y" loops back for more.
    #[test]
    fn test_invalid_selection_and_continue() {
        let catalog = default_menu(); // 15 entries
        let mut c = console("99\nabc\n1\n1\ny\n15\n2\nn\n");
        let (order, total) = place_order(&catalog, &mut c).unwrap();

        assert_eq!(order.line_count(), 2);
        assert_eq!(order.lines[0].name, "Burrito - Chicken");
        assert_eq!(order.lines[1].name, "Burger - Beef");
        assert_eq!(order.lines[1].quantity, 2);
        // 449 + 2 × 849
        assert_eq!(total, Money::from_cents(2147));

        let out = transcript(c);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Please enter a number."));
    }

    /// Any continue answer other than "y"/"Y" ends the session.
    #[test]
    fn test_uppercase_y_continues() {
        let mut c = console("1\n1\nY\n1\n1\nmaybe\n");
        let (order, _) = place_order(&burrito_menu(), &mut c).unwrap();
        assert_eq!(order.line_count(), 2);
    }

    /// A closed stdin mid-session surfaces as an I/O error.
    #[test]
    fn test_eof_mid_session_is_an_error() {
        let mut c = console("1\n");
        let err = place_order(&burrito_menu(), &mut c).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_update_order_happy_path() {
        let entries = burrito_menu().flatten();
        let mut order = Order::new();
        let mut c = console("2\n");

        update_order(&mut order, "1", &entries, &mut c).unwrap();

        assert_eq!(order.line_count(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert!(transcript(c).contains("2 Burrito - Chicken added to your order."));
    }

    /// Weaker policy: a garbage quantity falls back to 1, no re-prompt.
    #[test]
    fn test_update_order_quantity_fallback() {
        let entries = burrito_menu().flatten();
        let mut order = Order::new();
        let mut c = console("lots\n");

        update_order(&mut order, "1", &entries, &mut c).unwrap();

        assert_eq!(order.lines[0].quantity, 1);
        let out = transcript(c);
        assert!(out.contains("Invalid input. Quantity must be a number."));
        assert!(out.contains("1 Burrito - Chicken added to your order."));
    }

    #[test]
    fn test_update_order_zero_quantity_fallback() {
        let entries = burrito_menu().flatten();
        let mut order = Order::new();
        let mut c = console("0\n");

        update_order(&mut order, "1", &entries, &mut c).unwrap();

        assert_eq!(order.lines[0].quantity, 1);
        assert!(transcript(c).contains("Quantity must be at least 1."));
    }

    /// Bad selections leave the order untouched.
    #[test]
    fn test_update_order_rejects_bad_selection() {
        let entries = burrito_menu().flatten();
        let mut order = Order::new();

        let mut c = console("");
        update_order(&mut order, "five", &entries, &mut c).unwrap();
        assert!(transcript(c).contains("Invalid input. Please enter a number."));

        let mut c = console("");
        update_order(&mut order, "2", &entries, &mut c).unwrap();
        assert!(transcript(c).contains("Invalid input. Please enter a valid number."));

        // The sentinel is not a valid single-shot selection either.
        let mut c = console("");
        update_order(&mut order, "0", &entries, &mut c).unwrap();
        assert!(transcript(c).contains("Invalid input. Please enter a valid number."));

        assert!(order.is_empty());
    }
}
