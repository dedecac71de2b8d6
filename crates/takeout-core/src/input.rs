//! # Input Validation
//!
//! Pure parsing of raw prompt input into validated values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Prompt / Parse Split                               │
//! │                                                                         │
//! │  apps/cli (interactive shell)          takeout-core (THIS MODULE)       │
//! │  ────────────────────────────          ──────────────────────────       │
//! │                                                                         │
//! │  loop {                                                                 │
//! │      raw = read_line()  ─────────────► parse_quantity(raw)              │
//! │      match result {                        │                            │
//! │          Ok(qty) => return qty,            ├── not an integer?          │
//! │          Err(e)  => print e, retry         │     Err(NotANumber)        │
//! │      }                                     ├── < 1 or > 999?            │
//! │  }                                         │     Err(InvalidQuantity)   │
//! │                                            └── Ok(qty)                  │
//! │                                                                         │
//! │  The shell owns the retry loop; the validation is a pure function       │
//! │  that unit tests call directly, no stdin simulation needed.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{InputError, InputResult};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Selection
// =============================================================================

/// The outcome of parsing a menu-number selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The checkout sentinel (`0`): stop browsing and total up.
    Checkout,
    /// A valid menu entry, as a 0-based index into the flattened list.
    Item(usize),
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a raw quantity string.
///
/// ## Rules
/// - Trimmed input must parse as an integer, else [`InputError::NotANumber`]
/// - Must be at least 1 and at most [`MAX_ITEM_QUANTITY`], else
///   [`InputError::InvalidQuantity`]
///
/// ## Example
/// ```rust
/// use takeout_core::input::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("abc").is_err());
/// ```
pub fn parse_quantity(raw: &str) -> InputResult<u32> {
    // Parse as signed first so "-1" is a range error, not a parse error.
    let quantity: i64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;

    if quantity < 1 || quantity > MAX_ITEM_QUANTITY as i64 {
        return Err(InputError::InvalidQuantity);
    }

    Ok(quantity as u32)
}

/// Parses a raw menu-number selection against an `item_count`-entry menu.
///
/// ## Rules
/// - Trimmed input must parse as an integer, else [`InputError::NotANumber`]
/// - `0` is the checkout sentinel
/// - `1..=item_count` selects an item (returned as a 0-based index)
/// - Anything else is [`InputError::InvalidSelection`]
///
/// ## Example
/// ```rust
/// use takeout_core::input::{parse_selection, Selection};
///
/// assert_eq!(parse_selection("0", 15).unwrap(), Selection::Checkout);
/// assert_eq!(parse_selection("1", 15).unwrap(), Selection::Item(0));
/// assert!(parse_selection("16", 15).is_err());
/// ```
pub fn parse_selection(raw: &str, item_count: usize) -> InputResult<Selection> {
    let selection: i64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;

    if selection == 0 {
        return Ok(Selection::Checkout);
    }

    if selection < 1 || selection > item_count as i64 {
        return Err(InputError::InvalidSelection);
    }

    Ok(Selection::Item((selection - 1) as usize))
}

// =============================================================================
// Unit Tests
// =============================================================================
