//! # Order Model
//!
//! Line items and the running order for one session.
//!
//! ## Invariants
//! - Every line item's name and price are snapshots of a menu entry that
//!   existed at selection time
//! - `quantity >= 1` always (enforced upstream by [`crate::input`])
//! - Lines are append-only, in the customer's selection order
//! - Re-adding the same item appends a NEW line; lines never merge
//!
//! The no-merge rule is deliberate: the receipt mirrors the order in which
//! things were asked for, one row per confirmed selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::MenuEntry;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One ordered item with its quantity and price snapshot.
///
/// ## Price Freezing
/// The name and unit price are captured from the menu entry at the moment
/// the selection is confirmed. Both interactive paths (`place_order` and
/// `update_order` in the CLI) build this same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name at time of selection (frozen): `"<category> - <meal>"`.
    pub name: String,

    /// Unit price at time of selection (frozen).
    pub unit_price: Money,

    /// Quantity ordered. Always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item from a menu entry and a validated quantity.
    pub fn from_entry(entry: &MenuEntry, quantity: u32) -> Self {
        LineItem {
            name: entry.name.clone(),
            unit_price: entry.price,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Order
// =============================================================================

/// The running order for one session.
///
/// Owned exclusively by the active session; there is no persistence, so the
/// order is discarded when the program exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Lines in selection order.
    pub lines: Vec<LineItem>,

    /// When the order was started.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a confirmed line item.
    ///
    /// Always appends; an order with the same item twice carries two lines.
    pub fn push_line(&mut self, line: LineItem) {
        self.lines.push(line);
    }

    /// The order total: Σ unit_price × quantity over all lines.
    ///
    /// Exact in cents; independent of entry order.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the order.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
