//! # takeout-core: Pure Business Logic for Takeout
//!
//! This crate is the **heart** of the Takeout ordering simulator. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Takeout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (stdin/stdout)                      │   │
//! │  │    Menu Table ──► Selection Prompt ──► Quantity Prompt          │   │
//! │  │                ──► Continue Prompt ──► Receipt                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/cli (session loop)                      │   │
//! │  │    place_order, update_order, prompt_quantity                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ takeout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   order   │  │   input   │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Order   │  │  parsing  │  │   │
//! │  │   │ MenuEntry │  │  $ math   │  │ LineItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                           │   │
//! │  │                        │  receipt  │                           │   │
//! │  │                        │ rendering │                           │   │
//! │  │                        └───────────┘                           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO GLOBALS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The menu catalog and its flattened numbered entries
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Line items and the running order
//! - [`input`] - Pure parsing/validation of raw prompt input
//! - [`receipt`] - Fixed-width menu table and receipt rendering
//! - [`error`] - Input error types with user-facing messages
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The terminal lives in apps/cli; this crate never reads or prints
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use takeout_core::catalog::default_menu;
//! use takeout_core::input::{parse_quantity, parse_selection, Selection};
//!
//! let entries = default_menu().flatten();
//!
//! // "1" selects the first entry, "0" checks out
//! assert_eq!(parse_selection("1", entries.len()).unwrap(), Selection::Item(0));
//! assert_eq!(parse_selection("0", entries.len()).unwrap(), Selection::Checkout);
//!
//! // Quantities must be positive integers
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("abc").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod input;
pub mod money;
pub mod order;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use takeout_core::Money` instead of
// `use takeout_core::money::Money`

pub use catalog::{Catalog, MenuEntry};
pub use error::InputError;
pub use input::Selection;
pub use money::Money;
pub use order::{LineItem, Order};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in one line of the order
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Width of the item-name column in the menu table and receipt
///
/// Names longer than this overflow the column rather than truncate;
/// rendering is best-effort.
pub const NAME_COLUMN_WIDTH: usize = 32;

/// Width of the price column in the receipt (excluding the `$` prefix)
pub const PRICE_COLUMN_WIDTH: usize = 6;
