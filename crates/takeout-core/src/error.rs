//! # Error Types
//!
//! Input error types for takeout-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  InputError (this file)                                                 │
//! │  ├── NotANumber           - raw input failed to parse as an integer     │
//! │  ├── InvalidQuantity      - integer quantity outside [1, 999]           │
//! │  └── InvalidSelection     - integer selection outside [0, N]            │
//! │                                                                         │
//! │  Every variant is RECOVERABLE: the prompt loop prints the variant's     │
//! │  Display text and asks again. Nothing here is fatal.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The `#[error]` text IS the user-facing prompt message, verbatim

use thiserror::Error;

// =============================================================================
// Input Error
// =============================================================================

/// Errors produced while validating raw prompt input.
///
/// The Display text of each variant is printed to the user as-is before
/// re-prompting, so the wording here is part of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Raw input did not parse as an integer at all.
    #[error("Please enter a number.")]
    NotANumber,

    /// Quantity parsed but is outside the accepted range (below 1, or
    /// above [`crate::MAX_ITEM_QUANTITY`]).
    #[error("Please enter a valid quantity.")]
    InvalidQuantity,

    /// Menu selection parsed but is outside `[0, N]` for an N-entry menu.
    #[error("Please enter a valid number.")]
    InvalidSelection,
}

/// Convenience type alias for Results with InputError.
pub type InputResult<T> = Result<T, InputError>;

// =============================================================================
// Unit Tests
// =============================================================================
