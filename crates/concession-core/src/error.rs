//! # Error Types
//!
//! Domain-specific error types for concession-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  concession-core errors (this file)                                    │
//! │  └── CoreError                                                          │
//! │      ├── InvalidArgument  - name not on the menu                       │
//! │      ├── DuplicateEntry   - flavor already on the drink                │
//! │      ├── InvalidPrice     - negative price in a custom menu            │
//! │      ├── PriceTooHigh     - price above MAX_PRICE_CENTS                │
//! │      └── OutOfRange       - order index past the end                   │
//! │                                                                         │
//! │  concession-config errors (separate crate)                             │
//! │  └── ConfigError          - file/env/parse failures, wraps CoreError   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, rejected value, index)
//! 3. Errors are enum variants, never String
//! 4. Every error is returned synchronously to the caller, never recovered

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by drink, food and order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A base, flavor, food item or topping is not on the menu.
    ///
    /// ## When This Occurs
    /// - `Drink::add_base("cola")` - not one of the six bases
    /// - `Food::new("Pizza")` - not in the food price table
    /// - A config file prices a topping that does not exist
    #[error("Invalid {field}: '{value}' (must be one of: {allowed:?})")]
    InvalidArgument {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// The value is already present and may only appear once.
    ///
    /// Only flavors are presence flags. Re-adding a topping overwrites its
    /// price and is not an error.
    #[error("{field} '{value}' has already been added")]
    DuplicateEntry { field: &'static str, value: String },

    /// A menu price is negative.
    #[error("Price for {item} must not be negative, got {cents} cents")]
    InvalidPrice { item: String, cents: i64 },

    /// A menu price is above [`crate::MAX_PRICE_CENTS`].
    #[error("Price for {item} must not exceed {max} cents, got {cents} cents")]
    PriceTooHigh { item: String, cents: i64, max: i64 },

    /// An order index does not address an existing item.
    #[error("Index {index} is out of range for an order with {len} items")]
    OutOfRange { index: usize, len: usize },
}

impl CoreError {
    /// Builds an `InvalidArgument` for `value` rejected against `allowed`.
    pub fn invalid(
        field: &'static str,
        value: impl Into<String>,
        allowed: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        CoreError::InvalidArgument {
            field,
            value: value.into(),
            allowed: allowed.into_iter().collect(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
