//! # Validation Module
//!
//! Shared checks for prices and order positions.
//!
//! Menu names are validated by parsing them into the menu enums (see
//! [`crate::menu`]); this module covers the numeric rules.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_PRICE_CENTS;

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free toppings like Ketchup)
/// - Must not exceed MAX_PRICE_CENTS ($10,000.00)
///
/// ## Example
/// ```rust
/// use concession_core::money::Money;
/// use concession_core::validation::validate_price;
///
/// assert!(validate_price("Ketchup", Money::zero()).is_ok());
/// assert!(validate_price("Hotdog", Money::from_cents(-230)).is_err());
/// assert!(validate_price("drink", Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(item: &str, price: Money) -> CoreResult<Money> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice {
            item: item.to_string(),
            cents: price.cents(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(CoreError::PriceTooHigh {
            item: item.to_string(),
            cents: price.cents(),
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(price)
}

/// Validates a zero-based position in an order.
///
/// ## Rules
/// - Must address an existing item (`index < len`)
/// - Always fails on an empty order
pub fn validate_index(index: usize, len: usize) -> CoreResult<()> {
    if index >= len {
        return Err(CoreError::OutOfRange { index, len });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
