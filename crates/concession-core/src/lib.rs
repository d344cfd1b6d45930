//! # concession-core: Pure Ordering Logic for Concession POS
//!
//! This crate is the **heart** of Concession POS. It validates drinks and
//! food against the menu and prices orders, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Concession POS Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              concession-config (menu.toml + env)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Menu                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ concession-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   drink   │  │   food    │  │   order   │  │   │
//! │  │   │ Base      │  │ base      │  │ item      │  │ items     │  │   │
//! │  │   │ Flavor    │  │ flavors   │  │ toppings  │  │ total     │  │   │
//! │  │   │ FoodItem  │  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   │ Topping   │  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ Menu      │  │   money   │  │ validation│  │   error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu entries and price tables
//! - [`drink`] - A base plus distinct flavors, flat price
//! - [`food`] - A food item plus priced toppings
//! - [`order`] - Ordered line items with a total
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Price and index rules
//!
//! ## Example Usage
//!
//! ```rust
//! use concession_core::{Drink, Food, Money, Order};
//!
//! let mut drink = Drink::new();
//! drink.add_base("water")?;
//! drink.add_flavor("lemon")?;
//!
//! let mut food = Food::new("Hotdog")?;
//! food.add_topping("Chili")?;
//!
//! let mut order = Order::new();
//! order.add_item(drink);
//! order.add_item(food);
//!
//! assert_eq!(order.total(), Money::from_cents(790));
//! # Ok::<(), concession_core::CoreError>(())
//! ```

// =============================================================================
// Constants
// =============================================================================

/// Highest price, in cents, a menu may charge for a single drink, food item
/// or topping ($10,000.00).
///
/// ## Business Reason
/// Catches a mistyped config price before it reaches a till, and keeps every
/// order total far inside the range of `Money`.
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod drink;
pub mod error;
pub mod food;
pub mod menu;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use drink::Drink;
pub use error::{CoreError, CoreResult};
pub use food::Food;
pub use menu::{Base, Flavor, FoodItem, Menu, Topping, DRINK_PRICE};
pub use money::Money;
pub use order::{Order, OrderItem, OrderSummary, Priceable};
