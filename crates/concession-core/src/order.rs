//! # Order
//!
//! An ordered list of drinks and food with a running total.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Operations                                  │
//! │                                                                         │
//! │  Cashier Action           Method                 State Change           │
//! │  ──────────────           ──────                 ────────────           │
//! │                                                                         │
//! │  Ring up item ──────────► add_item() ──────────► items.push(item)      │
//! │                                                                         │
//! │  Void a line ───────────► remove_item(i) ──────► items.remove(i)       │
//! │                                                  later lines shift down │
//! │                                                                         │
//! │  Show total ────────────► total() ─────────────► (read only)           │
//! │                           Σ item.price()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Order` is a plain owned value. Callers sharing one across threads wrap
//! it in a `Mutex`, one lock per order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::drink::Drink;
use crate::error::CoreResult;
use crate::food::Food;
use crate::money::Money;
use crate::validation::validate_index;

// =============================================================================
// Priceable
// =============================================================================

/// Anything that can be rung up with a price.
pub trait Priceable {
    /// The price this item contributes to an order total.
    fn price(&self) -> Money;
}

// =============================================================================
// Order Item
// =============================================================================

/// One line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderItem {
    Drink(Drink),
    Food(Food),
}

impl OrderItem {
    /// Borrows the drink, if this line is one.
    pub fn as_drink(&self) -> Option<&Drink> {
        match self {
            OrderItem::Drink(drink) => Some(drink),
            OrderItem::Food(_) => None,
        }
    }

    /// Borrows the food, if this line is one.
    pub fn as_food(&self) -> Option<&Food> {
        match self {
            OrderItem::Food(food) => Some(food),
            OrderItem::Drink(_) => None,
        }
    }

    fn as_priceable(&self) -> &dyn Priceable {
        match self {
            OrderItem::Drink(drink) => drink,
            OrderItem::Food(food) => food,
        }
    }
}

impl Priceable for OrderItem {
    fn price(&self) -> Money {
        self.as_priceable().price()
    }
}

impl From<Drink> for OrderItem {
    fn from(drink: Drink) -> Self {
        OrderItem::Drink(drink)
    }
}

impl From<Food> for OrderItem {
    fn from(food: Food) -> Self {
        OrderItem::Food(food)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// ## Invariants
/// - Items keep insertion order, indexed contiguously from 0
/// - Removing an item shifts every later item down by one
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: Uuid,
    items: Vec<OrderItem>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        let order = Order {
            id: Uuid::new_v4(),
            items: Vec::new(),
            created_at: Utc::now(),
        };
        debug!(order_id = %order.id, "Created order");
        order
    }

    /// Appends an item to the end of the order.
    ///
    /// ## Example
    /// ```rust
    /// use concession_core::{Drink, Food, Money, Order};
    ///
    /// let mut drink = Drink::new();
    /// drink.add_base("water").unwrap();
    /// let mut food = Food::new("Hotdog").unwrap();
    /// food.add_topping("Chili").unwrap();
    ///
    /// let mut order = Order::new();
    /// order.add_item(drink);
    /// order.add_item(food);
    ///
    /// assert_eq!(order.item_count(), 2);
    /// assert_eq!(order.total(), Money::from_cents(790)); // $5.00 + $2.30 + $0.60
    /// ```
    pub fn add_item(&mut self, item: impl Into<OrderItem>) {
        let item = item.into();
        debug!(
            order_id = %self.id,
            position = self.items.len(),
            price = %item.price(),
            "Added order item"
        );
        self.items.push(item);
    }

    /// Removes and returns the item at `index`.
    ///
    /// ## Errors
    /// `OutOfRange` if `index` does not address an item. The order is left
    /// unchanged.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<OrderItem> {
        validate_index(index, self.items.len())
            .inspect_err(|e| warn!(order_id = %self.id, error = %e, "Rejected item removal"))?;

        let removed = self.items.remove(index);
        debug!(
            order_id = %self.id,
            index,
            remaining = self.items.len(),
            "Removed order item"
        );
        Ok(removed)
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&OrderItem> {
        self.items.get(index)
    }

    /// Sums the price of every item. Zero for an empty order.
    pub fn total(&self) -> Money {
        self.items.iter().map(Priceable::price).sum()
    }

    /// Returns the order ID.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns when the order was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Order totals snapshot for receipts and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub item_count: usize,
    pub drink_count: usize,
    pub food_count: usize,
    pub total_cents: i64,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        let drink_count = order
            .items
            .iter()
            .filter(|item| item.as_drink().is_some())
            .count();

        OrderSummary {
            order_id: order.id,
            item_count: order.item_count(),
            drink_count,
            food_count: order.item_count() - drink_count,
            total_cents: order.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn water() -> Drink {
        let mut drink = Drink::new();
        drink.add_base("water").unwrap();
        drink
    }

    fn hotdog_with_chili() -> Food {
        let mut food = Food::new("Hotdog").unwrap();
        food.add_topping("Chili").unwrap();
        food
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert_eq!(order.item_count(), 0);
        assert!(order.is_empty());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_add_items() {
        let mut order = Order::new();
        order.add_item(water());
        assert_eq!(order.item_count(), 1);
        assert!(order.get(0).and_then(OrderItem::as_drink).is_some());
    }

    #[test]
    fn test_get_total() {
        let mut order = Order::new();
        order.add_item(water());
        order.add_item(hotdog_with_chili());
        assert_eq!(order.total(), Money::from_cents(790));
    }

    #[test]
    fn test_drink_price_is_flat() {
        let mut order = Order::new();
        let mut fancy = Drink::new();
        fancy.add_base("pokeacola").unwrap();
        fancy.add_flavor("cherry").unwrap();
        fancy.add_flavor("lime").unwrap();
        order.add_item(fancy);
        order.add_item(Drink::new());
        assert_eq!(order.total().cents(), 1000);
    }

    #[test]
    fn test_remove_item() {
        let mut order = Order::new();
        order.add_item(water());
        let removed = order.remove_item(0).unwrap();
        assert!(removed.as_drink().is_some());
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut order = Order::new();
        order.add_item(Food::new("Corndog").unwrap());
        order.add_item(water());
        order.add_item(Food::new("Tater Tots").unwrap());

        order.remove_item(1).unwrap();

        assert_eq!(order.item_count(), 2);
        let items: Vec<_> = order
            .items()
            .iter()
            .filter_map(OrderItem::as_food)
            .map(Food::item)
            .collect();
        assert_eq!(
            items,
            vec![
                crate::menu::FoodItem::Corndog,
                crate::menu::FoodItem::TaterTots
            ]
        );
        assert_eq!(order.total().cents(), 370);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut order = Order::new();
        assert_eq!(
            order.remove_item(0).unwrap_err(),
            CoreError::OutOfRange { index: 0, len: 0 }
        );

        order.add_item(water());
        assert!(matches!(
            order.remove_item(1),
            Err(CoreError::OutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_item_price_delegates() {
        let drink: OrderItem = water().into();
        let food: OrderItem = hotdog_with_chili().into();
        assert_eq!(drink.price().cents(), 500);
        assert_eq!(food.price().cents(), 290);
        assert!(food.as_drink().is_none());
    }

    #[test]
    fn test_summary() {
        let mut order = Order::new();
        order.add_item(water());
        order.add_item(water());
        order.add_item(hotdog_with_chili());

        let summary = OrderSummary::from(&order);
        assert_eq!(summary.order_id, order.id());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.drink_count, 2);
        assert_eq!(summary.food_count, 1);
        assert_eq!(summary.total_cents, 1290);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalCents"], 1290);
        assert_eq!(json["drinkCount"], 2);
    }

    #[test]
    fn test_serialized_items_are_tagged() {
        let mut order = Order::new();
        order.add_item(water());
        order.add_item(hotdog_with_chili());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["items"][0]["kind"], "drink");
        assert_eq!(json["items"][0]["base"], "water");
        assert_eq!(json["items"][1]["kind"], "food");
        assert_eq!(json["items"][1]["item"], "Hotdog");
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        assert_ne!(Order::new().id(), Order::new().id());
        assert!(Order::new().created_at() <= Utc::now());
    }
}
