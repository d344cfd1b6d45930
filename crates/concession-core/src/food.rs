//! # Food
//!
//! A food item from the menu plus any number of priced toppings.
//!
//! ## Pricing
//! ```text
//! Food::new("Hotdog")          base_price: $2.30   (frozen for the lifetime)
//!      │
//!      ▼
//! add_topping("Chili")         toppings: {Chili: $0.60}
//!      │
//!      ▼
//! add_topping("Chili")         toppings: {Chili: $0.60}   (overwrite, no error)
//!      │
//!      ▼
//! price()                      $2.30 + $0.60 = $2.90
//! ```
//!
//! Toppings are price modifiers without a quantity, so adding one twice just
//! stores its price again. Compare flavors on a drink, which reject repeats.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::menu::{FoodItem, Menu, Topping};
use crate::money::Money;
use crate::order::Priceable;

/// A food order line: one menu item and its toppings.
///
/// Two lines are equal when they have the same item, base price and priced
/// toppings. The menu they were built from is not compared.
#[derive(Debug, Clone, Serialize)]
pub struct Food {
    item: FoodItem,
    base_price: Money,
    toppings: BTreeMap<Topping, Money>,
    #[serde(skip)]
    menu: Arc<Menu>,
}

impl Food {
    /// Creates a food item priced from the standard menu.
    ///
    /// ## Errors
    /// `InvalidArgument` if `item` is not on the menu.
    ///
    /// ## Example
    /// ```rust
    /// use concession_core::{Food, Money};
    ///
    /// let mut food = Food::new("Hotdog").unwrap();
    /// food.add_topping("Chili").unwrap();
    /// assert_eq!(food.price(), Money::from_cents(290));
    ///
    /// assert!(Food::new("InvalidItem").is_err());
    /// ```
    pub fn new(item: &str) -> CoreResult<Self> {
        Self::from_menu(Menu::standard(), item)
    }

    /// Creates a food item priced from `menu`.
    ///
    /// The base price is read once here. Topping prices are read from the
    /// same menu as toppings are added.
    pub fn from_menu(menu: Arc<Menu>, item: &str) -> CoreResult<Self> {
        let item = item
            .parse::<FoodItem>()
            .inspect_err(|e| warn!(error = %e, "Rejected food item"))?;
        let base_price = menu.food_price(item);
        debug!(%item, %base_price, "Created food item");

        Ok(Food {
            item,
            base_price,
            toppings: BTreeMap::new(),
            menu,
        })
    }

    /// Adds a topping, storing its current menu price.
    ///
    /// ## Errors
    /// `InvalidArgument` if `topping` is not on the menu. Adding a topping
    /// that is already present is not an error.
    pub fn add_topping(&mut self, topping: &str) -> CoreResult<()> {
        let topping = topping
            .parse::<Topping>()
            .inspect_err(|e| warn!(error = %e, item = %self.item, "Rejected topping"))?;
        let price = self.menu.topping_price(topping);

        if self.toppings.insert(topping, price).is_some() {
            debug!(%topping, item = %self.item, "Topping already present, price refreshed");
        } else {
            debug!(%topping, %price, item = %self.item, "Added topping");
        }
        Ok(())
    }

    /// Returns the toppings, in menu order.
    pub fn toppings(&self) -> Vec<Topping> {
        self.toppings.keys().copied().collect()
    }

    /// Returns the menu item.
    pub fn item(&self) -> FoodItem {
        self.item
    }

    /// Returns the item price without toppings.
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Returns the base price plus every stored topping price.
    pub fn price(&self) -> Money {
        self.base_price + self.toppings.values().sum::<Money>()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
            && self.base_price == other.base_price
            && self.toppings == other.toppings
    }
}

impl Eq for Food {}

impl Priceable for Food {
    fn price(&self) -> Money {
        Food::price(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
