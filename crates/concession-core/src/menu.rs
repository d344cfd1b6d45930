//! # Menu
//!
//! The fixed menu: which bases, flavors, food items and toppings exist, and
//! what they cost.
//!
//! ## Menu Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Drinks (flat $5.00)                                                    │
//! │    Bases:    water, sbrite, pokeacola, Mr. Salt, hill fog, leaf wine   │
//! │    Flavors:  lemon, cherry, strawberry, mint, blueberry, lime           │
//! │                                                                         │
//! │  Food                          Toppings                                 │
//! │    Hotdog        $2.30           Cherry            $0.00                │
//! │    Corndog       $2.00           Whipped Cream     $0.00                │
//! │    Ice Cream     $3.00           Caramel Sauce     $0.50                │
//! │    Onion Rings   $1.75           Chocolate Sauce   $0.50                │
//! │    French Fries  $1.50           Nacho Cheese      $0.30                │
//! │    Tater Tots    $1.70           Chili             $0.60                │
//! │    Nacho Chips   $1.90           Bacon Bits        $0.30                │
//! │                                  Ketchup           $0.00                │
//! │                                  Mustard           $0.00                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names are matched exactly and case-sensitively (`"water"` but
//! `"Hotdog"`), the way they appear on the menu board.
//!
//! The set of valid names is fixed at compile time. A [`Menu`] only carries
//! prices, so a menu loaded from configuration can reprice items but never
//! add or remove them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_price;

/// Flat price of any drink, regardless of base or flavors.
pub const DRINK_PRICE: Money = Money::from_cents(500);

/// Declares a menu enum with its exact menu names.
///
/// Generates `ALL`, `as_str`, `names`, `Display`, `FromStr` (failing with
/// `InvalidArgument`) and serde support keyed by menu name.
macro_rules! menu_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $field:literal {
            $( $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every entry, in menu order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact menu name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Menu names of every entry, in menu order.
            pub fn names() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|entry| entry.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.as_str() == s)
                    .ok_or_else(|| CoreError::invalid($field, s, Self::names()))
            }
        }
    };
}

// =============================================================================
// Drink Menu
// =============================================================================

menu_enum! {
    /// The liquid a drink is built on.
    pub enum Base as "base" {
        Water => "water",
        Sbrite => "sbrite",
        Pokeacola => "pokeacola",
        MrSalt => "Mr. Salt",
        HillFog => "hill fog",
        LeafWine => "leaf wine",
    }
}

menu_enum! {
    /// A flavor shot. Each flavor can be added to a drink at most once.
    pub enum Flavor as "flavor" {
        Lemon => "lemon",
        Cherry => "cherry",
        Strawberry => "strawberry",
        Mint => "mint",
        Blueberry => "blueberry",
        Lime => "lime",
    }
}

// =============================================================================
// Food Menu
// =============================================================================

menu_enum! {
    /// A priced food product.
    pub enum FoodItem as "food item" {
        Hotdog => "Hotdog",
        Corndog => "Corndog",
        IceCream => "Ice Cream",
        OnionRings => "Onion Rings",
        FrenchFries => "French Fries",
        TaterTots => "Tater Tots",
        NachoChips => "Nacho Chips",
    }
}

impl FoodItem {
    /// Price on the standard menu board.
    pub const fn standard_price(&self) -> Money {
        match self {
            FoodItem::Hotdog => Money::from_cents(230),
            FoodItem::Corndog => Money::from_cents(200),
            FoodItem::IceCream => Money::from_cents(300),
            FoodItem::OnionRings => Money::from_cents(175),
            FoodItem::FrenchFries => Money::from_cents(150),
            FoodItem::TaterTots => Money::from_cents(170),
            FoodItem::NachoChips => Money::from_cents(190),
        }
    }
}

menu_enum! {
    /// A priced addition to a food item.
    pub enum Topping as "topping" {
        Cherry => "Cherry",
        WhippedCream => "Whipped Cream",
        CaramelSauce => "Caramel Sauce",
        ChocolateSauce => "Chocolate Sauce",
        NachoCheese => "Nacho Cheese",
        Chili => "Chili",
        BaconBits => "Bacon Bits",
        Ketchup => "Ketchup",
        Mustard => "Mustard",
    }
}

impl Topping {
    /// Price on the standard menu board.
    pub const fn standard_price(&self) -> Money {
        match self {
            Topping::Cherry | Topping::WhippedCream => Money::zero(),
            Topping::CaramelSauce | Topping::ChocolateSauce => Money::from_cents(50),
            Topping::NachoCheese | Topping::BaconBits => Money::from_cents(30),
            Topping::Chili => Money::from_cents(60),
            Topping::Ketchup | Topping::Mustard => Money::zero(),
        }
    }
}

// =============================================================================
// Price Table
// =============================================================================

static STANDARD_MENU: LazyLock<Arc<Menu>> = LazyLock::new(|| Arc::new(Menu::default()));

/// An immutable price table for drinks, food items and toppings.
///
/// Every food item and topping always has a price. Build a custom table with
/// the `with_*` methods, then share it behind an `Arc`:
///
/// ```rust
/// use std::sync::Arc;
/// use concession_core::menu::{FoodItem, Menu};
/// use concession_core::{Food, Money};
///
/// let menu = Menu::default()
///     .with_food_price(FoodItem::Hotdog, Money::from_cents(250))
///     .unwrap();
/// let food = Food::from_menu(Arc::new(menu), "Hotdog").unwrap();
/// assert_eq!(food.price(), Money::from_cents(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    drink_price: Money,
    food_prices: BTreeMap<FoodItem, Money>,
    topping_prices: BTreeMap<Topping, Money>,
}

impl Menu {
    /// The standard menu board, built once per process.
    pub fn standard() -> Arc<Menu> {
        Arc::clone(&STANDARD_MENU)
    }

    /// Replaces the flat drink price.
    pub fn with_drink_price(mut self, price: Money) -> CoreResult<Self> {
        self.drink_price = validate_price("drink", price)?;
        Ok(self)
    }

    /// Replaces the price of one food item.
    pub fn with_food_price(mut self, item: FoodItem, price: Money) -> CoreResult<Self> {
        self.food_prices
            .insert(item, validate_price(item.as_str(), price)?);
        Ok(self)
    }

    /// Replaces the price of one topping.
    pub fn with_topping_price(mut self, topping: Topping, price: Money) -> CoreResult<Self> {
        self.topping_prices
            .insert(topping, validate_price(topping.as_str(), price)?);
        Ok(self)
    }

    /// Flat price of a drink.
    pub fn drink_price(&self) -> Money {
        self.drink_price
    }

    /// Price of a food item before toppings.
    pub fn food_price(&self, item: FoodItem) -> Money {
        self.food_prices
            .get(&item)
            .copied()
            .unwrap_or_else(|| item.standard_price())
    }

    /// Price of a topping.
    pub fn topping_price(&self, topping: Topping) -> Money {
        self.topping_prices
            .get(&topping)
            .copied()
            .unwrap_or_else(|| topping.standard_price())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu {
            drink_price: DRINK_PRICE,
            food_prices: FoodItem::ALL
                .iter()
                .map(|item| (*item, item.standard_price()))
                .collect(),
            topping_prices: Topping::ALL
                .iter()
                .map(|topping| (*topping, topping.standard_price()))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
