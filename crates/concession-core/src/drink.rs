//! # Drink
//!
//! A drink is one base plus any number of distinct flavors, sold at a flat
//! price.
//!
//! ## Drink Building Flow
//! ```text
//! Drink::new()                 base: None, flavors: {}
//!      │
//!      ▼
//! add_base("water")            base: water        (re-setting overwrites)
//!      │
//!      ▼
//! add_flavor("lemon")          flavors: {lemon}
//!      │
//!      ▼
//! add_flavor("lemon")          DuplicateEntry, drink unchanged
//! ```

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::menu::{Base, Flavor, Menu};
use crate::money::Money;
use crate::order::Priceable;

/// A drink with an optional base and a set of flavors.
///
/// The price is captured when the drink is created, so repricing a menu
/// later does not change drinks already rung up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drink {
    base: Option<Base>,
    flavors: BTreeSet<Flavor>,
    price: Money,
}

impl Drink {
    /// Creates an empty drink priced from the standard menu.
    pub fn new() -> Self {
        Self::from_menu(&Menu::standard())
    }

    /// Creates an empty drink priced from `menu`.
    pub fn from_menu(menu: &Menu) -> Self {
        Drink {
            base: None,
            flavors: BTreeSet::new(),
            price: menu.drink_price(),
        }
    }

    /// Sets the base, replacing any previous one.
    ///
    /// ## Errors
    /// `InvalidArgument` if `base` is not on the menu. The previous base is
    /// kept.
    ///
    /// ## Example
    /// ```rust
    /// use concession_core::{Base, Drink};
    ///
    /// let mut drink = Drink::new();
    /// drink.add_base("water").unwrap();
    /// drink.add_base("hill fog").unwrap();
    /// assert_eq!(drink.base(), Some(Base::HillFog));
    /// assert!(drink.add_base("coffee").is_err());
    /// assert_eq!(drink.base(), Some(Base::HillFog));
    /// ```
    pub fn add_base(&mut self, base: &str) -> CoreResult<()> {
        let base = base
            .parse::<Base>()
            .inspect_err(|e| warn!(error = %e, "Rejected drink base"))?;
        debug!(%base, previous = ?self.base, "Setting drink base");
        self.base = Some(base);
        Ok(())
    }

    /// Returns the base, or `None` if none has been set.
    pub fn base(&self) -> Option<Base> {
        self.base
    }

    /// Adds a flavor.
    ///
    /// ## Errors
    /// - `InvalidArgument` if `flavor` is not on the menu
    /// - `DuplicateEntry` if the drink already has it
    pub fn add_flavor(&mut self, flavor: &str) -> CoreResult<()> {
        let flavor = flavor
            .parse::<Flavor>()
            .inspect_err(|e| warn!(error = %e, "Rejected drink flavor"))?;

        if !self.flavors.insert(flavor) {
            warn!(%flavor, "Flavor already added");
            return Err(CoreError::DuplicateEntry {
                field: "flavor",
                value: flavor.to_string(),
            });
        }

        debug!(%flavor, count = self.flavors.len(), "Added drink flavor");
        Ok(())
    }

    /// Returns the flavors, in menu order.
    pub fn flavors(&self) -> Vec<Flavor> {
        self.flavors.iter().copied().collect()
    }

    /// Checks whether the drink has `flavor`.
    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavors.contains(&flavor)
    }
}

impl Default for Drink {
    fn default() -> Self {
        Self::new()
    }
}

impl Priceable for Drink {
    fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_drink_is_empty() {
        let drink = Drink::new();
        assert_eq!(drink.base(), None);
        assert!(drink.flavors().is_empty());
        assert_eq!(drink.price(), Money::from_cents(500));
    }

    #[test]
    fn test_add_base() {
        let mut drink = Drink::new();
        drink.add_base("water").unwrap();
        assert_eq!(drink.base(), Some(Base::Water));
    }

    #[test]
    fn test_every_base_round_trips() {
        for base in Base::ALL {
            let mut drink = Drink::new();
            drink.add_base(base.as_str()).unwrap();
            assert_eq!(drink.base(), Some(*base));
        }
    }

    #[test]
    fn test_invalid_base_keeps_previous() {
        let mut drink = Drink::new();
        assert!(matches!(
            drink.add_base("invalid_base"),
            Err(CoreError::InvalidArgument { field: "base", .. })
        ));
        assert_eq!(drink.base(), None);

        drink.add_base("Mr. Salt").unwrap();
        assert!(drink.add_base("").is_err());
        assert_eq!(drink.base(), Some(Base::MrSalt));
    }

    #[test]
    fn test_add_flavor() {
        let mut drink = Drink::new();
        drink.add_flavor("lemon").unwrap();
        assert!(drink.flavors().contains(&Flavor::Lemon));
        assert!(drink.has_flavor(Flavor::Lemon));
    }

    #[test]
    fn test_duplicate_flavor() {
        let mut drink = Drink::new();
        drink.add_flavor("lemon").unwrap();

        let err = drink.add_flavor("lemon").unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateEntry {
                field: "flavor",
                value: "lemon".to_string(),
            }
        );
        assert_eq!(drink.flavors(), vec![Flavor::Lemon]);
    }

    #[test]
    fn test_every_flavor_once() {
        let mut drink = Drink::new();
        for flavor in Flavor::ALL {
            drink.add_flavor(flavor.as_str()).unwrap();
        }
        assert_eq!(drink.flavors(), Flavor::ALL.to_vec());

        for flavor in Flavor::ALL {
            assert!(matches!(
                drink.add_flavor(flavor.as_str()),
                Err(CoreError::DuplicateEntry { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_flavor() {
        let mut drink = Drink::new();
        assert!(matches!(
            drink.add_flavor("vanilla"),
            Err(CoreError::InvalidArgument { field: "flavor", .. })
        ));
        assert!(drink.flavors().is_empty());
    }

    #[test]
    fn test_price_ignores_contents() {
        let mut drink = Drink::new();
        drink.add_base("leaf wine").unwrap();
        drink.add_flavor("mint").unwrap();
        drink.add_flavor("lime").unwrap();
        assert_eq!(drink.price(), Money::from_cents(500));
    }

    #[test]
    fn test_price_from_custom_menu() {
        let menu = Menu::default()
            .with_drink_price(Money::from_cents(350))
            .unwrap();
        let drink = Drink::from_menu(&menu);
        assert_eq!(drink.price().cents(), 350);
    }
}
