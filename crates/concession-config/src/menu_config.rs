//! # Menu Configuration
//!
//! Reprices the standard menu from a TOML file and the environment.
//!
//! ## Configuration File Format
//! ```toml
//! # menu.toml
//! [drinks]
//! price_cents = 500
//!
//! [food.prices]
//! "Hotdog" = 230
//! "Ice Cream" = 300
//!
//! [toppings.prices]
//! "Chili" = 60
//! ```
//!
//! Every section and key is optional. Anything left out keeps its standard
//! price. Names must match the menu board exactly; a config file can reprice
//! an item but cannot invent one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use concession_core::{FoodItem, Menu, Money, Topping, DRINK_PRICE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable selecting the config file.
pub const MENU_PATH_ENV: &str = "CONCESSION_MENU_PATH";

/// Environment variable overriding the flat drink price, in cents.
pub const DRINK_PRICE_ENV: &str = "CONCESSION_DRINK_PRICE_CENTS";

// =============================================================================
// Sections
// =============================================================================

/// Drink pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSettings {
    /// Flat price of every drink, in cents.
    #[serde(default = "default_drink_price_cents")]
    pub price_cents: i64,
}

fn default_drink_price_cents() -> i64 {
    DRINK_PRICE.cents()
}

impl Default for DrinkSettings {
    fn default() -> Self {
        DrinkSettings {
            price_cents: default_drink_price_cents(),
        }
    }
}

/// Per-name price overrides, in cents, keyed by menu name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOverrides {
    #[serde(default)]
    pub prices: BTreeMap<String, i64>,
}

// =============================================================================
// Main Menu Configuration
// =============================================================================

/// Complete menu configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub drinks: DrinkSettings,

    #[serde(default)]
    pub food: PriceOverrides,

    #[serde(default)]
    pub toppings: PriceOverrides,
}

impl MenuConfig {
    /// Creates a config that leaves every standard price in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config listing every price in `menu`.
    ///
    /// Useful for writing out a complete, editable menu file.
    pub fn from_menu(menu: &Menu) -> Self {
        MenuConfig {
            drinks: DrinkSettings {
                price_cents: menu.drink_price().cents(),
            },
            food: PriceOverrides {
                prices: FoodItem::ALL
                    .iter()
                    .map(|item| (item.to_string(), menu.food_price(*item).cents()))
                    .collect(),
            },
            toppings: PriceOverrides {
                prices: Topping::ALL
                    .iter()
                    .map(|topping| (topping.to_string(), menu.topping_price(*topping).cents()))
                    .collect(),
            },
        }
    }

    /// Parses a config from TOML text, without environment overrides.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: MenuConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Standard menu prices
    /// 2. Config file (`config_path`, else `CONCESSION_MENU_PATH`, else the
    ///    platform config directory's `menu.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads configuration like [`MenuConfig::load`], reading variables
    /// through `lookup` instead of the process environment.
    ///
    /// `lookup` maps a variable name to its value. It supplies both
    /// `CONCESSION_MENU_PATH` and the price overrides.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(MENU_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading menu config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Menu config file not found, using standard prices");
            }
        }

        config.apply_overrides(&lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the standard menu config if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load menu config: {}. Using standard prices.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Menu config saved");
        Ok(path)
    }

    /// Validates the configuration by building the menu it describes.
    pub fn validate(&self) -> ConfigResult<()> {
        self.build_menu().map(|_| ())
    }

    /// Builds the priced menu.
    ///
    /// ## Errors
    /// `ConfigError::Menu` for an unknown food or topping name, or a price
    /// that is negative or above `MAX_PRICE_CENTS`.
    pub fn build_menu(&self) -> ConfigResult<Menu> {
        let mut menu =
            Menu::default().with_drink_price(Money::from_cents(self.drinks.price_cents))?;

        for (name, cents) in &self.food.prices {
            let item: FoodItem = name.parse()?;
            menu = menu.with_food_price(item, Money::from_cents(*cents))?;
        }

        for (name, cents) in &self.toppings.prices {
            let topping: Topping = name.parse()?;
            menu = menu.with_topping_price(topping, Money::from_cents(*cents))?;
        }

        Ok(menu)
    }

    /// Builds the priced menu, ready to share between food items.
    pub fn into_menu(self) -> ConfigResult<Arc<Menu>> {
        self.build_menu().map(Arc::new)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DRINK_PRICE_ENV) {
            let cents = value.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                key: DRINK_PRICE_ENV,
                value: value.clone(),
            })?;
            debug!(cents, "Overriding drink price from environment");
            self.drinks.price_cents = cents;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "concession", "pos")
            .map(|dirs| dirs.config_dir().join("menu.toml"))
    }
}

/// Loads the menu from `path` (or the default locations) and builds it.
pub fn load_menu(path: Option<&Path>) -> ConfigResult<Arc<Menu>> {
    MenuConfig::load(path.map(Path::to_path_buf))?.into_menu()
}
