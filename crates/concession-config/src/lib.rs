//! # concession-config: Menu Configuration
//!
//! Loads menu prices from `menu.toml` and the environment, validates them
//! against the fixed menu, and hands back a shared [`concession_core::Menu`].
//!
//! ## Usage
//! ```rust,no_run
//! use concession_config::load_menu;
//! use concession_core::Food;
//!
//! let menu = load_menu(None)?;
//! let food = Food::from_menu(menu, "Hotdog")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod menu_config;

pub use error::{ConfigError, ConfigResult};
pub use menu_config::{load_menu, DrinkSettings, MenuConfig, PriceOverrides};
