//! Interactive menu controller for the stockroom inventory.
//!
//! The controller reads one line per prompt, validates it in place, and hands
//! complete commands to the [`stockroom_inventory::Inventory`] it owns.

pub mod config;
pub mod console;
pub mod menu;
pub mod prompt;

pub use config::{ColorMode, Config, ConfigError};
pub use console::{Console, Level, Terminal};
pub use menu::{Menu, MenuChoice, MenuState};
pub use prompt::{PromptError, PromptResult};
