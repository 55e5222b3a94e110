//! Inventory domain module.
//!
//! This crate contains the product record and the in-memory store, implemented
//! purely as deterministic domain logic (no IO, no terminal, no storage).

pub mod command;
pub mod product;
pub mod store;

pub use command::{InventoryCommand, InventoryEvent};
pub use product::Product;
pub use store::Inventory;
