//! Commands and events for the inventory store.
//!
//! The menu collects validated input into an [`InventoryCommand`]; executing it
//! either fails with a [`DomainError`] or yields exactly one [`InventoryEvent`]
//! describing what changed.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Price, ProductName, Quantity};

use crate::product::Product;
use crate::store::Inventory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddProduct {
        name: ProductName,
        price: Price,
        stock: Quantity,
    },
    SellStock {
        name: ProductName,
        quantity: Quantity,
    },
    RestockStock {
        name: ProductName,
        quantity: Quantity,
    },
    RemoveProduct {
        name: ProductName,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded {
        product: Product,
    },
    StockSold {
        name: ProductName,
        quantity: Quantity,
        remaining: Quantity,
    },
    StockRestocked {
        name: ProductName,
        quantity: Quantity,
        stock: Quantity,
    },
    ProductRemoved {
        product: Product,
    },
}

impl InventoryEvent {
    /// Stable event name, used as a structured log field.
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded { .. } => "inventory.product.added",
            InventoryEvent::StockSold { .. } => "inventory.product.sold",
            InventoryEvent::StockRestocked { .. } => "inventory.product.restocked",
            InventoryEvent::ProductRemoved { .. } => "inventory.product.removed",
        }
    }

    /// Stored name of the product the event refers to.
    pub fn product_name(&self) -> &ProductName {
        match self {
            InventoryEvent::ProductAdded { product } | InventoryEvent::ProductRemoved { product } => {
                product.name()
            }
            InventoryEvent::StockSold { name, .. } | InventoryEvent::StockRestocked { name, .. } => {
                name
            }
        }
    }
}

impl Inventory {
    /// Execute a command against the store.
    ///
    /// Unlike [`Inventory::add`], `AddProduct` checks name uniqueness here and
    /// fails with `Conflict` instead of inserting a duplicate.
    pub fn execute(&mut self, command: InventoryCommand) -> DomainResult<InventoryEvent> {
        match command {
            InventoryCommand::AddProduct { name, price, stock } => {
                if self.exists(name.as_str()) {
                    return Err(DomainError::conflict(format!(
                        "product '{name}' already exists"
                    )));
                }
                let product = Product::new(name, price, stock);
                self.add(product.clone());
                Ok(InventoryEvent::ProductAdded { product })
            }
            InventoryCommand::SellStock { name, quantity } => {
                let product = self.sell(name.as_str(), quantity)?;
                Ok(InventoryEvent::StockSold {
                    name: product.name().clone(),
                    quantity,
                    remaining: product.stock(),
                })
            }
            InventoryCommand::RestockStock { name, quantity } => {
                let product = self.restock(name.as_str(), quantity)?;
                Ok(InventoryEvent::StockRestocked {
                    name: product.name().clone(),
                    quantity,
                    stock: product.stock(),
                })
            }
            InventoryCommand::RemoveProduct { name } => {
                let product = self.remove(name.as_str())?;
                Ok(InventoryEvent::ProductRemoved { product })
            }
        }
    }
}
