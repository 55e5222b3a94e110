use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, NameKey, Price, ProductName, Quantity};

/// A product held in the inventory.
///
/// Name and price are fixed at creation; only the stock level changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    price: Price,
    stock: Quantity,
}

impl Product {
    pub fn new(name: ProductName, price: Price, stock: Quantity) -> Self {
        Self { name, price, stock }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> Quantity {
        self.stock
    }

    pub(crate) fn set_stock(&mut self, stock: Quantity) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = NameKey;

    fn id(&self) -> &Self::Id {
        self.name.key()
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {} | Price: {} | Stock Quantity: {}",
            self.name, self.price, self.stock
        )
    }
}
