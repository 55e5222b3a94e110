//! In-memory product store.

use stockroom_core::{DomainError, DomainResult, Entity, NameKey, Quantity};

use crate::product::Product;

/// Ordered collection of products, keyed by case-insensitive name.
///
/// Insertion order is preserved for display. The store owns its records; all
/// mutation goes through `&mut self`, so there is exactly one writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a product with this name (any case) is stored.
    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Append a product.
    ///
    /// Uniqueness is the caller's contract; use
    /// [`InventoryCommand::AddProduct`](crate::InventoryCommand) for a checked add.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// First product whose name matches (any case).
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.position(name).map(|idx| &self.products[idx])
    }

    /// Apply a signed change to a product's stock.
    ///
    /// - `NotFound` if no product matches
    /// - `InsufficientStock` if the result would be negative (stock unchanged)
    /// - `Validation` if the result would not fit in a [`Quantity`]
    pub fn adjust_stock(&mut self, name: &str, delta: i64) -> DomainResult<&Product> {
        let idx = self.position(name).ok_or_else(DomainError::not_found)?;
        let product = &mut self.products[idx];

        let available = i64::from(product.stock().units());
        let next = available
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock overflow"))?;
        if next < 0 {
            return Err(DomainError::insufficient_stock(
                delta.unsigned_abs(),
                available as u64,
            ));
        }
        let next = u32::try_from(next).map_err(|_| DomainError::validation("stock overflow"))?;

        product.set_stock(Quantity::new(next));
        Ok(&*product)
    }

    /// Take `quantity` units out of stock. No partial sales.
    pub fn sell(&mut self, name: &str, quantity: Quantity) -> DomainResult<&Product> {
        self.adjust_stock(name, -i64::from(quantity.units()))
    }

    /// Put `quantity` units into stock.
    pub fn restock(&mut self, name: &str, quantity: Quantity) -> DomainResult<&Product> {
        self.adjust_stock(name, i64::from(quantity.units()))
    }

    /// Remove the first product whose name matches (any case).
    pub fn remove(&mut self, name: &str) -> DomainResult<Product> {
        let idx = self.position(name).ok_or_else(DomainError::not_found)?;
        Ok(self.products.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = NameKey::fold(name);
        self.products.iter().position(|p| p.has_id(&key))
    }
}
