//! Validated prompts.
//!
//! Each prompt is asked once and then re-read until the input parses. There is
//! no retry limit; the only way out of a prompt is valid input or end of input.

use std::io;

use thiserror::Error;

use stockroom_core::{Price, ProductName, Quantity};
use stockroom_inventory::Inventory;

use crate::console::{Console, Level};

pub const INVALID_NAME: &str = "Invalid name. Please enter a valid name:";
pub const DUPLICATE_NAME: &str = "Product already exists. Please enter a valid name:";
pub const INVALID_PRICE: &str = "Invalid price. Please enter a valid price:";
pub const INVALID_STOCK: &str = "Invalid stock quantity. Please enter a valid stock quantity:";
pub const INVALID_QUANTITY: &str = "Invalid quantity. Please enter a valid quantity:";

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended while waiting for a line.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Read one line, treating end of input as [`PromptError::InputClosed`].
pub fn read<C>(console: &mut C) -> PromptResult<String>
where
    C: Console + ?Sized,
{
    console.read_line()?.ok_or(PromptError::InputClosed)
}

/// Print `prompt`, then read lines until `parse` accepts one.
///
/// `parse` returns the retry message to show on rejection.
pub fn ask<C, T, F>(console: &mut C, prompt: &str, mut parse: F) -> PromptResult<T>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> Result<T, &'static str>,
{
    console.write_line(prompt, Level::Info)?;
    loop {
        let line = read(console)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(retry) => {
                tracing::debug!(input = %line, "input rejected");
                console.write_line(retry, Level::Error)?;
            }
        }
    }
}

/// Name of a product that does not exist yet.
pub fn ask_new_name<C>(console: &mut C, inventory: &Inventory) -> PromptResult<ProductName>
where
    C: Console + ?Sized,
{
    ask(console, "Enter the name of the product: ", |line| {
        let name = ProductName::parse(line).map_err(|_| INVALID_NAME)?;
        if inventory.exists(name.as_str()) {
            return Err(DUPLICATE_NAME);
        }
        Ok(name)
    })
}

/// Any non-empty name. Existence is checked later by the store.
pub fn ask_name<C>(console: &mut C, prompt: &str) -> PromptResult<ProductName>
where
    C: Console + ?Sized,
{
    ask(console, prompt, |line| {
        ProductName::parse(line).map_err(|_| INVALID_NAME)
    })
}

pub fn ask_price<C>(console: &mut C) -> PromptResult<Price>
where
    C: Console + ?Sized,
{
    ask(console, "Enter the price of the product: ", |line| {
        Price::parse(line).map_err(|_| INVALID_PRICE)
    })
}

pub fn ask_stock<C>(console: &mut C) -> PromptResult<Quantity>
where
    C: Console + ?Sized,
{
    ask(console, "Enter the stock quantity of the product: ", |line| {
        Quantity::parse(line).map_err(|_| INVALID_STOCK)
    })
}

pub fn ask_quantity<C>(console: &mut C, prompt: &str) -> PromptResult<Quantity>
where
    C: Console + ?Sized,
{
    ask(console, prompt, |line| {
        Quantity::parse(line).map_err(|_| INVALID_QUANTITY)
    })
}
