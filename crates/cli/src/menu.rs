//! Menu controller: the top-level command loop.

use std::io;

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{Inventory, InventoryCommand};

use crate::console::{Console, Level};
use crate::prompt::{self, PromptError, PromptResult};

pub const WELCOME: &str = "***Welcome to Inventory Management System.***";
pub const NO_PRODUCTS: &str =
    "There is no product information in stock. Please add a new product first.\n";
pub const EMPTY_LISTING: &str = "No products in stock.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const FAREWELL: &str = "Exiting the system...";
pub const NOT_FOUND: &str = "Product not found.";
pub const INSUFFICIENT_STOCK: &str = "Insufficient stock quantity.";

const LISTING_HEADER: &str = "\n|----------Products Details----------|\n";
const LISTING_FOOTER: &str = "\n|------------------------------------|\n";
const RULE: &str = "-------------------------------------------------";

/// Top-level menu entries, numbered as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add = 1,
    Sell = 2,
    Restock = 3,
    Delete = 4,
    Exit = 5,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Sell,
        MenuChoice::Restock,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse a menu selection: an integer in `1..=5`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("choice is not an integer"))?;
        Self::try_from(number)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a new product",
            MenuChoice::Sell => "Sold products",
            MenuChoice::Restock => "Restock products",
            MenuChoice::Delete => "Delete a product",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| *choice as i64 == value)
            .ok_or_else(|| DomainError::validation(format!("choice {value} is out of range")))
    }
}

/// Controller states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuState {
    ShowMenu,
    AwaitChoice,
    Add,
    Sell,
    Restock,
    Delete,
    Exit,
}

impl From<MenuChoice> for MenuState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Add => MenuState::Add,
            MenuChoice::Sell => MenuState::Sell,
            MenuChoice::Restock => MenuState::Restock,
            MenuChoice::Delete => MenuState::Delete,
            MenuChoice::Exit => MenuState::Exit,
        }
    }
}

/// Interactive controller owning the inventory for the whole session.
#[derive(Debug)]
pub struct Menu<C> {
    console: C,
    inventory: Inventory,
    state: MenuState,
}

impl<C> Menu<C>
where
    C: Console,
{
    pub fn new(console: C) -> Self {
        Self::with_inventory(console, Inventory::new())
    }

    pub fn with_inventory(console: C, inventory: Inventory) -> Self {
        Self {
            console,
            inventory,
            state: MenuState::ShowMenu,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (C, Inventory) {
        (self.console, self.inventory)
    }

    /// Run until the user chooses Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.console.write_line(WELCOME, Level::Info)?;
        self.any_products()?;

        while self.state != MenuState::Exit {
            match self.step() {
                Ok(next) => self.state = next,
                Err(PromptError::InputClosed) => {
                    tracing::warn!(state = ?self.state, "input closed; ending session");
                    self.state = MenuState::Exit;
                }
                Err(PromptError::Io(e)) => return Err(e),
            }
        }
        Ok(())
    }

    /// Perform the work of the current state and return the next one.
    pub fn step(&mut self) -> PromptResult<MenuState> {
        let next = match self.state {
            MenuState::ShowMenu => {
                self.print_products()?;
                self.print_menu()?;
                MenuState::AwaitChoice
            }
            MenuState::AwaitChoice => self.await_choice()?,
            MenuState::Add => {
                self.add_product()?;
                MenuState::ShowMenu
            }
            MenuState::Sell => {
                self.sell_product()?;
                MenuState::ShowMenu
            }
            MenuState::Restock => {
                self.restock_product()?;
                MenuState::ShowMenu
            }
            MenuState::Delete => {
                self.delete_product()?;
                MenuState::ShowMenu
            }
            MenuState::Exit => MenuState::Exit,
        };
        Ok(next)
    }

    /// Print the advisory when the store is empty. Never blocks.
    fn any_products(&mut self) -> io::Result<bool> {
        if !self.inventory.is_empty() {
            return Ok(true);
        }
        self.console.write_line(NO_PRODUCTS, Level::Warning)?;
        Ok(false)
    }

    fn print_products(&mut self) -> io::Result<()> {
        self.console.write_line(LISTING_HEADER, Level::Info)?;
        if self.inventory.is_empty() {
            self.console.write_line(EMPTY_LISTING, Level::Info)?;
        }
        for product in self.inventory.list() {
            self.console.write_line(&product.to_string(), Level::Info)?;
        }
        self.console.write_line(LISTING_FOOTER, Level::Info)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.write_line(RULE, Level::Info)?;
        for choice in MenuChoice::ALL {
            let line = format!("{}. {}", choice as u8, choice.label());
            self.console.write_line(&line, Level::Info)?;
        }
        self.console.write_line(RULE, Level::Info)?;
        self.console.write_line("Enter your choice: ", Level::Info)
    }

    fn await_choice(&mut self) -> PromptResult<MenuState> {
        let line = prompt::read(&mut self.console)?;
        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Exit) => {
                self.console.write_line(FAREWELL, Level::Warning)?;
                Ok(MenuState::Exit)
            }
            Ok(choice) => Ok(choice.into()),
            Err(err) => {
                tracing::debug!(input = %line, error = %err, "invalid menu choice");
                self.console.write_line(INVALID_CHOICE, Level::Error)?;
                Ok(MenuState::ShowMenu)
            }
        }
    }

    fn add_product(&mut self) -> PromptResult<()> {
        let name = prompt::ask_new_name(&mut self.console, &self.inventory)?;
        let price = prompt::ask_price(&mut self.console)?;
        let stock = prompt::ask_stock(&mut self.console)?;

        self.dispatch(
            InventoryCommand::AddProduct { name, price, stock },
            "Product added successfully.",
        )
    }

    fn sell_product(&mut self) -> PromptResult<()> {
        if !self.any_products()? {
            return Ok(());
        }
        let name = prompt::ask_name(
            &mut self.console,
            "Enter the name of the product you want to sell: ",
        )?;
        let quantity = prompt::ask_quantity(
            &mut self.console,
            "Enter the quantity of the product you want to sell: ",
        )?;

        self.dispatch(
            InventoryCommand::SellStock { name, quantity },
            "Product sold successfully.",
        )
    }

    fn restock_product(&mut self) -> PromptResult<()> {
        if !self.any_products()? {
            return Ok(());
        }
        let name = prompt::ask_name(
            &mut self.console,
            "Enter the name of the product you want to restock: ",
        )?;
        let quantity = prompt::ask_quantity(
            &mut self.console,
            "Enter the quantity of the product you want to restock: ",
        )?;

        self.dispatch(
            InventoryCommand::RestockStock { name, quantity },
            "Product restocked successfully.",
        )
    }

    fn delete_product(&mut self) -> PromptResult<()> {
        if !self.any_products()? {
            return Ok(());
        }
        let name = prompt::ask_name(
            &mut self.console,
            "Enter the name of the product you want to delete: ",
        )?;

        self.dispatch(
            InventoryCommand::RemoveProduct { name },
            "Product deleted successfully.",
        )
    }

    /// Execute a command and report the outcome. Domain failures end the
    /// operation; they never end the session.
    fn dispatch(&mut self, command: InventoryCommand, success: &str) -> PromptResult<()> {
        match self.inventory.execute(command) {
            Ok(event) => {
                tracing::info!(
                    event_type = event.event_type(),
                    product = %event.product_name(),
                    "inventory updated"
                );
                self.console.write_line(success, Level::Success)?;
            }
            Err(DomainError::NotFound) => {
                tracing::info!("product not found");
                self.console.write_line(NOT_FOUND, Level::Error)?;
            }
            Err(DomainError::InsufficientStock {
                requested,
                available,
            }) => {
                tracing::info!(requested, available, "sale rejected: insufficient stock");
                self.console.write_line(INSUFFICIENT_STOCK, Level::Error)?;
            }
            Err(err) => {
                tracing::warn!(error = %err, "inventory command rejected");
                self.console
                    .write_line(&format!("Operation failed: {err}"), Level::Error)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;

    type TestMenu = Menu<Terminal<Cursor<String>, Vec<u8>>>;

    fn menu(input: &str) -> TestMenu {
        Menu::new(Terminal::new(Cursor::new(input.to_string()), Vec::new(), false))
    }

    #[test]
    fn choice_parsing_accepts_only_one_to_five() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Add);
        assert_eq!(MenuChoice::parse(" 5 ").unwrap(), MenuChoice::Exit);
        assert!(MenuChoice::parse("0").is_err());
        assert!(MenuChoice::parse("6").is_err());
        assert!(MenuChoice::parse("two").is_err());
        assert!(MenuChoice::parse("").is_err());
    }

    #[test]
    fn show_menu_moves_to_await_choice() {
        let mut m = menu("");
        assert_eq!(m.step().unwrap(), MenuState::AwaitChoice);
    }

    #[test]
    fn invalid_choice_returns_to_show_menu() {
        let mut m = menu("9\n");
        m.step().unwrap();
        m.state = MenuState::AwaitChoice;
        assert_eq!(m.step().unwrap(), MenuState::ShowMenu);
    }

    #[test]
    fn each_choice_maps_to_its_state() {
        for (input, expected) in [
            ("1\n", MenuState::Add),
            ("2\n", MenuState::Sell),
            ("3\n", MenuState::Restock),
            ("4\n", MenuState::Delete),
            ("5\n", MenuState::Exit),
        ] {
            let mut m = menu(input);
            m.state = MenuState::AwaitChoice;
            assert_eq!(m.step().unwrap(), expected);
        }
    }

    #[test]
    fn await_choice_at_end_of_input_is_input_closed() {
        let mut m = menu("");
        m.state = MenuState::AwaitChoice;
        assert!(matches!(m.step(), Err(PromptError::InputClosed)));
    }

    #[test]
    fn exit_state_is_terminal() {
        let mut m = menu("");
        m.state = MenuState::Exit;
        assert_eq!(m.step().unwrap(), MenuState::Exit);
        assert_eq!(m.state(), MenuState::Exit);
    }

    #[test]
    fn run_starts_at_show_menu_and_ends_at_exit() {
        let mut m = menu("5\n");
        assert_eq!(m.state(), MenuState::ShowMenu);
        m.run().unwrap();
        assert_eq!(m.state(), MenuState::Exit);
    }

    /// Console that keeps every line with its level.
    #[derive(Debug, Default)]
    struct Recorder {
        input: Vec<String>,
        lines: Vec<(String, Level)>,
    }

    impl Console for Recorder {
        fn write_line(&mut self, text: &str, level: Level) -> io::Result<()> {
            self.lines.push((text.to_string(), level));
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(if self.input.is_empty() {
                None
            } else {
                Some(self.input.remove(0))
            })
        }
    }

    #[test]
    fn product_listing_is_informational() {
        let input = ["1", "Pen", "1.50", "10", "5"].map(String::from).to_vec();
        let mut m = Menu::new(Recorder {
            input,
            ..Recorder::default()
        });
        m.run().unwrap();

        let (recorder, _) = m.into_parts();
        let level_of = |needle: &str| {
            recorder
                .lines
                .iter()
                .find(|(text, _)| text.contains(needle))
                .map(|(_, level)| *level)
        };
        assert_eq!(level_of("Products Details"), Some(Level::Info));
        assert_eq!(level_of(EMPTY_LISTING), Some(Level::Info));
        assert_eq!(level_of("Name: Pen"), Some(Level::Info));
        assert_eq!(level_of("Product added successfully."), Some(Level::Success));
        assert_eq!(level_of(NO_PRODUCTS.trim_end()), Some(Level::Warning));
    }
}
