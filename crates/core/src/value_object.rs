//! Value objects: equality by value, not identity.
//!
//! Every field a user can type into the inventory goes through one of these
//! types, so an invalid name, price or quantity can never reach the store.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build
/// a new one.
pub trait ValueObject: Clone + PartialEq + fmt::Debug {}

/// Case-folded product name used as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    /// Fold arbitrary text into a key (trimmed, lowercase).
    pub fn fold(text: &str) -> Self {
        Self(text.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty product name.
///
/// Displays the text as entered (trimmed); compares and hashes
/// case-insensitively through its [`NameKey`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName {
    text: String,
    key: NameKey,
}

impl ProductName {
    pub fn parse(input: &str) -> DomainResult<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            text: text.to_string(),
            key: NameKey::fold(text),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn key(&self) -> &NameKey {
        &self.key
    }

    /// Case-insensitive comparison against raw text.
    pub fn matches(&self, other: &str) -> bool {
        self.key == NameKey::fold(other)
    }
}

impl PartialEq for ProductName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ProductName {}

impl core::hash::Hash for ProductName {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ProductName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.text
    }
}

impl ValueObject for ProductName {}

/// Unit price. Always strictly positive.
///
/// Keeps the scale it was entered with, so `1.50` displays as `1.50`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        Ok(Self(amount))
    }

    /// Parse a plain decimal: optional sign, digits, at most one `.`.
    ///
    /// Exponents and digit separators are rejected even though `Decimal`
    /// itself would accept them.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let text = input.trim();
        if !is_plain_decimal(text) {
            return Err(DomainError::validation("price is not a plain decimal"));
        }
        let amount = Decimal::from_str(text)
            .map_err(|e| DomainError::validation(format!("price is not a decimal: {e}")))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl ValueObject for Price {}

/// Non-negative unit count (stock level or the size of a sale/restock).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(units: u32) -> Self {
        Self(units)
    }

    pub fn parse(input: &str) -> DomainResult<Self> {
        let units: i64 = input
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("quantity is not an integer"))?;
        if units < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        u32::try_from(units)
            .map(Self)
            .map_err(|_| DomainError::validation("quantity is too large"))
    }

    pub fn units(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl ValueObject for Quantity {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn product_name_is_trimmed_and_keeps_case_for_display() {
        let name = ProductName::parse("  Widget ").unwrap();
        assert_eq!(name.as_str(), "Widget");
        assert_eq!(name.to_string(), "Widget");
        assert_eq!(name.key().as_str(), "widget");
    }

    #[test]
    fn product_name_rejects_blank_input() {
        assert!(matches!(ProductName::parse(""), Err(DomainError::Validation(_))));
        assert!(matches!(ProductName::parse("   \t"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn product_names_compare_case_insensitively() {
        let a = ProductName::parse("Widget").unwrap();
        let b = ProductName::parse("WIDGET").unwrap();
        assert_eq!(a, b);
        assert!(a.matches("wIdGeT"));
        assert!(!a.matches("Widgets"));
    }

    #[test]
    fn price_keeps_entered_scale() {
        let price = Price::parse("1.50").unwrap();
        assert_eq!(price.to_string(), "1.50");
    }

    #[test]
    fn price_must_be_strictly_positive() {
        assert!(Price::parse("0").is_err());
        assert!(Price::parse("0.00").is_err());
        assert!(Price::parse("-2.5").is_err());
        assert!(Price::parse("0.01").is_ok());
    }

    #[test]
    fn price_rejects_non_decimal_text() {
        assert!(matches!(Price::parse("abc"), Err(DomainError::Validation(_))));
        assert!(Price::parse("").is_err());
        assert!(Price::parse("1e2").is_err());
        assert!(Price::parse("1_000").is_err());
        assert!(Price::parse("1,50").is_err());
        assert!(Price::parse("1.2.3").is_err());
        assert!(Price::parse(".").is_err());
        assert_eq!(Price::parse(" 2.5 ").unwrap().to_string(), "2.5");
    }

    #[test]
    fn name_and_price_serialize_as_plain_values() {
        let name = ProductName::parse(" Pen ").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Pen\"");
        let back: ProductName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "Pen");
        assert!(serde_json::from_str::<ProductName>("\"  \"").is_err());

        let price = Price::parse("1.50").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
        assert_eq!(back.to_string(), "1.50");
        assert!(serde_json::from_str::<Price>("\"0\"").is_err());
    }

    #[test]
    fn quantity_accepts_zero_and_rejects_negative() {
        assert_eq!(Quantity::parse("0").unwrap(), Quantity::ZERO);
        assert_eq!(Quantity::parse(" 12 ").unwrap().units(), 12);
        assert!(Quantity::parse("-1").is_err());
    }

    #[test]
    fn quantity_rejects_fractions_and_overflow() {
        assert!(Quantity::parse("1.5").is_err());
        assert!(Quantity::parse("ten").is_err());
        assert!(Quantity::parse("4294967296").is_err());
        assert_eq!(Quantity::parse("4294967295").unwrap().units(), u32::MAX);
    }

    proptest! {
        /// Property: case changes never change the lookup key.
        #[test]
        fn name_key_ignores_ascii_case(name in "[A-Za-z][A-Za-z0-9 ]{0,30}") {
            let lower = ProductName::parse(&name.to_lowercase()).unwrap();
            let upper = ProductName::parse(&name.to_uppercase()).unwrap();
            prop_assert_eq!(lower.key(), upper.key());
        }

        /// Property: every non-negative u32 round-trips through text parsing.
        #[test]
        fn quantity_parses_any_u32(units in any::<u32>()) {
            prop_assert_eq!(Quantity::parse(&units.to_string()).unwrap().units(), units);
        }
    }
}
