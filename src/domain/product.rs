//! The product entity.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Database-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Parse a path segment. Anything that is not a 32-bit integer yields `None`.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        segment.parse().ok().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inventory line item as stored.
///
/// Serializes to `{id, name, category, quantity, price}` with `price` as a
/// JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Stock value of this line, `quantity * price`.
    #[must_use]
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl NewProduct {
    /// Attach the id handed out by storage.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
