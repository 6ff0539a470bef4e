//! Partial product updates.
//!
//! An update is described by a [`ProductUpdate`]: an ordered, non-empty list
//! of [`ProductChange`] values. Only fields present in the list are written;
//! everything else stays as stored.

use rust_decimal::Decimal;

use super::product::Product;

/// A single validated field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductChange {
    Name(String),
    Category(String),
    Quantity(i32),
    Price(Decimal),
}

impl ProductChange {
    /// Column the change writes to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Category(_) => "category",
            Self::Quantity(_) => "quantity",
            Self::Price(_) => "price",
        }
    }

    fn apply(&self, product: &mut Product) {
        match self {
            Self::Name(name) => product.name.clone_from(name),
            Self::Category(category) => product.category.clone_from(category),
            Self::Quantity(quantity) => product.quantity = *quantity,
            Self::Price(price) => product.price = *price,
        }
    }
}

/// Non-empty set of changes applied together in one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    changes: Vec<ProductChange>,
}

impl ProductUpdate {
    /// Returns `None` when there is nothing to change.
    #[must_use]
    pub fn new(changes: Vec<ProductChange>) -> Option<Self> {
        if changes.is_empty() {
            None
        } else {
            Some(Self { changes })
        }
    }

    #[must_use]
    pub fn changes(&self) -> &[ProductChange] {
        &self.changes
    }

    /// Field names in application order, for logging.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        self.changes.iter().map(ProductChange::field).collect()
    }

    /// Apply every change to an in-memory product.
    pub fn apply_to(&self, product: &mut Product) {
        for change in &self.changes {
            change.apply(product);
        }
    }
}
