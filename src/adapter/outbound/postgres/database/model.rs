//! Database model types for Diesel ORM.

use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::products;
use crate::domain::{NewProduct, Product, ProductChange, ProductId, ProductUpdate};

/// Database row for a product (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            category: row.category,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub quantity: i32,
    pub price: Decimal,
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            category: &product.category,
            quantity: product.quantity,
            price: product.price,
        }
    }
}

/// Column assignments for an update. `None` columns are left out of `SET`.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq, Eq)]
#[diesel(table_name = products)]
pub struct ProductChangeset<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

impl<'a> From<&'a ProductUpdate> for ProductChangeset<'a> {
    fn from(update: &'a ProductUpdate) -> Self {
        let mut changeset = Self::default();
        for change in update.changes() {
            match change {
                ProductChange::Name(name) => changeset.name = Some(name.as_str()),
                ProductChange::Category(category) => {
                    changeset.category = Some(category.as_str());
                }
                ProductChange::Quantity(quantity) => changeset.quantity = Some(*quantity),
                ProductChange::Price(price) => changeset.price = Some(*price),
            }
        }
        changeset
    }
}

/// Single-column result of the inventory value aggregate.
#[derive(QueryableByName, Debug, Clone, Copy)]
pub struct TotalValueRow {
    #[diesel(sql_type = diesel::sql_types::Double)]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn changeset_sets_only_supplied_columns() {
        let update = ProductUpdate::new(vec![ProductChange::Price(dec!(9.99))]).unwrap();
        let changeset = ProductChangeset::from(&update);

        assert_eq!(
            changeset,
            ProductChangeset {
                price: Some(dec!(9.99)),
                ..ProductChangeset::default()
            }
        );
    }

    #[test]
    fn changeset_carries_every_change() {
        let update = ProductUpdate::new(vec![
            ProductChange::Name("Sprocket".into()),
            ProductChange::Category("Parts".into()),
            ProductChange::Quantity(12),
            ProductChange::Price(dec!(0.40)),
        ])
        .unwrap();
        let changeset = ProductChangeset::from(&update);

        assert_eq!(changeset.name, Some("Sprocket"));
        assert_eq!(changeset.category, Some("Parts"));
        assert_eq!(changeset.quantity, Some(12));
        assert_eq!(changeset.price, Some(dec!(0.40)));
    }

    #[test]
    fn row_converts_to_domain_product() {
        let product = Product::from(ProductRow {
            id: 3,
            name: "Widget".into(),
            category: "Tools".into(),
            quantity: 2,
            price: dec!(1.50),
        });

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.value(), dec!(3.00));
    }
}
