//! Validation and coercion of request bodies.
//!
//! These functions are pure: they look at a decoded JSON object and either
//! produce a fully validated value or a [`DomainError`]. Nothing reaches
//! storage until validation of the whole body has succeeded.
//!
//! Numeric coercion is lenient in the same places a dynamically typed client
//! expects it to be: `"12"` is a valid quantity, `7.9` truncates to `7`, and
//! `"4.50"` is a valid price. Prices are rounded to cents and must fit the
//! `NUMERIC(10,2)` column.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::{Map, Value};

use super::error::DomainError;
use super::product::NewProduct;
use super::update::{ProductChange, ProductUpdate};

/// Exclusive upper bound on `|price|` imposed by `NUMERIC(10,2)`.
const PRICE_LIMIT: Decimal = dec!(100000000);

const PRICE_SCALE: u32 = 2;

/// Decode a request body into a JSON object, ignoring the declared content type.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, DomainError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(DomainError::InvalidBody),
    }
}

/// Validate a create body.
///
/// `name` and `category` are checked first; `quantity` and `price` default to
/// zero when absent.
pub fn new_product(body: &Map<String, Value>) -> Result<NewProduct, DomainError> {
    let name = body.get("name").and_then(trimmed_text);
    let category = body.get("category").and_then(trimmed_text);
    let (Some(name), Some(category)) = (name, category) else {
        return Err(DomainError::MissingNameOrCategory);
    };

    let quantity = body.get("quantity").map_or(Some(0), coerce_quantity);
    let price = body.get("price").map_or(Some(Decimal::ZERO), coerce_price);
    let (Some(quantity), Some(price)) = (quantity, price) else {
        return Err(DomainError::NonNumericAmounts);
    };

    Ok(NewProduct {
        name,
        category,
        quantity,
        price,
    })
}

/// Validate an update body into an update descriptor.
///
/// Only keys present in the body contribute a change. Any invalid value
/// rejects the whole body.
pub fn product_update(body: &Map<String, Value>) -> Result<ProductUpdate, DomainError> {
    let mut changes = Vec::with_capacity(4);

    if let Some(value) = body.get("name") {
        let name = trimmed_text(value).ok_or(DomainError::BlankField { field: "name" })?;
        changes.push(ProductChange::Name(name));
    }
    if let Some(value) = body.get("category") {
        let category =
            trimmed_text(value).ok_or(DomainError::BlankField { field: "category" })?;
        changes.push(ProductChange::Category(category));
    }
    if let Some(value) = body.get("quantity") {
        let quantity =
            coerce_quantity(value).ok_or(DomainError::NonNumericField { field: "quantity" })?;
        changes.push(ProductChange::Quantity(quantity));
    }
    if let Some(value) = body.get("price") {
        let price = coerce_price(value).ok_or(DomainError::NonNumericField { field: "price" })?;
        changes.push(ProductChange::Price(price));
    }

    ProductUpdate::new(changes).ok_or(DomainError::NoFieldsToUpdate)
}

fn trimmed_text(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Integer coercion. Floats truncate toward zero; strings must hold an integer.
fn coerce_quantity(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i32::try_from(int).ok()
            } else if number.is_u64() {
                None
            } else {
                let float = number.as_f64()?.trunc();
                if !float.is_finite() || float < f64::from(i32::MIN) || float > f64::from(i32::MAX)
                {
                    return None;
                }
                #[allow(clippy::cast_possible_truncation)]
                let quantity = float as i32;
                Some(quantity)
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|int| i32::try_from(int).ok()),
        _ => None,
    }
}

/// Decimal coercion, rounded half away from zero to cents.
fn coerce_price(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }?;

    let mut price =
        parsed.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(PRICE_SCALE);
    (price.abs() < PRICE_LIMIT).then_some(price)
}

/// Exact decimal parse first; values whose scale exceeds 28 digits fall back
/// to `f64`, which is exact enough once rounded to cents.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        return Some(value);
    }

    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.abs() < 1e-10 {
        return Some(Decimal::ZERO);
    }
    Decimal::from_f64(float)
}
