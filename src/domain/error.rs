//! Validation errors for product input.
//!
//! Every variant describes a client mistake. The HTTP layer turns these into
//! `400 Bad Request` with the [`Display`](std::fmt::Display) text as the
//! `error` message, so the wording here is part of the API.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use stocktake::domain::error::DomainError;
//! use stocktake::domain::input;
//!
//! let body = json!({ "name": "  ", "category": "Tools" });
//! let result = input::new_product(body.as_object().unwrap());
//!
//! assert!(matches!(result, Err(DomainError::MissingNameOrCategory)));
//! ```

use thiserror::Error;

/// Errors that occur when request input violates product invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The body was not valid JSON, or was JSON but not an object.
    #[error("request body must be a JSON object")]
    InvalidBody,

    /// Name or category was absent, not a string, or blank after trimming.
    #[error("name and category are required")]
    MissingNameOrCategory,

    /// Quantity or price on create could not be coerced to a number.
    #[error("quantity and price must be numbers")]
    NonNumericAmounts,

    /// A single numeric field on update could not be coerced.
    #[error("{field} must be number")]
    NonNumericField {
        /// The offending field name.
        field: &'static str,
    },

    /// A text field supplied on update was not a non-blank string.
    #[error("{field} must be a non-empty string")]
    BlankField {
        /// The offending field name.
        field: &'static str,
    },

    /// Update body carried none of the editable fields.
    #[error("no fields to update")]
    NoFieldsToUpdate,
}
