//! Storage-agnostic product logic.

pub mod error;
pub mod input;
pub mod product;
pub mod search;
pub mod update;

pub use error::DomainError;
pub use product::{NewProduct, Product, ProductId};
pub use search::SearchTerm;
pub use update::{ProductChange, ProductUpdate};
