//! Product catalog records.
//!
//! Pure domain logic only: no IO, no storage concerns.

pub mod filter;
pub mod product;

pub use filter::{CategoryFilter, distinct_categories};
pub use product::{NewProduct, Product, ProductUpdate};
