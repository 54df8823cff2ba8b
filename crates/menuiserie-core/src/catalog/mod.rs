//! Product catalogue module.
//!
//! Contains the product type enumeration, product records and the read-only
//! catalogue store.

mod product;
mod store;

pub use product::{Product, ProductType};
pub use store::Catalogue;
