//! Product catalog module.
//!
//! Contains the product and category types plus the catalog query engine.

mod category;
mod filter;
mod product;

pub use category::{Category, CategoryFilter};
pub use filter::{filter_products, FilterSpec, PriceBucket, PriceRange};
pub use product::Product;
