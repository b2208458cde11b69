//! Simulated asynchronous data-access layer for RxCart.
//!
//! This crate supplies the raw product and review records the domain
//! engines in `rxcart-commerce` operate on:
//!
//! - `StorefrontSource` - the async interface the presentation layer
//!   consumes
//! - `MemoryStore` - an owned in-memory implementation seeded with the
//!   pharmacy fixtures, with configurable simulated latency
//! - `decorate_reviews` - the seeded review-platform decoration stub
//!
//! Every call is a one-shot request/response: no cancellation, retry, or
//! partial-failure semantics. The in-memory backend's only mutation is
//! appending a submitted review; everything else is read-only.

mod error;
mod fixtures;
mod latency;
mod memory;
mod showcase;
mod source;

pub use error::StoreError;
pub use fixtures::{seed_products, seed_reviews};
pub use latency::LatencyProfile;
pub use memory::MemoryStore;
pub use showcase::{decorate_reviews, ShowcaseReview};
pub use source::StorefrontSource;
