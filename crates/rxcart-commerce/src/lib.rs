//! Pharmacy storefront domain types and logic for RxCart.
//!
//! This crate provides the domain core of the storefront:
//!
//! - **Catalog**: Products, categories, and the catalog query engine
//!   (category + price-range + free-text filtering)
//! - **Reviews**: Customer reviews, subset selectors, and the review
//!   aggregation engine (count, mean, histogram, positive share)
//!
//! Everything here is synchronous and side-effect free: the engines take
//! already-resolved collections and return new derived views. Asynchronous
//! data access lives in `rxcart-store`.
//!
//! # Example
//!
//! ```rust,ignore
//! use rxcart_commerce::prelude::*;
//!
//! let spec = FilterSpec::default()
//!     .with_category(CategoryFilter::Only(Category::Vitamins))
//!     .with_price_range(PriceRange::parse("0-25")?)
//!     .with_search_term("vitamin");
//!
//! let matching = filter_products(&products, &spec);
//!
//! let stats = compute_stats(&reviews, Utc::now());
//! println!("{} reviews, avg {:.1}", stats.total_reviews, stats.average_rating);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod reviews;

pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        filter_products, Category, CategoryFilter, FilterSpec, PriceBucket, PriceRange, Product,
    };

    // Reviews
    pub use crate::reviews::{
        by_product, by_rating, compute_stats, preview, RatingBucket, Review, ReviewDraft,
        ReviewStats, StoreResponse, POSITIVE_RATING_THRESHOLD, PREVIEW_LIMIT,
    };
}
