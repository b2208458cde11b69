//! Customer reviews module.
//!
//! Contains the review types, the subset selectors, and the review
//! aggregation engine.

mod review;
mod select;
mod stats;

pub use review::{Review, ReviewDraft, StoreResponse};
pub use select::{by_product, by_rating, preview, PREVIEW_LIMIT};
pub use stats::{compute_stats, RatingBucket, ReviewStats, POSITIVE_RATING_THRESHOLD};
