//! Review-platform decoration stub.
//!
//! Stands in for a third-party review showcase integration. Decorations
//! (helpful votes, reply counts, highlight flags) are derived from an
//! injected seed, so the same seed and input always produce the same
//! output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rxcart_commerce::reviews::{Review, POSITIVE_RATING_THRESHOLD};
use serde::{Deserialize, Serialize};

/// A review decorated with platform showcase metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseReview {
    /// The underlying review, flattened into the platform payload.
    #[serde(flatten)]
    pub review: Review,
    /// Whether the platform vouches for the review.
    pub platform_verified: bool,
    /// Helpful-vote count, 0 to 19.
    pub helpful_count: u32,
    /// Reply-thread size, 0 to 4.
    pub response_count: u32,
    /// Whether the platform spotlights this review. Only positive
    /// reviews are eligible.
    pub highlighted: bool,
}

/// Decorate reviews with deterministic showcase metadata.
pub fn decorate_reviews(reviews: &[Review], seed: u64) -> Vec<ShowcaseReview> {
    let mut rng = StdRng::seed_from_u64(seed);
    reviews
        .iter()
        .map(|review| {
            let helpful_count = rng.gen_range(0..20);
            let response_count = rng.gen_range(0..5);
            let spotlight = rng.gen_bool(0.3);
            let highlighted = review.rating >= POSITIVE_RATING_THRESHOLD && spotlight;
            ShowcaseReview {
                review: review.clone(),
                platform_verified: true,
                helpful_count,
                response_count,
                highlighted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_reviews;
    use chrono::{TimeZone, Utc};
    use rxcart_commerce::ids::{ProductId, ReviewId};

    fn low_rated() -> Review {
        Review {
            id: ReviewId::new("low"),
            product_id: ProductId::new("1"),
            product_name: "Paracetamol".to_string(),
            customer_name: "Customer".to_string(),
            rating: 2,
            comment: "Did not work for me.".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            verified: false,
            store_response: None,
        }
    }

    #[test]
    fn test_same_seed_same_decoration() {
        let reviews = seed_reviews();
        let a = decorate_reviews(&reviews, 42);
        let b = decorate_reviews(&reviews, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decoration_preserves_order_and_count() {
        let reviews = seed_reviews();
        let decorated = decorate_reviews(&reviews, 7);
        assert_eq!(decorated.len(), reviews.len());
        for (d, r) in decorated.iter().zip(&reviews) {
            assert_eq!(d.review, *r);
        }
    }

    #[test]
    fn test_counts_within_bounds() {
        let decorated = decorate_reviews(&seed_reviews(), 1234);
        for d in decorated {
            assert!(d.helpful_count < 20);
            assert!(d.response_count < 5);
            assert!(d.platform_verified);
        }
    }

    #[test]
    fn test_low_rated_never_highlighted() {
        let reviews = vec![low_rated()];
        for seed in 0..64 {
            let decorated = decorate_reviews(&reviews, seed);
            assert!(!decorated[0].highlighted);
        }
    }
}
