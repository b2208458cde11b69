//! Review subset selectors.
//!
//! Order-preserving, pure helpers that compose with
//! [`compute_stats`](crate::reviews::compute_stats): selecting a subset
//! and aggregating it is the same as aggregating a manually pre-filtered
//! collection.

use crate::ids::ProductId;
use crate::reviews::{Review, POSITIVE_RATING_THRESHOLD};

/// Maximum number of reviews in a preview selection.
pub const PREVIEW_LIMIT: usize = 3;

/// Reviews for one product, in source order.
pub fn by_product(reviews: &[Review], product_id: &ProductId) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| &r.product_id == product_id)
        .cloned()
        .collect()
}

/// Reviews at exactly one star level, in source order.
pub fn by_rating(reviews: &[Review], rating: u8) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| r.rating == rating)
        .cloned()
        .collect()
}

/// The at-a-glance preview: the first at most [`PREVIEW_LIMIT`] positive
/// reviews in source order.
///
/// The source is expected to be newest-first; this selector never sorts.
pub fn preview(reviews: &[Review]) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| r.rating >= POSITIVE_RATING_THRESHOLD)
        .take(PREVIEW_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ReviewId;
    use crate::reviews::compute_stats;
    use chrono::{TimeZone, Utc};

    fn review(id: &str, product: &str, rating: u8) -> Review {
        Review {
            id: ReviewId::new(id),
            product_id: ProductId::new(product),
            product_name: format!("Product {}", product),
            customer_name: "Customer".to_string(),
            rating,
            comment: "Comment".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            verified: true,
            store_response: None,
        }
    }

    #[test]
    fn test_by_product_preserves_order() {
        let reviews = vec![
            review("r1", "1", 5),
            review("r2", "2", 4),
            review("r3", "1", 3),
        ];
        let out = by_product(&reviews, &ProductId::new("1"));
        let ids: Vec<_> = out.iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_by_rating_exact() {
        let reviews = vec![
            review("r1", "1", 5),
            review("r2", "2", 4),
            review("r3", "3", 5),
        ];
        let out = by_rating(&reviews, 5);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.rating == 5));
    }

    #[test]
    fn test_preview_takes_first_three_positive() {
        let reviews = vec![
            review("r1", "1", 5),
            review("r2", "2", 4),
            review("r3", "3", 5),
            review("r4", "4", 4),
            review("r5", "5", 3),
        ];
        let out = preview(&reviews);
        let ids: Vec<_> = out.iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_preview_skips_low_ratings() {
        let reviews = vec![
            review("r1", "1", 2),
            review("r2", "2", 4),
            review("r3", "3", 1),
            review("r4", "4", 5),
        ];
        let out = preview(&reviews);
        let ids: Vec<_> = out.iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["r2", "r4"]);
    }

    #[test]
    fn test_selector_composes_with_stats() {
        let reviews = vec![
            review("r1", "1", 5),
            review("r2", "2", 2),
            review("r3", "1", 4),
            review("r4", "1", 3),
        ];
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        let via_selector = compute_stats(&by_product(&reviews, &ProductId::new("1")), now);
        let manual: Vec<_> = reviews
            .iter()
            .filter(|r| r.product_id == ProductId::new("1"))
            .cloned()
            .collect();
        assert_eq!(via_selector, compute_stats(&manual, now));
        assert_eq!(via_selector.total_reviews, 3);
    }
}
