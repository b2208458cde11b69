//! Review aggregation engine.
//!
//! [`compute_stats`] summarizes a review collection: count, mean rating,
//! per-star histogram, positive share, and a 30-day recency count. The
//! moment used as "now" is an explicit parameter, so the function is pure
//! and results are reproducible in tests.

use crate::reviews::Review;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Ratings at or above this count as "positive".
pub const POSITIVE_RATING_THRESHOLD: u8 = 4;

/// How far back a review still counts as "recent".
const RECENT_WINDOW_DAYS: i64 = 30;

/// One bar of the star-rating histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBucket {
    /// Star level, 1 to 5.
    pub rating: u8,
    /// Number of reviews at exactly this level.
    pub count: usize,
    /// Share of all reviews at this level, 0-100.
    pub percentage: f64,
}

/// Aggregate summary of a review collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Number of reviews summarized.
    pub total_reviews: usize,
    /// Arithmetic mean rating at full precision; 0 when empty.
    pub average_rating: f64,
    /// Histogram for star levels 5, 4, 3, 2, 1, in that fixed order.
    pub rating_distribution: Vec<RatingBucket>,
    /// Share of reviews rated 4 or 5 stars, 0-100.
    pub positive_percentage: f64,
    /// Reviews dated within the last 30 days of the supplied "now".
    pub recent_count: usize,
}

impl ReviewStats {
    /// Mean rating rounded to one decimal, as displayed.
    pub fn average_rating_rounded(&self) -> f64 {
        (self.average_rating * 10.0).round() / 10.0
    }
}

/// Summarize a review collection.
///
/// Pure and total: the empty slice yields all-zero statistics, never a
/// division by zero. `now` anchors the 30-day recency window.
pub fn compute_stats(reviews: &[Review], now: DateTime<Utc>) -> ReviewStats {
    let total = reviews.len();

    let average_rating = if total > 0 {
        reviews.iter().map(|r| r.rating as f64).sum::<f64>() / total as f64
    } else {
        0.0
    };

    let rating_distribution = [5u8, 4, 3, 2, 1]
        .into_iter()
        .map(|rating| {
            let count = reviews.iter().filter(|r| r.rating == rating).count();
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            RatingBucket {
                rating,
                count,
                percentage,
            }
        })
        .collect();

    let positive = reviews
        .iter()
        .filter(|r| r.rating >= POSITIVE_RATING_THRESHOLD)
        .count();
    let positive_percentage = if total > 0 {
        positive as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent_count = reviews.iter().filter(|r| r.date >= cutoff).count();

    ReviewStats {
        total_reviews: total,
        average_rating,
        rating_distribution,
        positive_percentage,
        recent_count,
    }
}
