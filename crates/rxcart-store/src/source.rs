//! The data-source interface the presentation layer consumes.

use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rxcart_commerce::catalog::{CategoryFilter, Product};
use rxcart_commerce::ids::{ProductId, ReviewId};
use rxcart_commerce::reviews::{Review, ReviewDraft, ReviewStats};

/// Asynchronous access to the storefront's products and reviews.
///
/// Every operation is idempotent apart from [`append_review`] and safe to
/// call repeatedly; review listings are always newest-first.
///
/// [`append_review`]: StorefrontSource::append_review
#[async_trait]
pub trait StorefrontSource: Send + Sync {
    /// All products.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Products flagged for the home page.
    async fn featured_products(&self) -> Result<Vec<Product>, StoreError>;

    /// One product by id, absent when unknown.
    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Case-insensitive substring search over name, description, and
    /// category.
    async fn search_products(&self, term: &str) -> Result<Vec<Product>, StoreError>;

    /// Products in one category, or everything for
    /// [`CategoryFilter::All`].
    async fn products_by_category(
        &self,
        filter: CategoryFilter,
    ) -> Result<Vec<Product>, StoreError>;

    /// All reviews, newest-first.
    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError>;

    /// Reviews for one product, newest-first.
    async fn reviews_for_product(&self, id: &ProductId) -> Result<Vec<Review>, StoreError>;

    /// Reviews at exactly one star level, newest-first.
    async fn reviews_by_rating(&self, rating: u8) -> Result<Vec<Review>, StoreError>;

    /// Accept a submitted review: validates the draft, assigns id and
    /// date, defaults `verified` to false, and prepends it to the store.
    async fn append_review(&self, draft: ReviewDraft) -> Result<Review, StoreError>;

    /// Aggregate statistics over the full review list, anchored to the
    /// supplied "now".
    async fn review_stats(&self, now: DateTime<Utc>) -> Result<ReviewStats, StoreError>;

    /// Acknowledge a helpful-vote on a review. Stubbed: verifies the
    /// review exists, records nothing.
    async fn mark_helpful(&self, id: &ReviewId) -> Result<(), StoreError>;

    /// Acknowledge a moderation report on a review. Stubbed likewise.
    async fn report_review(&self, id: &ReviewId, reason: &str) -> Result<(), StoreError>;
}
