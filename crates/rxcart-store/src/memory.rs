//! In-memory store implementation.

use crate::error::StoreError;
use crate::fixtures;
use crate::latency::LatencyProfile;
use crate::source::StorefrontSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rxcart_commerce::catalog::{CategoryFilter, Product};
use rxcart_commerce::ids::{ProductId, ReviewId};
use rxcart_commerce::reviews::{compute_stats, Review, ReviewDraft, ReviewStats};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// An owned, in-memory data source seeded at construction.
///
/// Products are immutable for the store's lifetime; the review list is
/// append-only behind an async lock. Every operation sleeps its
/// [`LatencyProfile`] class before answering, simulating network latency.
pub struct MemoryStore {
    products: Vec<Product>,
    reviews: RwLock<Vec<Review>>,
    latency: LatencyProfile,
    next_review_id: AtomicU64,
}

impl MemoryStore {
    /// Create a store over explicit collections.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>, latency: LatencyProfile) -> Self {
        let next_review_id = AtomicU64::new(reviews.len() as u64 + 1);
        Self {
            products,
            reviews: RwLock::new(reviews),
            latency,
            next_review_id,
        }
    }

    /// Create a store seeded with the pharmacy fixtures.
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::new(fixtures::seed_products(), fixtures::seed_reviews(), latency)
    }

    async fn simulate(&self, delay: std::time::Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Newest-first copy of a review collection. Stable, so reviews with
    /// equal timestamps keep their stored relative order.
    fn newest_first(mut reviews: Vec<Review>) -> Vec<Review> {
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        reviews
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded(LatencyProfile::default())
    }
}

#[async_trait]
impl StorefrontSource for MemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.simulate(self.latency.list).await;
        debug!(count = self.products.len(), "listing products");
        Ok(self.products.clone())
    }

    async fn featured_products(&self) -> Result<Vec<Product>, StoreError> {
        self.simulate(self.latency.lookup).await;
        let featured: Vec<_> = self
            .products
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect();
        debug!(count = featured.len(), "listing featured products");
        Ok(featured)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.simulate(self.latency.lookup).await;
        let product = self.products.iter().find(|p| &p.id == id).cloned();
        debug!(id = %id, found = product.is_some(), "product lookup");
        Ok(product)
    }

    async fn search_products(&self, term: &str) -> Result<Vec<Product>, StoreError> {
        self.simulate(self.latency.query).await;
        let term = term.to_lowercase();
        let matches: Vec<_> = self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.as_str().contains(&term)
            })
            .cloned()
            .collect();
        debug!(term = %term, count = matches.len(), "product search");
        Ok(matches)
    }

    async fn products_by_category(
        &self,
        filter: CategoryFilter,
    ) -> Result<Vec<Product>, StoreError> {
        self.simulate(self.latency.query).await;
        let matches: Vec<_> = self
            .products
            .iter()
            .filter(|p| filter.matches(p.category))
            .cloned()
            .collect();
        debug!(?filter, count = matches.len(), "products by category");
        Ok(matches)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        self.simulate(self.latency.list).await;
        let reviews = self.reviews.read().await.clone();
        debug!(count = reviews.len(), "listing reviews");
        Ok(Self::newest_first(reviews))
    }

    async fn reviews_for_product(&self, id: &ProductId) -> Result<Vec<Review>, StoreError> {
        self.simulate(self.latency.query).await;
        let reviews: Vec<_> = self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| &r.product_id == id)
            .cloned()
            .collect();
        debug!(id = %id, count = reviews.len(), "reviews for product");
        Ok(Self::newest_first(reviews))
    }

    async fn reviews_by_rating(&self, rating: u8) -> Result<Vec<Review>, StoreError> {
        self.simulate(self.latency.query).await;
        let reviews: Vec<_> = self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.rating == rating)
            .cloned()
            .collect();
        debug!(rating, count = reviews.len(), "reviews by rating");
        Ok(Self::newest_first(reviews))
    }

    async fn append_review(&self, draft: ReviewDraft) -> Result<Review, StoreError> {
        self.simulate(self.latency.submit).await;
        draft.validate()?;

        let serial = self.next_review_id.fetch_add(1, Ordering::SeqCst);
        let id = ReviewId::new(format!("r{}", serial));
        let review = draft.into_review(id, Utc::now());

        let mut reviews = self.reviews.write().await;
        reviews.insert(0, review.clone());
        info!(id = %review.id, product = %review.product_id, "review accepted");
        Ok(review)
    }

    async fn review_stats(&self, now: DateTime<Utc>) -> Result<ReviewStats, StoreError> {
        self.simulate(self.latency.lookup).await;
        let reviews = self.reviews.read().await;
        let stats = compute_stats(&reviews, now);
        debug!(total = stats.total_reviews, "review stats computed");
        Ok(stats)
    }

    async fn mark_helpful(&self, id: &ReviewId) -> Result<(), StoreError> {
        self.simulate(self.latency.lookup).await;
        let reviews = self.reviews.read().await;
        if !reviews.iter().any(|r| &r.id == id) {
            return Err(StoreError::ReviewNotFound(id.as_str().to_string()));
        }
        info!(id = %id, "review marked helpful");
        Ok(())
    }

    async fn report_review(&self, id: &ReviewId, reason: &str) -> Result<(), StoreError> {
        self.simulate(self.latency.query).await;
        let reviews = self.reviews.read().await;
        if !reviews.iter().any(|r| &r.id == id) {
            return Err(StoreError::ReviewNotFound(id.as_str().to_string()));
        }
        info!(id = %id, reason, "review reported");
        Ok(())
    }
}
