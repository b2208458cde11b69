//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the pharmacy catalog.
///
/// Products are created once by the data source and treated as read-only
/// by the engines; filtering produces new derived views, never mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Manufacturer / brand name.
    pub manufacturer: String,
    /// Current price.
    pub price: Money,
    /// Pre-discount price, present only when a discount applies.
    /// Must be >= `price` when present.
    pub original_price: Option<Money>,
    /// Discount as an integer percent, supplied pre-computed by the data
    /// source; the engines do not recompute or validate it.
    pub discount: Option<u8>,
    /// Average star rating in [0.0, 5.0], denormalized.
    pub rating: f64,
    /// Number of reviews, denormalized.
    pub review_count: u32,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Full description.
    pub description: String,
    /// Active and inactive ingredients, in label order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Usage warnings, in label order.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Whether the product is featured on the home page.
    pub featured: bool,
}

impl Product {
    /// Check if the product has a discounted price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Amount saved versus the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        self.original_price?.try_subtract(&self.price)
    }

    /// Discount percentage derived from the price pair, for display
    /// cross-checks against the stored `discount` field.
    pub fn computed_discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let savings = op.amount_cents - self.price.amount_cents;
                Some((savings as f64 / op.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// An empty term matches every product.
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
