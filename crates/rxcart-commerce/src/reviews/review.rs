//! Review types.

use crate::error::StorefrontError;
use crate::ids::{ProductId, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store reply to a customer review.
///
/// The reply body and its date travel together; a response can never
/// exist without its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreResponse {
    /// The reply text.
    pub body: String,
    /// When the store replied.
    pub date: DateTime<Utc>,
}

/// A customer review of a product.
///
/// Reviews are created by the data source and treated as read-only by the
/// engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The reviewed product. Not enforced as a foreign key.
    pub product_id: ProductId,
    /// Denormalized copy of the product name at review time.
    pub product_name: String,
    /// Reviewer display name.
    pub customer_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// When the review was submitted.
    pub date: DateTime<Utc>,
    /// Whether the purchase was verified.
    pub verified: bool,
    /// Optional store reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_response: Option<StoreResponse>,
}

/// An author-submitted review before the store accepts it.
///
/// The store assigns `id` and `date` and defaults `verified` to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    /// The reviewed product.
    pub product_id: ProductId,
    /// Product name as shown to the author.
    pub product_name: String,
    /// Reviewer display name.
    pub customer_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
}

impl ReviewDraft {
    /// Validate the draft: rating in [1, 5], no blank author or comment.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if !(1..=5).contains(&self.rating) {
            return Err(StorefrontError::InvalidReview(format!(
                "rating must be 1-5, got {}",
                self.rating
            )));
        }
        if self.customer_name.trim().is_empty() {
            return Err(StorefrontError::InvalidReview(
                "customer name is required".to_string(),
            ));
        }
        if self.comment.trim().is_empty() {
            return Err(StorefrontError::InvalidReview(
                "comment is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Promote the draft to a stored review with server-assigned fields.
    pub fn into_review(self, id: ReviewId, date: DateTime<Utc>) -> Review {
        Review {
            id,
            product_id: self.product_id,
            product_name: self.product_name,
            customer_name: self.customer_name,
            rating: self.rating,
            comment: self.comment,
            date,
            verified: false,
            store_response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReviewDraft {
        ReviewDraft {
            product_id: ProductId::new("1"),
            product_name: "Paracetamol".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "Works quickly and effectively.".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut d = draft();
        d.rating = 0;
        assert!(d.validate().is_err());
        d.rating = 6;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut d = draft();
        d.customer_name = "   ".to_string();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.comment = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_review_json_shape() {
        let review = draft().into_review(ReviewId::new("r9"), Utc::now());
        let json = serde_json::to_value(&review).unwrap();
        assert!(json.get("productId").is_some());
        assert!(json.get("customerName").is_some());
        // Absent store response is omitted entirely, not null.
        assert!(json.get("storeResponse").is_none());
    }

    #[test]
    fn test_into_review_defaults() {
        let date = Utc::now();
        let review = draft().into_review(ReviewId::new("r9"), date);
        assert_eq!(review.id, ReviewId::new("r9"));
        assert_eq!(review.date, date);
        assert!(!review.verified);
        assert!(review.store_response.is_none());
    }
}
