//! Store error types.

use rxcart_commerce::StorefrontError;
use thiserror::Error;

/// Errors surfaced by the data-access layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A review id was not found.
    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    /// A submitted review draft failed domain validation.
    #[error("Invalid review draft: {0}")]
    InvalidDraft(#[from] StorefrontError),
}
