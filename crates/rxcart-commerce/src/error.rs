//! Storefront error types.

use thiserror::Error;

/// Errors that can occur at the storefront domain boundary.
///
/// The engines themselves are total over well-typed input; these errors
/// arise only when raw, externally supplied values (filter strings, review
/// drafts) are validated into domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// A price-range string was not "all", "MIN", or "MIN-MAX".
    #[error("Invalid price range: {0:?}")]
    InvalidPriceRange(String),

    /// A category string is outside the fixed category set.
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// A submitted review draft failed validation.
    #[error("Invalid review: {0}")]
    InvalidReview(String),
}
