//! Pharmacy product categories.
//!
//! The category set is fixed and closed; "all" is a filter-only wildcard
//! carried by [`CategoryFilter`] so it can never appear on a product.

use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pharmacy product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Prescription,
    Otc,
    Vitamins,
    Skincare,
    PersonalCare,
    BabyCare,
}

impl Category {
    /// All categories, in the order they appear in filter UIs.
    pub const ALL: [Category; 6] = [
        Category::Prescription,
        Category::Otc,
        Category::Vitamins,
        Category::Skincare,
        Category::PersonalCare,
        Category::BabyCare,
    ];

    /// The wire/storage value (e.g., "baby-care").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prescription => "prescription",
            Category::Otc => "otc",
            Category::Vitamins => "vitamins",
            Category::Skincare => "skincare",
            Category::PersonalCare => "personal-care",
            Category::BabyCare => "baby-care",
        }
    }

    /// The human-readable label (e.g., "Baby Care").
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Prescription => "Prescription",
            Category::Otc => "Over-the-Counter",
            Category::Vitamins => "Vitamins & Supplements",
            Category::Skincare => "Skincare",
            Category::PersonalCare => "Personal Care",
            Category::BabyCare => "Baby Care",
        }
    }

    /// Parse a category value. Case-sensitive, matching the wire values.
    pub fn from_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category selection in a catalog query: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category filtering (the "all" wildcard).
    #[default]
    All,
    /// Exact match against one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a raw filter value: "all" or one of the category values.
    pub fn parse(s: &str) -> Result<Self, StorefrontError> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| StorefrontError::UnknownCategory(s.to_string()))
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}
