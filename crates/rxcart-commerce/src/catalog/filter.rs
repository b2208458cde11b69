//! Catalog query engine.
//!
//! [`filter_products`] applies a [`FilterSpec`] as a logical AND of the
//! category, price-range, and search-term criteria. It is pure, total,
//! and stable: matching products come back in their input order, and the
//! neutral spec reproduces the input exactly.

use crate::catalog::{CategoryFilter, Product};
use crate::error::StorefrontError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A price-range selection with inclusive bounds.
///
/// Raw range strings ("all", "MIN", "MIN-MAX" in decimal dollars) are
/// validated by [`PriceRange::parse`]; malformed strings are rejected at
/// the boundary rather than silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PriceRange {
    /// No price filtering.
    #[default]
    All,
    /// Open-ended: `price >= min`.
    AtLeast(Money),
    /// Closed: `min <= price <= max`, both inclusive.
    Between { min: Money, max: Money },
}

impl PriceRange {
    /// Parse a raw range string: "all", "MIN", or "MIN-MAX".
    ///
    /// Bounds are decimal dollar amounts (USD).
    pub fn parse(s: &str) -> Result<Self, StorefrontError> {
        if s == "all" {
            return Ok(PriceRange::All);
        }

        let invalid = || StorefrontError::InvalidPriceRange(s.to_string());
        let mut parts = s.splitn(2, '-');

        let min = parts
            .next()
            .and_then(|p| p.parse::<f64>().ok())
            .filter(|m| m.is_finite() && *m >= 0.0)
            .ok_or_else(invalid)?;
        let min = Money::from_decimal(min, Currency::USD);

        match parts.next() {
            None => Ok(PriceRange::AtLeast(min)),
            Some(raw_max) => {
                let max = raw_max
                    .parse::<f64>()
                    .ok()
                    .filter(|m| m.is_finite() && *m >= 0.0)
                    .map(|m| Money::from_decimal(m, Currency::USD))
                    .filter(|max| max.amount_cents >= min.amount_cents)
                    .ok_or_else(invalid)?;
                Ok(PriceRange::Between { min, max })
            }
        }
    }

    /// Check whether a price falls inside this range (bounds inclusive).
    pub fn matches(&self, price: Money) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::AtLeast(min) => price.amount_cents >= min.amount_cents,
            PriceRange::Between { min, max } => {
                price.amount_cents >= min.amount_cents && price.amount_cents <= max.amount_cents
            }
        }
    }
}

/// The fixed price buckets offered in filter UIs.
///
/// The engine never depends on this set; each bucket just converts to the
/// [`PriceRange`] it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    Under25,
    From25To50,
    From50To100,
    Over100,
}

impl PriceBucket {
    /// All buckets, in the order they appear in filter UIs.
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Under25,
        PriceBucket::From25To50,
        PriceBucket::From50To100,
        PriceBucket::Over100,
    ];

    /// The raw filter value (e.g., "25-50").
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Under25 => "0-25",
            PriceBucket::From25To50 => "25-50",
            PriceBucket::From50To100 => "50-100",
            PriceBucket::Over100 => "100",
        }
    }

    /// The human-readable label (e.g., "$25 - $50").
    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBucket::Under25 => "Under $25",
            PriceBucket::From25To50 => "$25 - $50",
            PriceBucket::From50To100 => "$50 - $100",
            PriceBucket::Over100 => "Over $100",
        }
    }

    /// The range this bucket denotes.
    pub fn range(&self) -> PriceRange {
        match self {
            PriceBucket::Under25 => PriceRange::Between {
                min: Money::usd(0),
                max: Money::usd(2500),
            },
            PriceBucket::From25To50 => PriceRange::Between {
                min: Money::usd(2500),
                max: Money::usd(5000),
            },
            PriceBucket::From50To100 => PriceRange::Between {
                min: Money::usd(5000),
                max: Money::usd(10000),
            },
            PriceBucket::Over100 => PriceRange::AtLeast(Money::usd(10000)),
        }
    }
}

/// A catalog query: category, price range, and free-text term, combined
/// with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Category selection.
    pub category: CategoryFilter,
    /// Price-range selection.
    pub price_range: PriceRange,
    /// Case-insensitive substring matched against name or description.
    /// Empty means no text filtering.
    pub search_term: String,
}

impl FilterSpec {
    /// The neutral spec: all categories, all prices, no term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from the raw filter values a UI submits.
    pub fn from_raw(
        category: &str,
        price_range: &str,
        search_term: &str,
    ) -> Result<Self, StorefrontError> {
        Ok(Self {
            category: CategoryFilter::parse(category)?,
            price_range: PriceRange::parse(price_range)?,
            search_term: search_term.to_string(),
        })
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the price-range selection.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the search term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Reset every criterion to its neutral value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether a single product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && self.price_range.matches(product.price)
            && product.matches_term(&self.search_term)
    }
}

/// Apply a filter spec to a product collection.
///
/// Order-preserving: matching products are returned in their input order.
/// The neutral spec returns the input unchanged (same elements, same
/// order).
pub fn filter_products(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;

    fn product(id: &str, name: &str, category: Category, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            manufacturer: "Acme Pharma".to_string(),
            price: Money::usd(price_cents),
            original_price: None,
            discount: None,
            rating: 4.0,
            review_count: 10,
            image_url: None,
            description: format!("{} description", name),
            ingredients: Vec::new(),
            warnings: Vec::new(),
            in_stock: true,
            featured: false,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Paracetamol", Category::Otc, 1299),
            product("2", "Vitamin D3 2000 IU", Category::Vitamins, 1899),
            product("3", "Moisturizing Face Cream SPF 30", Category::Skincare, 2499),
            product("4", "Ibuprofen 200mg", Category::Otc, 999),
            product("5", "Omega-3 Fish Oil", Category::Vitamins, 3299),
        ]
    }

    #[test]
    fn test_neutral_spec_is_identity() {
        let products = catalog();
        let out = filter_products(&products, &FilterSpec::default());
        assert_eq!(out, products);
    }

    #[test]
    fn test_clear_restores_identity() {
        let products = catalog();
        let mut spec = FilterSpec::default()
            .with_category(CategoryFilter::Only(Category::Otc))
            .with_search_term("ibuprofen");
        assert_ne!(filter_products(&products, &spec), products);

        spec.clear();
        assert_eq!(filter_products(&products, &spec), products);
    }

    #[test]
    fn test_category_exactness() {
        let products = catalog();
        let spec = FilterSpec::default().with_category(CategoryFilter::Only(Category::Otc));
        let out = filter_products(&products, &spec);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.category == Category::Otc));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let range = PriceRange::parse("25-50").unwrap();
        assert!(range.matches(Money::usd(2500)));
        assert!(!range.matches(Money::usd(2499)));
        assert!(range.matches(Money::usd(5000)));
        assert!(!range.matches(Money::usd(5001)));
    }

    #[test]
    fn test_open_ended_range() {
        let range = PriceRange::parse("100").unwrap();
        assert_eq!(range, PriceRange::AtLeast(Money::usd(10000)));
        assert!(range.matches(Money::usd(10000)));
        assert!(range.matches(Money::usd(999999)));
        assert!(!range.matches(Money::usd(9999)));
    }

    #[test]
    fn test_malformed_range_rejected() {
        for raw in ["", "cheap", "25-", "-50", "25-abc", "NaN", "10-5"] {
            assert!(
                matches!(
                    PriceRange::parse(raw),
                    Err(StorefrontError::InvalidPriceRange(_))
                ),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_search_case_insensitive() {
        let products = catalog();
        let spec = FilterSpec::default().with_search_term("vitamin");
        let out = filter_products(&products, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Vitamin D3 2000 IU");
    }

    #[test]
    fn test_search_matches_description() {
        let products = catalog();
        let spec = FilterSpec::default().with_search_term("omega-3 fish oil description");
        let out = filter_products(&products, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, ProductId::new("5"));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let products = catalog();
        let spec = FilterSpec::default()
            .with_category(CategoryFilter::Only(Category::Vitamins))
            .with_price_range(PriceRange::parse("25-50").unwrap());
        let out = filter_products(&products, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Omega-3 Fish Oil");
    }

    #[test]
    fn test_order_preserved() {
        let products = catalog();
        let spec = FilterSpec::default().with_category(CategoryFilter::Only(Category::Otc));
        let out = filter_products(&products, &spec);
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let products = catalog();
        let spec = FilterSpec::default().with_search_term("no such product");
        assert!(filter_products(&products, &spec).is_empty());
    }

    #[test]
    fn test_from_raw() {
        let spec = FilterSpec::from_raw("vitamins", "0-25", "d3").unwrap();
        assert_eq!(spec.category, CategoryFilter::Only(Category::Vitamins));
        assert!(FilterSpec::from_raw("vitamins", "bogus", "").is_err());
        assert!(FilterSpec::from_raw("bogus", "all", "").is_err());
    }

    #[test]
    fn test_bucket_ranges_parse_consistently() {
        for bucket in PriceBucket::ALL {
            assert_eq!(PriceRange::parse(bucket.as_str()).unwrap(), bucket.range());
        }
    }
}
