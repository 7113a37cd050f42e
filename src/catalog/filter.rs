//! Client-side product filter: category membership plus an inclusive price range

use std::collections::BTreeSet;

use crate::state::data::Product;

/// Upper bound of the default ("unrestricted") price range
pub const DEFAULT_MAX_PRICE: u64 = 1_000_000_000;

/// Inclusive price bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// The user's current filter selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Selected category IDs. Empty = no category restriction.
    pub categories: BTreeSet<u32>,
    pub price: PriceRange,
}

impl FilterCriteria {
    pub fn new(categories: impl IntoIterator<Item = u32>, price: PriceRange) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            price,
        }
    }

    /// True for the criteria a fresh view starts with
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Does `product` satisfy both the category clause and the price clause?
///
/// An uncategorized product never matches a non-empty category selection.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    let category_ok = criteria.categories.is_empty()
        || product
            .category_id
            .is_some_and(|id| criteria.categories.contains(&id));

    category_ok && criteria.price.contains(product.unit_price)
}

/// New vector of the matching products, in input order
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches(product, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::data::{parse_timestamp, ProductStatus};
    use proptest::prelude::*;

    pub(crate) fn product(id: u32, price: u64, category: Option<u32>) -> Product {
        Product {
            product_id: id,
            product_name: format!("Product {id}"),
            description: String::new(),
            unit_price: price,
            stock_quantity: 10,
            status: ProductStatus::Available,
            created_date: parse_timestamp("2024-01-01").unwrap(),
            category_id: category,
            company_id: None,
            image: None,
        }
    }

    fn scenario_catalog() -> Vec<Product> {
        vec![
            product(1, 45_000, Some(1)),
            product(2, 55_000, Some(2)),
            product(3, 45_000, Some(1)),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.product_id).collect()
    }

    #[test]
    fn test_category_and_price_filter() {
        let criteria = FilterCriteria::new([1], PriceRange::new(0, 50_000));
        let result = filter(&scenario_catalog(), &criteria);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_default_criteria_keep_everything_in_order() {
        let catalog = scenario_catalog();
        let result = filter(&catalog, &FilterCriteria::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let criteria = FilterCriteria::new([], PriceRange::new(45_000, 55_000));
        assert_eq!(filter(&scenario_catalog(), &criteria).len(), 3);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let criteria = FilterCriteria::new([], PriceRange::new(60_000, 10));
        assert!(filter(&scenario_catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_uncategorized_excluded_by_category_selection() {
        let loose = product(4, 100, None);
        assert!(matches(&loose, &FilterCriteria::default()));
        assert!(!matches(&loose, &FilterCriteria::new([1], PriceRange::default())));
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let criteria = FilterCriteria::new([99], PriceRange::default());
        assert!(filter(&scenario_catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let catalog = scenario_catalog();
        let before = catalog.clone();
        let _ = filter(&catalog, &FilterCriteria::new([2], PriceRange::default()));
        assert_eq!(catalog, before);
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (any::<u32>(), 0u64..200_000, prop::option::of(0u32..6))
            .prop_map(|(id, price, category)| product(id, price, category))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::collection::btree_set(0u32..6, 0..4),
            0u64..200_000,
            0u64..200_000,
        )
            .prop_map(|(categories, min, max)| FilterCriteria {
                categories,
                price: PriceRange::new(min, max),
            })
    }

    fn reference(product: &Product, criteria: &FilterCriteria) -> bool {
        let category = match product.category_id {
            _ if criteria.categories.is_empty() => true,
            Some(id) => criteria.categories.iter().any(|&c| c == id),
            None => false,
        };
        let price = criteria.price.min <= product.unit_price && product.unit_price <= criteria.price.max;
        category && price
    }

    proptest! {
        #[test]
        fn prop_matches_reference_predicate(product in arb_product(), criteria in arb_criteria()) {
            prop_assert_eq!(matches(&product, &criteria), reference(&product, &criteria));
        }
    }
}
