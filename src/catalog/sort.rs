//! Sort orders offered by the catalog toolbar

use std::fmt;

use crate::state::data::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently created first
    Newest,
    /// The marketplace has no popularity signal, so this keeps the order the
    /// API returned. It is a deliberate no-op.
    #[default]
    Popular,
    PriceAscending,
    PriceDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Popular,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
    ];

    /// Name used in persisted criteria
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::PriceAscending => "priceLow",
            SortKey::PriceDescending => "priceHigh",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Newest => "Newest",
            SortKey::Popular => "Popular",
            SortKey::PriceAscending => "Price: low to high",
            SortKey::PriceDescending => "Price: high to low",
        };
        write!(f, "{label}")
    }
}

/// New vector ordered by `key`. Ties keep their input order.
pub fn sort(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();

    // slice::sort_by is stable
    match key {
        SortKey::Newest => sorted.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
        SortKey::Popular => {}
        SortKey::PriceAscending => sorted.sort_by_key(|p| p.unit_price),
        SortKey::PriceDescending => sorted.sort_by(|a, b| b.unit_price.cmp(&a.unit_price)),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::tests::product;
    use crate::state::data::parse_timestamp;
    use proptest::prelude::*;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.product_id).collect()
    }

    fn dated(id: u32, price: u64, date: &str) -> Product {
        let mut p = product(id, price, Some(1));
        p.created_date = parse_timestamp(date).unwrap();
        p
    }

    #[test]
    fn test_popular_is_identity() {
        let catalog = vec![product(3, 10, None), product(1, 30, None), product(2, 20, None)];
        assert_eq!(sort(&catalog, SortKey::Popular), catalog);
    }

    #[test]
    fn test_price_orders_are_stable() {
        let catalog = vec![
            product(1, 45_000, None),
            product(2, 55_000, None),
            product(3, 45_000, None),
            product(4, 10_000, None),
        ];

        assert_eq!(ids(&sort(&catalog, SortKey::PriceAscending)), vec![4, 1, 3, 2]);
        assert_eq!(ids(&sort(&catalog, SortKey::PriceDescending)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_newest_first_with_stable_ties() {
        let catalog = vec![
            dated(1, 0, "2021-01-01"),
            dated(2, 0, "2023-06-01"),
            dated(3, 0, "2021-01-01"),
            dated(4, 0, "2024-02-10T08:00:00"),
        ];

        assert_eq!(ids(&sort(&catalog, SortKey::Newest)), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let catalog = vec![product(1, 30, None), product(2, 10, None)];
        let before = catalog.clone();
        let _ = sort(&catalog, SortKey::PriceAscending);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_persisted_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("rating"), None);
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec((0u64..5, 0u32..4), 0..30).prop_map(|rows| {
            let dates = ["2021-01-01", "2022-01-01", "2023-01-01", "2024-01-01"];
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, day))| dated(i as u32, price, dates[day as usize]))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sort_is_idempotent(catalog in arb_catalog(), key in prop::sample::select(SortKey::ALL.to_vec())) {
            let once = sort(&catalog, key);
            prop_assert_eq!(sort(&once, key), once);
        }

        #[test]
        fn prop_price_ties_keep_input_order(catalog in arb_catalog()) {
            let sorted = sort(&catalog, SortKey::PriceAscending);
            for pair in sorted.windows(2) {
                if pair[0].unit_price == pair[1].unit_price {
                    prop_assert!(pair[0].product_id < pair[1].product_id);
                }
            }
        }
    }
}
