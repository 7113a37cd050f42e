//! Placeholder data shown when the marketplace API cannot be reached
//!
//! The catalog view never renders an empty or error state for a failed
//! fetch; it renders these records instead.

use chrono::NaiveDateTime;

use super::data::{parse_timestamp, Category, Product, ProductStatus};

const LIGHTING: u32 = 1;
const BATHROOM: u32 = 2;
const HARDWARE: u32 = 3;

/// (id, name, price, category)
const PLACEHOLDER_PRODUCTS: [(u32, &str, u64, u32); 12] = [
    (1, "AMBER DECOR Small Lamp 60W, E27 S90", 45_000, LIGHTING),
    (2, "EGLO Philips GU10 3 pcs.", 45_000, LIGHTING),
    (3, "LED Dual G9 bulb 3 pcs.", 45_000, LIGHTING),
    (4, "LED Dual A60 bulb transparent warm color", 45_000, LIGHTING),
    (5, "LED Dual R80 bulb milky warm color 2 pcs.", 45_000, LIGHTING),
    (6, "LED Dual B35 bulb DIM transparent neutral color", 45_000, LIGHTING),
    (7, "Ladystena P45 LED, milky, warm color", 45_000, LIGHTING),
    (8, "LED Dial A60 bulb neutral milky color", 45_000, LIGHTING),
    (9, "Faucet kit basin + handle OmoKee round", 45_000, BATHROOM),
    (10, "Countertop washbasin GoodHome Tekapo", 55_000, BATHROOM),
    (11, "Waterproof Silicone tape 25 x 2 mm", 55_000, HARDWARE),
    (12, "AMBER DECOR Bulb 60W, E27 S90", 55_000, LIGHTING),
];

const PLACEHOLDER_CREATED: &str = "2021-01-01";

/// The embedded placeholder catalog
pub fn fallback_products() -> Vec<Product> {
    let created = parse_timestamp(PLACEHOLDER_CREATED).unwrap_or(NaiveDateTime::MIN);

    PLACEHOLDER_PRODUCTS
        .iter()
        .map(|&(id, name, price, category)| Product {
            product_id: id,
            product_name: name.to_string(),
            description: name.to_string(),
            unit_price: price,
            stock_quantity: 100,
            status: ProductStatus::Available,
            created_date: created,
            category_id: Some(category),
            company_id: None,
            image: None,
        })
        .collect()
}

/// Subcategories offered by the filter sidebar when the category list is unavailable
pub fn fallback_categories() -> Vec<Category> {
    [
        (LIGHTING, "Lighting"),
        (BATHROOM, "Bathroom"),
        (HARDWARE, "Hardware"),
        (4, "Kitchen"),
        (5, "Other"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        category_id: id,
        category_name: name.to_string(),
        parent_category_id: Some(0),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_ids_are_unique() {
        let products = fallback_products();
        let ids: HashSet<u32> = products.iter().map(|p| p.product_id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fallback_categories_are_subcategories() {
        assert!(fallback_categories().iter().all(Category::is_subcategory));
    }
}
