//! Shared data structures for the application state
//!
//! These structs mirror the records served by the marketplace API and
//! flow unchanged from the API client through the catalog pipeline to the UI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Availability of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductStatus {
    Available,
    OutOfStock,
}

impl<'de> Deserialize<'de> for ProductStatus {
    /// Anything the API sends that is not "Available" counts as out of stock
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("available") {
            Ok(ProductStatus::Available)
        } else {
            Ok(ProductStatus::OutOfStock)
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Available => write!(f, "Available"),
            ProductStatus::OutOfStock => write!(f, "Out of stock"),
        }
    }
}

/// A single product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog
    #[serde(rename = "productID")]
    pub product_id: u32,
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Empty when the API sends null or omits it
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    /// Price in the smallest currency unit
    #[serde(rename = "unitPrice")]
    pub unit_price: u64,
    #[serde(rename = "stockQuantity", default)]
    pub stock_quantity: u32,
    pub status: ProductStatus,
    #[serde(rename = "createdDate", deserialize_with = "deserialize_timestamp")]
    pub created_date: NaiveDateTime,
    /// None = uncategorized
    #[serde(rename = "categoryID", default)]
    pub category_id: Option<u32>,
    #[serde(rename = "companyID", default)]
    pub company_id: Option<u32>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }
}

/// A product category. Top-level categories have no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryID")]
    pub category_id: u32,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "parentCategoryID", default)]
    pub parent_category_id: Option<u32>,
}

impl Category {
    pub fn is_subcategory(&self) -> bool {
        self.parent_category_id.is_some()
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts "2021-01-01", "2021-01-01T10:15:00" and RFC 3339 timestamps
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r#"{
            "productID": 7,
            "productName": "LED Dual G9 bulb 3 pcs.",
            "description": "LED Dual G9 bulb 3 pcs.",
            "unitPrice": 45000,
            "stockQuantity": 100,
            "status": "Available",
            "createdDate": "2021-01-01",
            "categoryID": 1,
            "companyID": 3
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.product_id, 7);
        assert_eq!(product.unit_price, 45000);
        assert_eq!(product.category_id, Some(1));
        assert_eq!(product.image, None);
        assert!(product.is_available());
        assert_eq!(product.created_date, parse_timestamp("2021-01-01T00:00:00").unwrap());
    }

    #[test]
    fn test_unknown_status_is_out_of_stock() {
        let json = r#"{
            "productID": 1,
            "productName": "Tape",
            "unitPrice": 10,
            "status": "Discontinued",
            "createdDate": "2024-03-01T10:15:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert_eq!(product.category_id, None);
    }

    #[test]
    fn test_null_description_is_empty() {
        let json = r#"{
            "productID": 2,
            "productName": "EGLO Philips GU10 3 pcs.",
            "description": null,
            "unitPrice": 45000,
            "status": "Available",
            "createdDate": "2021-01-01"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.description, "");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2021-01-01").is_some());
        assert!(parse_timestamp("2024-03-01T10:15:00").is_some());
        assert!(parse_timestamp("2024-03-01T10:15:00.123").is_some());
        assert!(parse_timestamp("2024-03-01T10:15:00+07:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
