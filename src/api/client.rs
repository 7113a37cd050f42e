use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::endpoints::{categories_url, ProductSource};
use crate::error::{CatalogError, CatalogResult};
use crate::state::data::{Category, Product};
use crate::state::fallback::fallback_categories;

/// HTTP client for the marketplace API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_products(&self, source: ProductSource) -> CatalogResult<Vec<Product>> {
        debug!("Fetching {source}");
        let body = self.get_json(&source.url(&self.base_url)).await?;
        parse_list(body)
    }

    pub async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let body = self.get_json(&categories_url(&self.base_url)).await?;
        parse_list(body)
    }

    /// Subcategories for the filter sidebar, or the embedded list when the
    /// category collection cannot be fetched
    pub async fn fetch_subcategories(&self) -> Vec<Category> {
        match self.fetch_categories().await {
            Ok(categories) => categories.into_iter().filter(Category::is_subcategory).collect(),
            Err(e) => {
                warn!("Category fetch failed, using placeholder categories: {e}");
                fallback_categories()
            }
        }
    }

    async fn get_json(&self, url: &str) -> CatalogResult<Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("GET {url} returned {status}");
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Accepts a bare JSON array or an object wrapping one in `data`.
///
/// Records that fail to decode are logged and skipped; only a body that
/// is not an array at all is an error.
pub fn parse_list<T: DeserializeOwned>(body: Value) -> CatalogResult<Vec<T>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(CatalogError::MalformedResponse(
                    "object without a data array".to_string(),
                ))
            }
        },
        other => {
            return Err(CatalogError::MalformedResponse(format!(
                "expected an array, got {other}"
            )))
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| {
            let id = record_id(&item);
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed record {id}: {e}");
                    None
                }
            }
        })
        .collect();

    if records.len() < total {
        warn!("Kept {} of {total} records", records.len());
    }

    Ok(records)
}

/// Best-effort id of a raw record, for log lines
fn record_id(item: &Value) -> String {
    ["productID", "categoryID", "id"]
        .into_iter()
        .find_map(|key| item.get(key))
        .map_or_else(|| String::from("<no id>"), Value::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoad;
    use serde_json::json;

    fn product_json(id: u32) -> Value {
        json!({
            "productID": id,
            "productName": "Countertop washbasin GoodHome Tekapo",
            "unitPrice": 55000,
            "stockQuantity": 100,
            "status": "Available",
            "createdDate": "2021-01-01",
            "categoryID": 2
        })
    }

    #[test]
    fn test_parse_bare_array() {
        let products: Vec<Product> = parse_list(json!([product_json(1), product_json(2)])).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].product_id, 2);
    }

    #[test]
    fn test_parse_wrapped_array() {
        let products: Vec<Product> = parse_list(json!({ "data": [product_json(5)] })).unwrap();
        assert_eq!(products[0].product_id, 5);
    }

    #[test]
    fn test_reject_non_array_shapes() {
        for body in [json!({ "message": "ok" }), json!({ "data": product_json(1) }), json!("oops"), json!(null)] {
            let result: CatalogResult<Vec<Product>> = parse_list(body);
            assert!(matches!(result, Err(CatalogError::MalformedResponse(_))));
        }
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let mut null_description = product_json(2);
        null_description["description"] = Value::Null;
        let mut decimal_price = product_json(3);
        decimal_price["unitPrice"] = json!(45000.5);
        let mut bad_date = product_json(4);
        bad_date["createdDate"] = json!("someday");

        let body = json!([
            product_json(1),
            null_description,
            decimal_price,
            bad_date,
            { "productID": "x" },
            product_json(6),
        ]);

        let products: Vec<Product> = parse_list(body).unwrap();
        assert_eq!(products.iter().map(|p| p.product_id).collect::<Vec<_>>(), vec![1, 2, 6]);
    }

    #[test]
    fn test_mixed_array_stays_loaded() {
        let body = json!({ "data": [product_json(1), { "productID": 2, "status": 5 }, product_json(3)] });

        match CatalogLoad::from_fetch(parse_list(body)) {
            CatalogLoad::Loaded(products) => {
                assert_eq!(products.len(), 2);
                assert!(products.iter().all(|p| p.category_id == Some(2)));
            }
            CatalogLoad::Failed(_) => panic!("mixed array should not fall back"),
        }
    }

    #[test]
    fn test_record_id_for_logs() {
        assert_eq!(record_id(&product_json(9)), "9");
        assert_eq!(record_id(&json!({ "categoryID": 4 })), "4");
        assert_eq!(record_id(&json!({})), "<no id>");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = ApiClient::new("http://localhost:5000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn test_unreachable_api_fails_once() {
        // Nothing listens on the discard port
        let api = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        assert!(api.fetch_products(ProductSource::All).await.is_err());
        assert_eq!(api.fetch_subcategories().await, fallback_categories());
    }
}
