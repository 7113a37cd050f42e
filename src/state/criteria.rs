//! Persisted filter criteria
//!
//! The catalog view writes its filter selection and sort order to a
//! key-value store after every change, under a single well-known key, and
//! removes the entry when the view goes away. The store is injected so the
//! view can be driven in tests without touching disk.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::catalog::filter::{FilterCriteria, PriceRange};
use crate::catalog::sort::SortKey;
use crate::error::CatalogResult;

/// Key the criteria are stored under
pub const CRITERIA_KEY: &str = "filters";

/// Stored shape of the criteria:
/// `{ "categories": [..], "filters": [..], "range": [min, max], "sort": ".." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCriteria {
    /// Older builds wrote this field as "subcategories"
    #[serde(default, alias = "subcategories")]
    pub categories: Vec<u32>,
    /// Unused placeholder, carried through unchanged
    #[serde(default)]
    pub filters: Vec<u32>,
    pub range: [u64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PersistedCriteria {
    pub fn capture(criteria: &FilterCriteria, sort: SortKey, filters: &[u32]) -> Self {
        Self {
            categories: criteria.categories.iter().copied().collect(),
            filters: filters.to_vec(),
            range: [criteria.price.min, criteria.price.max],
            sort: Some(sort.as_str().to_string()),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.categories.iter().copied(),
            PriceRange::new(self.range[0], self.range[1]),
        )
    }

    /// Missing or unrecognized sort names fall back to the default order
    pub fn sort_key(&self) -> SortKey {
        self.sort
            .as_deref()
            .and_then(SortKey::parse)
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Where the catalog view keeps its criteria between page visits
pub trait CriteriaStore {
    fn load(&self) -> CatalogResult<Option<PersistedCriteria>>;
    fn save(&self, criteria: &PersistedCriteria) -> CatalogResult<()>;
    fn clear(&self) -> CatalogResult<()>;
}

/// Process-local store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCriteriaStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCriteriaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored JSON, if any
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn set_raw(&self, json: impl Into<String>) {
        *self.slot.borrow_mut() = Some(json.into());
    }
}

impl CriteriaStore for MemoryCriteriaStore {
    fn load(&self) -> CatalogResult<Option<PersistedCriteria>> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(PersistedCriteria::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, criteria: &PersistedCriteria) -> CatalogResult<()> {
        *self.slot.borrow_mut() = Some(criteria.to_json()?);
        Ok(())
    }

    fn clear(&self) -> CatalogResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
