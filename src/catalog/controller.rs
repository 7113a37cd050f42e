//! Catalog view controller
//!
//! Owns the loaded catalog plus the user's filter criteria, sort key and
//! page window, and keeps the derived view (filtered, then sorted) in sync
//! with them. Every criteria or sort change is written to the injected
//! [`CriteriaStore`]; the entry is removed when the controller is dropped.

use tracing::{debug, error, info, warn};

use super::filter::{self, FilterCriteria, PriceRange};
use super::paginate::{self, PageSize, PageWindow};
use super::sort::{self, SortKey};
use crate::error::CatalogResult;
use crate::state::criteria::{CriteriaStore, PersistedCriteria};
use crate::state::data::{Category, Product};
use crate::state::fallback::fallback_products;

/// Outcome of fetching the catalog, before the pipeline sees it
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    Loaded(Vec<Product>),
    /// The fetch failed; carries the placeholder catalog
    Failed(Vec<Product>),
}

impl CatalogLoad {
    /// Network errors and malformed responses both end up on the fallback path.
    pub fn from_fetch(result: CatalogResult<Vec<Product>>) -> Self {
        match result {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                CatalogLoad::Loaded(products)
            }
            Err(e) => {
                error!("Catalog fetch failed, using placeholder catalog: {e}");
                CatalogLoad::Failed(fallback_products())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Ready, but showing the placeholder catalog
    ReadyFallback,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

pub struct ViewController<S: CriteriaStore> {
    store: S,
    state: LoadState,
    catalog: Vec<Product>,
    /// Filtered then sorted; what the pages are cut from
    view: Vec<Product>,
    criteria: FilterCriteria,
    sort: SortKey,
    window: PageWindow,
    /// The stored "filters" list, written back untouched
    extra_filters: Vec<u32>,
}

impl<S: CriteriaStore> ViewController<S> {
    /// Start a view in `Loading`, seeded from whatever criteria `store` holds.
    ///
    /// Restored criteria keep `window.page`: someone coming back to a filtered
    /// page stays on the page they were on.
    pub fn new(store: S, window: PageWindow) -> Self {
        let mut controller = Self {
            store,
            state: LoadState::Loading,
            catalog: Vec::new(),
            view: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            window,
            extra_filters: Vec::new(),
        };

        match controller.store.load() {
            Ok(Some(persisted)) => {
                debug!("Restoring persisted criteria: {persisted:?}");
                controller.criteria = persisted.criteria();
                controller.sort = persisted.sort_key();
                controller.extra_filters = persisted.filters;
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable persisted criteria: {e}"),
        }

        controller
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The catalog as loaded, before filtering
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Back to `Loading` ahead of a new fetch. The previous catalog stays
    /// in memory but nothing is shown until the fetch completes.
    pub fn begin_refresh(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Install a freshly fetched (or placeholder) catalog
    pub fn finish_load(&mut self, load: CatalogLoad) {
        let (catalog, state) = match load {
            CatalogLoad::Loaded(products) => (products, LoadState::Ready),
            CatalogLoad::Failed(products) => (products, LoadState::ReadyFallback),
        };

        self.catalog = catalog;
        self.state = state;
        self.recompute();
    }

    /// Replace the filter criteria. A real change sends the view back to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }

        self.criteria = criteria;
        self.window.page = 1;
        self.recompute();
        self.persist();
    }

    pub fn toggle_category(&mut self, category_id: u32) {
        let mut criteria = self.criteria.clone();
        if !criteria.categories.remove(&category_id) {
            criteria.categories.insert(category_id);
        }
        self.set_criteria(criteria);
    }

    pub fn set_price_range(&mut self, price: PriceRange) {
        let criteria = FilterCriteria {
            price,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    /// "Clear all" in the filter sidebar
    pub fn clear_filters(&mut self) {
        self.extra_filters.clear();

        let defaults = FilterCriteria::default();
        if self.criteria == defaults {
            // Nothing to recompute, but the stored entry may still hold filters
            self.persist();
        } else {
            self.set_criteria(defaults);
        }
    }

    /// Narrow the view to the subcategory called `name` (case-insensitive).
    /// Returns false and changes nothing when no subcategory has that name.
    pub fn select_category_named(&mut self, name: &str, categories: &[Category]) -> bool {
        let Some(category) = categories
            .iter()
            .filter(|c| c.is_subcategory())
            .find(|c| c.category_name.eq_ignore_ascii_case(name))
        else {
            debug!("No subcategory named {name:?}");
            return false;
        };

        self.set_criteria(FilterCriteria::new([category.category_id], self.criteria.price));
        true
    }

    /// Change the sort order. The page number is kept.
    pub fn set_sort(&mut self, key: SortKey) {
        if key == self.sort {
            return;
        }

        self.sort = key;
        self.recompute();
        self.persist();
    }

    /// Change the page size. The page number is kept.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.window.size = size;
    }

    pub fn set_page(&mut self, page: usize) {
        self.window.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.window.page() < self.total_pages() {
            self.window.page = self.window.page() + 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.window.page() > 1 {
            self.window.page = self.window.page() - 1;
        }
    }

    /// Number of products that pass the current filter
    pub fn results_count(&self) -> usize {
        self.view.len()
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.view.len(), self.window.size)
    }

    /// Products on the current page. Empty while loading.
    pub fn page(&self) -> &[Product] {
        if !self.state.is_ready() {
            return &[];
        }
        paginate::paginate(&self.view, self.window)
    }

    /// Up to `count` available products, in catalog order, ignoring the filter
    pub fn recommended(&self, count: usize) -> Vec<&Product> {
        self.catalog
            .iter()
            .filter(|p| p.is_available())
            .take(count)
            .collect()
    }

    fn recompute(&mut self) {
        let filtered = filter::filter(&self.catalog, &self.criteria);
        self.view = sort::sort(&filtered, self.sort);

        debug!(
            "Derived view: {} of {} products, sort {:?}",
            self.view.len(),
            self.catalog.len(),
            self.sort
        );
    }

    fn persist(&self) {
        let persisted = PersistedCriteria::capture(&self.criteria, self.sort, &self.extra_filters);
        if let Err(e) = self.store.save(&persisted) {
            warn!("Failed to persist filter criteria: {e}");
        }
    }
}

impl<S: CriteriaStore> Drop for ViewController<S> {
    fn drop(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted filter criteria: {e}");
        }
    }
}
