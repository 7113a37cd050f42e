//! Fixed-size page slicing for the catalog grid

use std::fmt;

/// Page sizes offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Nine,
    TwentySeven,
    SeventyTwo,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Nine, PageSize::TwentySeven, PageSize::SeventyTwo];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Nine => 9,
            PageSize::TwentySeven => 27,
            PageSize::SeventyTwo => 72,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == count)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Which page of the derived view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based; anything below 1 is read as 1
    pub page: usize,
    pub size: PageSize,
}

impl PageWindow {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self { page, size }
    }

    pub fn first(size: PageSize) -> Self {
        Self { page: 1, size }
    }

    /// The page number with the `< 1` rule applied
    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first(PageSize::default())
    }
}

/// `ceil(len / size)`; 0 for an empty view so no pagination controls render
pub fn total_pages(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.get())
}

/// The half-open slice `[(page-1)*size, page*size)`, clipped to `items`.
/// A page past the end is empty.
pub fn paginate<T>(items: &[T], window: PageWindow) -> &[T] {
    let size = window.size.get();
    let start = (window.page() - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}
