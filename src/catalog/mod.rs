//! Catalog pipeline
//!
//! This module turns the loaded product list into what the grid shows:
//! - `filter.rs` - category and price predicate
//! - `sort.rs` - the four toolbar sort orders
//! - `paginate.rs` - fixed-size page slicing
//! - `controller.rs` - owns the criteria and composes filter -> sort -> paginate

pub mod controller;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use controller::{CatalogLoad, LoadState, ViewController};
