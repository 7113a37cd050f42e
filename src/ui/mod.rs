//! Widgets for the catalog screen
//!
//! Plain view functions over application state; all behavior lives in the
//! catalog controller.

pub mod filter_panel;
pub mod pagination;
pub mod product_card;
