//! Catalog browser for a business-to-business trading marketplace.
//!
//! The product catalog comes from the marketplace REST API and is shown as
//! a card grid or list with a filter sidebar, sort selector and pagination.
//!
//! # Layout
//! - `api` - reqwest client for the product and category collections
//! - `catalog` - the filter -> sort -> paginate pipeline and its view controller
//! - `state` - records, placeholder data, persisted criteria, session store, cart
//! - `config` - environment configuration
//! - `error` - the crate's error type
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `TRADE_API_BASE_URL` | `http://localhost:5000/api` |
//! | `TRADE_REQUEST_TIMEOUT_SECS` | `10` |
//! | `TRADE_DATA_DIR` | platform data directory + `trade-catalog` |
//! | `TRADE_START_CATEGORY` | none |
//! | `RUST_LOG` | tracing filter, e.g. `trade_catalog=debug` |
//!
//! # Failure behavior
//!
//! A failed or malformed catalog fetch is never shown as an error: the view
//! switches to an embedded placeholder catalog and every filter, sort and
//! page operation keeps working on it. Nothing is retried automatically.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
