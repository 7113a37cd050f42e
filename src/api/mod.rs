//! Marketplace REST API
//!
//! Read-only access to the product and category collections. The client
//! never retries; a failed call is reported once and the caller decides
//! what to show instead.

pub mod client;
pub mod endpoints;

pub use client::ApiClient;
pub use endpoints::ProductSource;
