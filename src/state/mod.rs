//! State management module
//!
//! This module handles all application state, including:
//! - Marketplace records (data.rs)
//! - Placeholder catalog for failed fetches (fallback.rs)
//! - Persisted filter criteria (criteria.rs)
//! - SQLite session store and display preferences (session.rs)
//! - The shopping cart (cart.rs)

pub mod cart;
pub mod criteria;
pub mod data;
pub mod fallback;
pub mod session;
