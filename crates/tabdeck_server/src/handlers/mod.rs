//! HTTP handlers for the Tabdeck API.

/// Cache-header demonstration endpoint.
pub mod cache_demo;
