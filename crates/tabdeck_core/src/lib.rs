//! Core domain library for Tabdeck (tab selection, panel state, mock data).

/// Cache-strategy mapping shared by the API handler and the cache panel.
pub mod cache;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Tabdeck crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Form schemas and validation.
pub mod forms;
/// Per-panel state machines.
pub mod panels;
/// Tab descriptors and the single-active-choice selector.
pub mod tabs;
/// Random opaque token generation for mock records.
pub mod token;

pub use cache::CacheStrategy;
pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use error::AppError;
pub use tabs::{TabDescriptor, TabId, TabSelector, TABS};
