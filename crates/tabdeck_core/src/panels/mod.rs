//! Per-panel state machines.
//!
//! Each panel is an independently owned state object with no shared scope: the
//! shell constructs a fresh instance on every mount, so switching tabs resets
//! panel state by construction. The machines are pure; timing lives in the GUI
//! worker, which feeds completion events back through the `complete_*`/`on_*`
//! methods. No operation can fail, matching the simulated originals.

/// Simulated build comparison (Turbopack panel).
pub mod build;
/// Cache-strategy mock fetch (Cache Semantics panel).
pub mod cache;
/// Contact form with validation and a submissions list (Next Form panel).
pub mod contact;
/// One-shot mock fetch (Async Request panel).
pub mod fetch;
/// Deferred load plus quick form (React 19 Support panel).
pub mod transition;
/// Todo list and profile form (Server Action panel).
pub mod todos;

pub use build::{format_seconds, BuildKind, BuildPanel, BuildRun};
pub use cache::{CachePanel, CacheRecord};
pub use contact::{ContactPanel, ContactSubmission};
pub use fetch::{FetchPanel, FetchRecord};
pub use todos::{Todo, TodoPanel};
pub use transition::{TransitionPanel, TransitionRecord};
