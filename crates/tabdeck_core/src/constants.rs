//! Shared constants used across Tabdeck crates.

/// Default API port for the cache-demo server.
pub const DEFAULT_PORT: u16 = 38652;

/// Default artificial processing delay applied to API responses, in milliseconds.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 500;

/// Delay for the async-request panel's mock fetch.
pub const FETCH_DELAY_MS: u64 = 2_000;

/// Delay for the cache panel's mock fetch, regardless of strategy.
pub const CACHE_FETCH_DELAY_MS: u64 = 1_500;

/// Delay for the transition panel's deferred load.
pub const TRANSITION_LOAD_DELAY_MS: u64 = 2_000;

/// Delay for the transition panel's quick form submission.
pub const QUICK_FORM_DELAY_MS: u64 = 1_000;

/// How long the quick form's submitted banner stays visible.
pub const QUICK_FORM_RESET_DELAY_MS: u64 = 3_000;

/// Delay for the contact form submission.
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1_500;

/// Delay for adding a todo.
pub const TODO_ADD_DELAY_MS: u64 = 800;

/// Delay for toggling or deleting a todo.
pub const TODO_MUTATE_DELAY_MS: u64 = 300;

/// Delay for the profile update form.
pub const PROFILE_UPDATE_DELAY_MS: u64 = 1_200;

/// Simulated webpack build duration.
pub const WEBPACK_BUILD_MS: u64 = 15_000;

/// Simulated turbopack build duration.
pub const TURBOPACK_BUILD_MS: u64 = 3_000;

/// Progress tick interval for simulated builds.
pub const BUILD_TICK_MS: u64 = 100;
