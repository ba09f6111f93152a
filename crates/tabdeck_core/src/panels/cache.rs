//! Cache-strategy mock fetch (Cache Semantics panel).

use crate::cache::CacheStrategy;
use crate::token::request_token;
use chrono::{DateTime, Utc};

/// Result record produced by a strategy-tagged mock fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub strategy: CacheStrategy,
    pub request_id: String,
    pub cached: bool,
}

impl CacheRecord {
    /// Build the canned record for `strategy`.
    pub fn mock(strategy: CacheStrategy) -> Self {
        Self {
            message: format!("Data fetched with {} cache strategy", strategy.as_str()),
            timestamp: Utc::now(),
            strategy,
            request_id: request_token(),
            cached: strategy.is_cached(),
        }
    }
}

/// State for the Cache Semantics panel.
///
/// While pending, the strategy being fetched is remembered so the UI can name
/// it next to the spinner. All three triggers share one pending gate.
#[derive(Debug, Default)]
pub struct CachePanel {
    pending: Option<CacheStrategy>,
    record: Option<CacheRecord>,
}

impl CachePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Strategy of the in-flight fetch, if any.
    pub fn pending_strategy(&self) -> Option<CacheStrategy> {
        self.pending
    }

    pub fn record(&self) -> Option<&CacheRecord> {
        self.record.as_ref()
    }

    /// Enter the pending state for `strategy`.
    ///
    /// # Returns
    /// `false` when a fetch is already in flight.
    pub fn begin(&mut self, strategy: CacheStrategy) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(strategy);
        true
    }

    /// Apply a completed fetch, replacing any previous result.
    pub fn complete(&mut self, record: CacheRecord) {
        self.record = Some(record);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_gate_covers_all_strategies() {
        let mut panel = CachePanel::new();
        assert!(panel.begin(CacheStrategy::NoCache));
        assert_eq!(panel.pending_strategy(), Some(CacheStrategy::NoCache));
        // Any further trigger is refused until completion, whatever the strategy.
        for strategy in CacheStrategy::ALL {
            assert!(!panel.begin(strategy));
        }

        panel.complete(CacheRecord::mock(CacheStrategy::NoCache));
        assert!(!panel.is_pending());
        assert!(panel.begin(CacheStrategy::ForceCache));
    }

    #[test]
    fn record_reports_cached_only_for_force_cache() {
        let forced = CacheRecord::mock(CacheStrategy::ForceCache);
        assert!(forced.cached);
        assert_eq!(
            forced.message,
            "Data fetched with force-cache cache strategy"
        );

        let plain = CacheRecord::mock(CacheStrategy::Default);
        assert!(!plain.cached);

        let uncached = CacheRecord::mock(CacheStrategy::NoCache);
        assert!(!uncached.cached);
    }
}
