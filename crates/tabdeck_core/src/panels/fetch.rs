//! One-shot mock fetch (Async Request panel).

use crate::token::request_token;
use chrono::{DateTime, Utc};

/// Result record produced by the mock fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl FetchRecord {
    /// Build the canned success record with a fresh timestamp and token.
    pub fn mock() -> Self {
        Self {
            message: "Data fetched successfully!".to_string(),
            timestamp: Utc::now(),
            id: request_token(),
        }
    }
}

/// State for the Async Request panel: idle, pending, or showing a result.
#[derive(Debug, Default)]
pub struct FetchPanel {
    pending: bool,
    record: Option<FetchRecord>,
}

impl FetchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fetch is in flight (the trigger is disabled while true).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The last completed result, if any.
    pub fn record(&self) -> Option<&FetchRecord> {
        self.record.as_ref()
    }

    /// Enter the pending state.
    ///
    /// # Returns
    /// `false` when a fetch is already in flight; the caller must not dispatch
    /// a second operation in that case.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Apply a completed fetch, replacing any previous result.
    pub fn complete(&mut self, record: FetchRecord) {
        self.record = Some(record);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_pending_result_is_sequential() {
        let mut panel = FetchPanel::new();
        assert!(!panel.is_pending());
        assert!(panel.record().is_none());

        assert!(panel.begin());
        assert!(panel.is_pending());
        // Re-triggering while pending is refused.
        assert!(!panel.begin());

        panel.complete(FetchRecord::mock());
        assert!(!panel.is_pending());
        let record = panel.record().expect("record after completion");
        assert_eq!(record.message, "Data fetched successfully!");
        assert!(!record.id.is_empty());
    }

    #[test]
    fn second_fetch_replaces_previous_record() {
        let mut panel = FetchPanel::new();
        panel.begin();
        panel.complete(FetchRecord::mock());
        let first_id = panel.record().expect("first").id.clone();

        panel.begin();
        let replacement = FetchRecord {
            id: format!("{}x", first_id),
            ..FetchRecord::mock()
        };
        panel.complete(replacement);
        assert_ne!(panel.record().expect("second").id, first_id);
    }

    #[test]
    fn fresh_panel_starts_from_initial_state() {
        // Remounting constructs a new value; a completed panel leaves no trace.
        let mut panel = FetchPanel::new();
        panel.begin();
        panel.complete(FetchRecord::mock());

        let remounted = FetchPanel::new();
        assert!(!remounted.is_pending());
        assert!(remounted.record().is_none());
    }
}
