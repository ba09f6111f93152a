//! Deferred load plus quick form (React 19 Support panel).

use chrono::{DateTime, Utc};

/// Result record produced by the deferred load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub features: Vec<&'static str>,
    pub version: &'static str,
}

impl TransitionRecord {
    /// Build the canned load result.
    pub fn mock() -> Self {
        Self {
            message: "Data loaded with React 19 use() hook".to_string(),
            timestamp: Utc::now(),
            features: vec!["use() hook", "Enhanced forms", "Better transitions"],
            version: "React 19",
        }
    }
}

/// Name/email pair shown in the quick form's submitted banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFormSubmission {
    pub name: String,
    pub email: String,
}

/// State for the React 19 Support panel.
///
/// Two independent simulated operations live here: a deferred data load and a
/// quick form whose submitted banner auto-clears after a fixed delay. The
/// banner clear arrives as a separate timer event.
#[derive(Debug, Default)]
pub struct TransitionPanel {
    load_pending: bool,
    record: Option<TransitionRecord>,
    form_pending: bool,
    submitted: Option<QuickFormSubmission>,
    pub name_draft: String,
    pub email_draft: String,
}

impl TransitionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_load_pending(&self) -> bool {
        self.load_pending
    }

    pub fn record(&self) -> Option<&TransitionRecord> {
        self.record.as_ref()
    }

    pub fn is_form_pending(&self) -> bool {
        self.form_pending
    }

    pub fn submitted(&self) -> Option<&QuickFormSubmission> {
        self.submitted.as_ref()
    }

    /// Start the deferred load.
    ///
    /// # Returns
    /// `false` when a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.load_pending {
            return false;
        }
        self.load_pending = true;
        true
    }

    /// Apply a completed load.
    pub fn complete_load(&mut self, record: TransitionRecord) {
        self.record = Some(record);
        self.load_pending = false;
    }

    /// Start the quick form submission from the current drafts.
    ///
    /// # Returns
    /// The name/email pair to hand to the worker, or `None` when a submission
    /// is already in flight.
    pub fn begin_quick_form(&mut self) -> Option<QuickFormSubmission> {
        if self.form_pending {
            return None;
        }
        self.form_pending = true;
        Some(QuickFormSubmission {
            name: self.name_draft.clone(),
            email: self.email_draft.clone(),
        })
    }

    /// Show the submitted banner and clear the drafts.
    pub fn complete_quick_form(&mut self, submission: QuickFormSubmission) {
        self.submitted = Some(submission);
        self.form_pending = false;
        self.name_draft.clear();
        self.email_draft.clear();
    }

    /// Hide the submitted banner (fired by the auto-reset timer).
    pub fn clear_submitted(&mut self) {
        self.submitted = None;
    }
}
