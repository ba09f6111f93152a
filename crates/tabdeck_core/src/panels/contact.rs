//! Contact form with validation and a submissions list (Next Form panel).

use crate::forms::{validate_contact, ContactFieldErrors, ContactInput};
use chrono::{DateTime, Utc};

/// One accepted contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// State for the Next Form panel.
///
/// The draft is edited in place by the UI. Submissions are ordered
/// newest-first and carry ids from a monotonic counter, so ids are strictly
/// increasing across the panel's lifetime even when entries are cleared.
#[derive(Debug)]
pub struct ContactPanel {
    pub draft: ContactInput,
    errors: ContactFieldErrors,
    submitting: bool,
    submissions: Vec<ContactSubmission>,
    next_id: u64,
}

impl ContactPanel {
    pub fn new() -> Self {
        Self {
            draft: ContactInput::default(),
            errors: ContactFieldErrors::default(),
            submitting: false,
            submissions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current field errors from the last rejected submission attempt.
    pub fn errors(&self) -> &ContactFieldErrors {
        &self.errors
    }

    /// Accepted submissions, newest first.
    pub fn submissions(&self) -> &[ContactSubmission] {
        &self.submissions
    }

    /// Validate the draft and, when acceptable, enter the submitting state.
    ///
    /// On validation failure the field errors are stored for display and no
    /// operation is dispatched.
    ///
    /// # Returns
    /// The validated input to hand to the simulation worker, or `None` when
    /// validation failed or a submission is already in flight.
    pub fn submit_draft(&mut self) -> Option<ContactInput> {
        if self.submitting {
            return None;
        }
        match validate_contact(&self.draft) {
            Ok(()) => {
                self.errors = ContactFieldErrors::default();
                self.submitting = true;
                Some(self.draft.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record an accepted submission and leave the submitting state.
    ///
    /// The entry is prepended so the list reads newest-first, and the draft is
    /// cleared for the next entry.
    pub fn complete(&mut self, input: ContactInput) {
        let submission = ContactSubmission {
            id: self.next_id,
            name: input.name,
            email: input.email,
            message: input.message,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.submissions.insert(0, submission);
        self.submitting = false;
        self.draft = ContactInput::default();
    }

    /// Empty the submissions list. Ids keep counting up afterwards.
    pub fn clear_submissions(&mut self) {
        self.submissions.clear();
    }
}

impl Default for ContactPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft(panel: &mut ContactPanel) {
        panel.draft = ContactInput {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            message: "hello".to_string(),
        };
    }

    #[test]
    fn short_name_yields_field_error_and_no_entry() {
        let mut panel = ContactPanel::new();
        panel.draft.name = "G".to_string();
        panel.draft.email = "grace@example.com".to_string();

        assert!(panel.submit_draft().is_none());
        assert!(panel.errors().name.is_some());
        assert!(!panel.is_submitting());
        assert!(panel.submissions().is_empty());
    }

    #[test]
    fn accepted_submission_is_prepended_with_increasing_ids() {
        let mut panel = ContactPanel::new();

        filled_draft(&mut panel);
        let first = panel.submit_draft().expect("valid draft");
        assert!(panel.is_submitting());
        panel.complete(first);

        filled_draft(&mut panel);
        let second = panel.submit_draft().expect("valid draft");
        panel.complete(second);

        let ids: Vec<u64> = panel.submissions().iter().map(|s| s.id).collect();
        // Newest first, ids strictly increasing in submission order.
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn submit_is_refused_while_in_flight() {
        let mut panel = ContactPanel::new();
        filled_draft(&mut panel);
        let input = panel.submit_draft().expect("valid draft");

        filled_draft(&mut panel);
        assert!(panel.submit_draft().is_none());

        panel.complete(input);
        assert_eq!(panel.submissions().len(), 1);
    }

    #[test]
    fn successful_submit_clears_previous_errors_and_draft() {
        let mut panel = ContactPanel::new();
        panel.draft.email = "nope".to_string();
        assert!(panel.submit_draft().is_none());
        assert!(panel.errors().any());

        filled_draft(&mut panel);
        let input = panel.submit_draft().expect("valid draft");
        assert!(!panel.errors().any());
        panel.complete(input);
        assert_eq!(panel.draft, ContactInput::default());
    }

    #[test]
    fn clear_does_not_reset_the_id_counter() {
        let mut panel = ContactPanel::new();
        filled_draft(&mut panel);
        let input = panel.submit_draft().expect("valid draft");
        panel.complete(input);
        panel.clear_submissions();
        assert!(panel.submissions().is_empty());

        filled_draft(&mut panel);
        let input = panel.submit_draft().expect("valid draft");
        panel.complete(input);
        assert_eq!(panel.submissions()[0].id, 2);
    }
}
