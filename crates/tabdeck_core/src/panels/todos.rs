//! Todo list and profile form (Server Action panel).

use crate::forms::{normalize_todo_text, ProfileInput};
use chrono::{DateTime, Utc};

/// One todo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// State for the Server Action panel.
///
/// Todos are appended in creation order with ids from a monotonic counter.
/// Toggle and delete are dispatched immediately but applied when their timer
/// event lands, so a mutation in flight does not block further triggers.
#[derive(Debug)]
pub struct TodoPanel {
    todos: Vec<Todo>,
    next_id: u64,
    adding: bool,
    profile: Option<ProfileInput>,
    profile_updating: bool,
    pub todo_draft: String,
    pub profile_draft: ProfileInput,
}

impl TodoPanel {
    /// Create the panel with its two seeded entries.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            todos: vec![
                Todo {
                    id: 1,
                    text: "Learn Next.js 15".to_string(),
                    completed: false,
                    created_at: now,
                },
                Todo {
                    id: 2,
                    text: "Try Server Actions".to_string(),
                    completed: true,
                    created_at: now,
                },
            ],
            next_id: 3,
            adding: false,
            profile: None,
            profile_updating: false,
            todo_draft: String::new(),
            profile_draft: ProfileInput::default(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// The last saved profile, if the form has been submitted.
    pub fn profile(&self) -> Option<&ProfileInput> {
        self.profile.as_ref()
    }

    pub fn is_profile_updating(&self) -> bool {
        self.profile_updating
    }

    /// Validate the todo draft and enter the adding state.
    ///
    /// # Returns
    /// The normalized text to hand to the worker, or `None` when the draft is
    /// blank or an add is already in flight.
    pub fn begin_add(&mut self) -> Option<String> {
        if self.adding {
            return None;
        }
        let text = normalize_todo_text(&self.todo_draft)?;
        self.adding = true;
        Some(text)
    }

    /// Append the new todo and leave the adding state.
    pub fn complete_add(&mut self, text: String) {
        let todo = Todo {
            id: self.next_id,
            text,
            completed: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.todos.push(todo);
        self.adding = false;
        self.todo_draft.clear();
    }

    /// Flip the completion flag of `id`. Unknown ids are ignored.
    pub fn apply_toggle(&mut self, id: u64) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Remove the todo with `id`. Unknown ids are ignored.
    pub fn apply_delete(&mut self, id: u64) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Start a profile update from the current draft.
    ///
    /// # Returns
    /// The draft to hand to the worker, or `None` when an update is in flight.
    pub fn begin_profile_update(&mut self) -> Option<ProfileInput> {
        if self.profile_updating {
            return None;
        }
        self.profile_updating = true;
        Some(self.profile_draft.clone())
    }

    /// Replace the saved profile and leave the updating state.
    pub fn complete_profile_update(&mut self, input: ProfileInput) {
        self.profile = Some(input);
        self.profile_updating = false;
    }
}

impl Default for TodoPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entries_match_the_demo() {
        let panel = TodoPanel::new();
        let todos = panel.todos();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert!(!todos[0].completed);
        assert_eq!(todos[1].id, 2);
        assert!(todos[1].completed);
    }

    #[test]
    fn adding_appends_one_entry_with_strictly_increasing_id() {
        let mut panel = TodoPanel::new();
        panel.todo_draft = "  write tests  ".to_string();
        let text = panel.begin_add().expect("non-empty draft");
        assert_eq!(text, "write tests");
        assert!(panel.is_adding());

        panel.complete_add(text);
        assert!(!panel.is_adding());
        let added = panel.todos().last().expect("appended entry");
        assert_eq!(added.id, 3);
        assert_eq!(added.text, "write tests");
        assert!(!added.completed);
        assert!(panel.todo_draft.is_empty());

        panel.todo_draft = "another".to_string();
        let text = panel.begin_add().expect("non-empty draft");
        panel.complete_add(text);
        let ids: Vec<u64> = panel.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn blank_draft_does_not_enter_adding_state() {
        let mut panel = TodoPanel::new();
        panel.todo_draft = "   ".to_string();
        assert!(panel.begin_add().is_none());
        assert!(!panel.is_adding());
        assert_eq!(panel.todos().len(), 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut panel = TodoPanel::new();
        panel.todo_draft = "third".to_string();
        let text = panel.begin_add().expect("draft");
        panel.complete_add(text);

        panel.apply_delete(3);
        panel.apply_delete(999); // unknown id, no-op
        assert_eq!(panel.todos().len(), 2);

        panel.todo_draft = "fourth".to_string();
        let text = panel.begin_add().expect("draft");
        panel.complete_add(text);
        assert_eq!(panel.todos().last().expect("entry").id, 4);
    }

    #[test]
    fn toggle_flips_completion_and_ignores_unknown_ids() {
        let mut panel = TodoPanel::new();
        panel.apply_toggle(1);
        assert!(panel.todos()[0].completed);
        panel.apply_toggle(1);
        assert!(!panel.todos()[0].completed);
        panel.apply_toggle(42);
        assert_eq!(panel.todos().len(), 2);
    }

    #[test]
    fn profile_update_replaces_saved_profile() {
        let mut panel = TodoPanel::new();
        assert!(panel.profile().is_none());

        panel.profile_draft = ProfileInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            bio: "first programmer".to_string(),
        };
        let input = panel.begin_profile_update().expect("not in flight");
        assert!(panel.begin_profile_update().is_none());

        panel.complete_profile_update(input);
        assert!(!panel.is_profile_updating());
        assert_eq!(panel.profile().expect("saved").name, "Ada");
    }
}
