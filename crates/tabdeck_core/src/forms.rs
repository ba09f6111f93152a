//! Form schemas and validation.
//!
//! Every form in the app has a statically declared input struct and a
//! validation function returning a tagged result, instead of the dynamic
//! dictionary lookups the pattern is usually written with.

/// Input schema for the contact form on the Next Form panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field-level validation errors for [`ContactInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ContactFieldErrors {
    /// Whether any field failed validation.
    pub fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some()
    }
}

/// Validate a contact form input.
///
/// Rules: name at least two characters, email must contain `@`. Lengths are
/// counted in characters, not bytes.
///
/// # Returns
/// `Ok(())` when the input is acceptable, otherwise the per-field errors.
pub fn validate_contact(input: &ContactInput) -> Result<(), ContactFieldErrors> {
    let mut errors = ContactFieldErrors::default();
    if input.name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters");
    }
    if !input.email.contains('@') {
        errors.email = Some("Please enter a valid email");
    }
    if errors.any() {
        Err(errors)
    } else {
        Ok(())
    }
}

/// Input schema for the profile form on the Server Action panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub bio: String,
}

/// Normalize a todo text field.
///
/// # Returns
/// The trimmed text, or `None` when it is empty after trimming.
pub fn normalize_todo_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn valid_contact_input_passes() {
        assert_eq!(validate_contact(&valid_input()), Ok(()));
    }

    #[test]
    fn short_name_sets_name_error_only() {
        let input = ContactInput {
            name: "A".to_string(),
            ..valid_input()
        };
        let errors = validate_contact(&input).expect_err("short name must fail");
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let input = ContactInput {
            name: "éé".to_string(),
            ..valid_input()
        };
        assert_eq!(validate_contact(&input), Ok(()));
    }

    #[test]
    fn email_without_at_sign_sets_email_error() {
        let input = ContactInput {
            email: "not-an-email".to_string(),
            ..valid_input()
        };
        let errors = validate_contact(&input).expect_err("bad email must fail");
        assert!(errors.email.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn both_errors_reported_together() {
        let input = ContactInput::default();
        let errors = validate_contact(&input).expect_err("empty input must fail");
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
    }

    #[test]
    fn todo_text_is_trimmed_and_rejected_when_blank() {
        assert_eq!(normalize_todo_text("  ship it  "), Some("ship it".into()));
        assert_eq!(normalize_todo_text("   "), None);
        assert_eq!(normalize_todo_text(""), None);
    }
}
