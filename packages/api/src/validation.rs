//! # Form validation
//!
//! Each form the journal accepts has a `validate_*` function that either returns
//! the cleaned, typed input or a [`FieldErrors`] listing every problem found.
//! Nothing here knows how errors are displayed; the `web` crate renders them
//! next to the matching field.
//!
//! | Function | Fields | Rules |
//! |----------|--------|-------|
//! | [`validate_registration`] | `email`, `password` | email required + well-formed, password at least [`MIN_PASSWORD_LEN`] characters |
//! | [`validate_login`] | `email`, `password` | email required + well-formed, password required |
//! | [`validate_entry`] | `title`, `content` | both required |
//!
//! A value made only of whitespace counts as missing. Emails are trimmed and
//! lower-cased; entry text is kept exactly as submitted.

use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Invalid email address.";

/// A single problem with a named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every problem found while validating one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages attached to `field`.
    pub fn for_field(&self, field: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(value)` if nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validated registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
}

/// Validated login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated journal entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
}

pub fn validate_registration(email: &str, password: &str) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = check_email(email, &mut errors);

    if is_blank(password) {
        errors.push("password", REQUIRED);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            format!("Field must be at least {MIN_PASSWORD_LEN} characters long."),
        );
    }

    errors.into_result(Registration {
        email,
        password: password.to_string(),
    })
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = check_email(email, &mut errors);

    if is_blank(password) {
        errors.push("password", REQUIRED);
    }

    errors.into_result(Credentials {
        email,
        password: password.to_string(),
    })
}

pub fn validate_entry(title: &str, content: &str) -> Result<EntryDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(title) {
        errors.push("title", REQUIRED);
    }
    if is_blank(content) {
        errors.push("content", REQUIRED);
    }

    errors.into_result(EntryDraft {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Trim and lower-case an email so lookups and the UNIQUE constraint agree.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn check_email(email: &str, errors: &mut FieldErrors) -> String {
    let email = normalize_email(email);
    if email.is_empty() {
        errors.push("email", REQUIRED);
    } else if !is_valid_email(&email) {
        errors.push("email", INVALID_EMAIL);
    }
    email
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld` with no whitespace, exactly one `@`, and a domain made of
/// non-empty dot-separated labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_ok() {
        let reg = validate_registration("  A@X.com ", "secret1").unwrap();
        assert_eq!(reg.email, "a@x.com");
        assert_eq!(reg.password, "secret1");
    }

    #[test]
    fn test_registration_short_password() {
        let errors = validate_registration("a@x.com", "12345").unwrap_err();
        assert_eq!(
            errors.for_field("password"),
            vec!["Field must be at least 6 characters long.".to_string()]
        );
        assert!(errors.for_field("email").is_empty());
    }

    #[test]
    fn test_registration_collects_every_error() {
        let errors = validate_registration("", "").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("email"), vec![REQUIRED.to_string()]);
        assert_eq!(errors.for_field("password"), vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let errors = validate_login("not-an-email", "whatever").unwrap_err();
        assert_eq!(errors.for_field("email"), vec![INVALID_EMAIL.to_string()]);
    }

    #[test]
    fn test_login_does_not_enforce_length() {
        assert!(validate_login("a@x.com", "abc").is_ok());
    }

    #[test]
    fn test_entry_blank_fields() {
        let errors = validate_entry("   ", "").unwrap_err();
        assert_eq!(errors.for_field("title"), vec![REQUIRED.to_string()]);
        assert_eq!(errors.for_field("content"), vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_entry_keeps_text_verbatim() {
        let draft = validate_entry(" Day 1 ", "Went well\n").unwrap();
        assert_eq!(draft.title, " Day 1 ");
        assert_eq!(draft.content, "Went well\n");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@x..com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@-x.com"));
    }

    #[test]
    fn test_display() {
        let mut errors = FieldErrors::new();
        errors.push("title", REQUIRED);
        errors.push("content", REQUIRED);
        assert_eq!(
            errors.to_string(),
            "title: This field is required.; content: This field is required."
        );
    }
}
