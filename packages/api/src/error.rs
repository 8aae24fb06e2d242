//! Error type shared by every journal operation.

use thiserror::Error;

use crate::validation::FieldErrors;

pub type Result<T, E = JournalError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("No account found for this email")]
    UnknownUser,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login required")]
    Unauthorized,

    #[error("Journal entry {0} not found")]
    NotFound(i64),

    #[error("Journal entry {0} belongs to another user")]
    Forbidden(i64),

    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl JournalError {
    /// Whether this error is an expected outcome of user input rather than a
    /// failure of the server's own infrastructure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            JournalError::DuplicateEmail
                | JournalError::UnknownUser
                | JournalError::InvalidCredentials
                | JournalError::Unauthorized
                | JournalError::NotFound(_)
                | JournalError::Forbidden(_)
                | JournalError::Validation(_)
        )
    }
}

impl From<FieldErrors> for JournalError {
    fn from(errors: FieldErrors) -> Self {
        JournalError::Validation(errors)
    }
}
