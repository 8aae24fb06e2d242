//! # Error recovery at the handler boundary
//!
//! Domain failures never reach the client as raw errors. [`recover`] turns each
//! expected [`JournalError`] into a flash message plus a redirect:
//!
//! | Error | Flash | Redirect |
//! |-------|-------|----------|
//! | `DuplicateEmail` | "Email already registered. Please login." | `/login` |
//! | `UnknownUser` | "No account found. Please register first." | `/register` |
//! | `InvalidCredentials` | "Invalid email or password." | `/login` |
//! | `Unauthorized` | "Please log in to access this page." | `/login` |
//! | `Forbidden` | "Unauthorized access." | `/home` |
//!
//! `NotFound` renders the 404 page. Anything else is an infrastructure failure:
//! it is logged and answered with a generic 500 page through [`WebError`].

use api::JournalError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::flash::{self, Level};
use crate::views;

/// Error returned by handlers; renders as a 404 or 500 page.
#[derive(Debug)]
pub struct WebError(JournalError);

impl From<JournalError> for WebError {
    fn from(err: JournalError) -> Self {
        WebError(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self.0 {
            JournalError::NotFound(entry_id) => {
                tracing::debug!(entry_id, "entry not found");
                not_found()
            }
            err => {
                if err.is_user_facing() {
                    tracing::warn!(error = %err, "unrecovered request error");
                } else {
                    tracing::error!(error = %err, "request failed");
                }
                (StatusCode::INTERNAL_SERVER_ERROR, views::server_error()).into_response()
            }
        }
    }
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, views::not_found()).into_response()
}

/// Flash and destination for an expected failure.
fn outcome(err: &JournalError) -> Option<(Level, &'static str, &'static str)> {
    match err {
        JournalError::DuplicateEmail => Some((
            Level::Danger,
            "Email already registered. Please login.",
            "/login",
        )),
        JournalError::UnknownUser => Some((
            Level::Warning,
            "No account found. Please register first.",
            "/register",
        )),
        JournalError::InvalidCredentials => {
            Some((Level::Danger, "Invalid email or password.", "/login"))
        }
        JournalError::Unauthorized => {
            Some((Level::Info, "Please log in to access this page.", "/login"))
        }
        JournalError::Forbidden(_) => Some((Level::Danger, "Unauthorized access.", "/home")),
        _ => None,
    }
}

/// Turn `err` into the response the user should see.
pub async fn recover(session: &Session, err: JournalError) -> Response {
    let Some((level, message, to)) = outcome(&err) else {
        return WebError(err).into_response();
    };

    tracing::debug!(error = %err, redirect = to, "recovered request error");
    match flash::push(session, level, message).await {
        Ok(()) => Redirect::to(to).into_response(),
        Err(flash_err) => WebError(flash_err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::FieldErrors;

    #[test]
    fn test_outcomes() {
        assert_eq!(outcome(&JournalError::UnknownUser).unwrap().2, "/register");
        assert_eq!(outcome(&JournalError::Forbidden(1)).unwrap().1, "Unauthorized access.");
        assert!(outcome(&JournalError::NotFound(1)).is_none());
        assert!(outcome(&JournalError::Validation(FieldErrors::new())).is_none());
    }

    #[test]
    fn test_status_codes() {
        let response = WebError::from(JournalError::NotFound(1)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = WebError::from(JournalError::PasswordHash("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // A user error with no recovery still gets the generic page.
        let response = WebError::from(JournalError::Validation(FieldErrors::new())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
