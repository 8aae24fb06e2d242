use tower_sessions::Session;

use crate::error::{JournalError, Result};
use crate::models::User;

/// Everything a request handler knows about who is calling.
///
/// Built once per request by [`AuthManager::load_context`](super::AuthManager::load_context)
/// and passed to handlers explicitly.
#[derive(Debug, Clone)]
pub struct RequestContext {
    session: Session,
    user: Option<User>,
}

impl RequestContext {
    pub fn new(session: Session, user: Option<User>) -> Self {
        Self { session, user }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The authenticated user, or [`JournalError::Unauthorized`].
    pub fn require_auth(&self) -> Result<&User> {
        self.user.as_ref().ok_or(JournalError::Unauthorized)
    }
}
