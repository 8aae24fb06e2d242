//! Session keys and the logged-in session state.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Result;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for the `%Y-%m-%d %H:%M:%S` timestamp of the last successful login.
pub const SESSION_LAST_LOGIN_KEY: &str = "last_login";

pub const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a successful login writes into the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user_id: i64,
    pub last_login: String,
}

pub async fn user_id(session: &Session) -> Result<Option<i64>> {
    Ok(session.get(SESSION_USER_ID_KEY).await?)
}

pub async fn last_login(session: &Session) -> Result<Option<String>> {
    Ok(session.get(SESSION_LAST_LOGIN_KEY).await?)
}

/// Bind the session to `state`.
pub(crate) async fn establish(session: &Session, state: &SessionState) -> Result<()> {
    session.insert(SESSION_USER_ID_KEY, state.user_id).await?;
    session
        .insert(SESSION_LAST_LOGIN_KEY, &state.last_login)
        .await?;
    Ok(())
}
