//! # Auth Manager: registration, login and per-request identity
//!
//! [`AuthManager`] owns a [`UserRepository`] and implements the account side of
//! the journal:
//!
//! | Method | Fails with | Effect |
//! |--------|-----------|--------|
//! | [`register`](AuthManager::register) | `Validation`, `DuplicateEmail` | hashes the password and stores a new user |
//! | [`login`](AuthManager::login) | `Validation`, `UnknownUser`, `InvalidCredentials` | cycles the session id and writes a [`SessionState`] |
//! | [`logout`](AuthManager::logout) | never | flushes the session; calling it twice is harmless |
//! | [`load_context`](AuthManager::load_context) | never | resolves the session's user into a [`RequestContext`] |
//!
//! A failed login never touches the session.

use chrono::Local;
use tower_sessions::Session;

use super::context::RequestContext;
use super::password::{hash_password, verify_password};
use super::session::{self, SessionState, LAST_LOGIN_FORMAT, SESSION_USER_ID_KEY};
use crate::error::{JournalError, Result};
use crate::models::{NewUser, User};
use crate::repo::UserRepository;
use crate::validation::{validate_login, validate_registration};

#[derive(Clone, Debug)]
pub struct AuthManager<U> {
    users: U,
}

impl<U: UserRepository> AuthManager<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    /// Create an account for `email`, storing only an Argon2id hash of `password`.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let registration = validate_registration(email, password)?;

        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            tracing::info!("registration rejected: email already registered");
            return Err(JournalError::DuplicateEmail);
        }

        let password_hash = hash_password(&registration.password)?;
        // The UNIQUE constraint still catches a concurrent registration.
        let user = self
            .users
            .insert(NewUser {
                email: registration.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "registered new user");
        Ok(user)
    }

    /// Check credentials without touching any session.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let credentials = validate_login(email, password)?;

        let Some(user) = self.users.find_by_email(&credentials.email).await? else {
            tracing::info!("login rejected: unknown email");
            return Err(JournalError::UnknownUser);
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "login rejected: wrong password");
            return Err(JournalError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticate and bind `session` to the user, recording the login time.
    pub async fn login(&self, session: &Session, email: &str, password: &str) -> Result<SessionState> {
        let user = self.authenticate(email, password).await?;

        session.cycle_id().await?;
        let state = SessionState {
            user_id: user.id,
            last_login: Local::now().format(LAST_LOGIN_FORMAT).to_string(),
        };
        session::establish(session, &state).await?;

        tracing::info!(user_id = user.id, "user logged in");
        Ok(state)
    }

    /// Clear everything stored in `session`.
    pub async fn logout(&self, session: &Session) -> Result<()> {
        if let Some(user_id) = session::user_id(session).await? {
            tracing::info!(user_id, "user logged out");
        }
        session.flush().await?;
        Ok(())
    }

    /// Resolve the user bound to `session`, if any.
    pub async fn load_context(&self, session: Session) -> Result<RequestContext> {
        let Some(user_id) = session::user_id(&session).await? else {
            return Ok(RequestContext::new(session, None));
        };

        let user = self.users.find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!(user_id, "session refers to a missing user");
            session.remove::<i64>(SESSION_USER_ID_KEY).await?;
        }
        Ok(RequestContext::new(session, user))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;
    use crate::repo::MemoryUserRepository;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn manager() -> AuthManager<MemoryUserRepository> {
        AuthManager::new(MemoryUserRepository::new())
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let auth = manager();
        let user = auth.register("A@X.com", "secret1").await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_leaves_store_unchanged() {
        let auth = manager();
        let original = auth.register("a@x.com", "secret1").await.unwrap();

        let err = auth.register("a@x.com", "another1").await.unwrap_err();
        assert!(matches!(err, JournalError::DuplicateEmail));

        // Case and surrounding whitespace do not make a new address.
        let err = auth.register(" A@x.COM ", "another1").await.unwrap_err();
        assert!(matches!(err, JournalError::DuplicateEmail));

        assert_eq!(auth.users().len(), 1);
        let stored = auth.users().find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let auth = manager();
        let err = auth.register("nope", "123").await.unwrap_err();
        let JournalError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 2);
        assert!(auth.users().is_empty());
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let auth = manager();
        let user = auth.register("a@x.com", "secret1").await.unwrap();
        let session = session();

        let state = auth.login(&session, "a@x.com", "secret1").await.unwrap();
        assert_eq!(state.user_id, user.id);
        assert_eq!(state.last_login.len(), "2024-01-01 00:00:00".len());

        assert_eq!(session::user_id(&session).await.unwrap(), Some(user.id));
        assert_eq!(
            session::last_login(&session).await.unwrap(),
            Some(state.last_login.clone())
        );

        let ctx = auth.load_context(session).await.unwrap();
        assert_eq!(ctx.require_auth().unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_establishes_nothing() {
        let auth = manager();
        auth.register("a@x.com", "secret1").await.unwrap();
        let session = session();

        let err = auth.login(&session, "a@x.com", "secret2").await.unwrap_err();
        assert!(matches!(err, JournalError::InvalidCredentials));
        assert_eq!(session::user_id(&session).await.unwrap(), None);
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let auth = manager();
        let session = session();
        let err = auth.login(&session, "ghost@x.com", "secret1").await.unwrap_err();
        assert!(matches!(err, JournalError::UnknownUser));
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let auth = manager();
        auth.register("a@x.com", "secret1").await.unwrap();
        let session = session();
        auth.login(&session, "a@x.com", "secret1").await.unwrap();

        auth.logout(&session).await.unwrap();
        auth.logout(&session).await.unwrap();

        let ctx = auth.load_context(session).await.unwrap();
        assert!(ctx.user().is_none());
        assert!(matches!(ctx.require_auth(), Err(JournalError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_context_drops_stale_user() {
        let auth = manager();
        let session = session();
        session.insert(SESSION_USER_ID_KEY, 99_i64).await.unwrap();

        let ctx = auth.load_context(session).await.unwrap();
        assert!(ctx.user().is_none());
        assert_eq!(session::user_id(ctx.session()).await.unwrap(), None);
    }
}
