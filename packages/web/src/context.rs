//! # Request context extractors
//!
//! Handlers never reach for ambient session state. They ask for one of:
//!
//! - [`RequestContext`]: the session plus the user it is bound to, if any.
//! - [`CurrentUser`]: same, but the request is rejected unless someone is
//!   logged in. The rejection flashes a notice and redirects to `/login`.
//!
//! [`EntryId`] reads the `{entry_id}` path segment. Anything that is not an
//! `i64` gets the 404 page.

use api::{RequestContext, User};
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;

use crate::error::{self, recover, WebError};
use crate::AppState;

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        state
            .auth
            .load_context(session)
            .await
            .map_err(|e| WebError::from(e).into_response())
    }
}

/// A logged-in user and their session.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session: Session,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let ctx = RequestContext::from_request_parts(parts, state).await?;

        let user = match ctx.require_auth() {
            Ok(user) => user.clone(),
            Err(err) => return Err(recover(ctx.session(), err).await),
        };

        Ok(CurrentUser {
            user,
            session: ctx.session().clone(),
        })
    }
}

/// Journal entry id taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for EntryId {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(entry_id)) => Ok(EntryId(entry_id)),
            Err(rejection) => {
                tracing::debug!(%rejection, "unparseable entry id");
                Err(error::not_found())
            }
        }
    }
}
