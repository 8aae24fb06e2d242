//! Journal entry pages. Every handler here requires a logged-in user.

use api::auth::session;
use api::{FieldErrors, JournalError};
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::context::{CurrentUser, EntryId};
use crate::error::{recover, WebError};
use crate::flash::{self, Level};
use crate::views::{self, Page};
use crate::{csrf, AppState};

/// Body of the add and edit forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryForm {
    pub title: String,
    pub content: String,
    pub csrf_token: String,
}

pub async fn home(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, WebError> {
    let entries = state.journal.list(current.user.id).await?;
    let last_login = session::last_login(&current.session).await?;
    let page = Page::load(&current.session, Some(&current.user)).await?;
    Ok(views::home(&page, &entries, last_login.as_deref()).into_response())
}

pub async fn add_form(current: CurrentUser) -> Result<Response, WebError> {
    render_form(&current, None, "", "", &FieldErrors::new()).await
}

pub async fn add(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<EntryForm>,
) -> Result<Response, WebError> {
    if !csrf::verify(&current.session, &form.csrf_token).await? {
        return render_form(&current, None, &form.title, &form.content, &csrf::rejected()).await;
    }

    match state
        .journal
        .create(current.user.id, &form.title, &form.content)
        .await
    {
        Ok(_) => {
            flash::push(&current.session, Level::Success, "Journal entry added!").await?;
            Ok(Redirect::to("/home").into_response())
        }
        Err(JournalError::Validation(errors)) => {
            render_form(&current, None, &form.title, &form.content, &errors).await
        }
        Err(err) => Ok(recover(&current.session, err).await),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    EntryId(entry_id): EntryId,
) -> Result<Response, WebError> {
    match state.journal.get_owned(entry_id, current.user.id).await {
        Ok(entry) => {
            render_form(
                &current,
                Some(entry.id),
                &entry.title,
                &entry.content,
                &FieldErrors::new(),
            )
            .await
        }
        Err(err) => Ok(recover(&current.session, err).await),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    current: CurrentUser,
    EntryId(entry_id): EntryId,
    Form(form): Form<EntryForm>,
) -> Result<Response, WebError> {
    if let Err(err) = state.journal.get_owned(entry_id, current.user.id).await {
        return Ok(recover(&current.session, err).await);
    }
    if !csrf::verify(&current.session, &form.csrf_token).await? {
        return render_form(
            &current,
            Some(entry_id),
            &form.title,
            &form.content,
            &csrf::rejected(),
        )
        .await;
    }

    match state
        .journal
        .update(entry_id, current.user.id, &form.title, &form.content)
        .await
    {
        Ok(_) => {
            flash::push(&current.session, Level::Success, "Journal entry updated!").await?;
            Ok(Redirect::to("/home").into_response())
        }
        Err(JournalError::Validation(errors)) => {
            render_form(&current, Some(entry_id), &form.title, &form.content, &errors).await
        }
        Err(err) => Ok(recover(&current.session, err).await),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    EntryId(entry_id): EntryId,
) -> Result<Response, WebError> {
    match state.journal.delete(entry_id, current.user.id).await {
        Ok(()) => {
            flash::push(&current.session, Level::Info, "Journal entry deleted.").await?;
            Ok(Redirect::to("/home").into_response())
        }
        Err(err) => Ok(recover(&current.session, err).await),
    }
}

async fn render_form(
    current: &CurrentUser,
    entry_id: Option<i64>,
    title: &str,
    content: &str,
    errors: &FieldErrors,
) -> Result<Response, WebError> {
    let page = Page::load(&current.session, Some(&current.user)).await?;
    Ok(views::entry_form(&page, entry_id, title, content, errors).into_response())
}
