//! Registration, login and logout.

use api::{FieldErrors, JournalError, RequestContext};
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::context::CurrentUser;
use crate::error::{recover, WebError};
use crate::flash::{self, Level};
use crate::views::{self, Page};
use crate::{csrf, AppState};

/// Body of the login and registration forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

pub async fn register_form(ctx: RequestContext) -> Result<Response, WebError> {
    render_register(&ctx, "", &FieldErrors::new()).await
}

pub async fn register(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<AccountForm>,
) -> Result<Response, WebError> {
    let session = ctx.session();
    if !csrf::verify(session, &form.csrf_token).await? {
        return render_register(&ctx, &form.email, &csrf::rejected()).await;
    }

    match state.auth.register(&form.email, &form.password).await {
        Ok(_) => {
            flash::push(session, Level::Success, "Registration successful! Please login.").await?;
            Ok(Redirect::to("/login").into_response())
        }
        Err(JournalError::Validation(errors)) => render_register(&ctx, &form.email, &errors).await,
        Err(err) => Ok(recover(session, err).await),
    }
}

pub async fn login_form(ctx: RequestContext) -> Result<Response, WebError> {
    render_login(&ctx, "", &FieldErrors::new()).await
}

pub async fn login(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<AccountForm>,
) -> Result<Response, WebError> {
    let session = ctx.session();
    if !csrf::verify(session, &form.csrf_token).await? {
        return render_login(&ctx, &form.email, &csrf::rejected()).await;
    }

    match state.auth.login(session, &form.email, &form.password).await {
        Ok(_) => {
            flash::push(session, Level::Success, "Login successful!").await?;
            Ok(Redirect::to("/home").into_response())
        }
        Err(JournalError::Validation(errors)) => render_login(&ctx, &form.email, &errors).await,
        Err(err) => Ok(recover(session, err).await),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, WebError> {
    state.auth.logout(&current.session).await?;
    flash::push(&current.session, Level::Info, "You have been logged out.").await?;
    Ok(Redirect::to("/login").into_response())
}

async fn render_login(
    ctx: &RequestContext,
    email: &str,
    errors: &FieldErrors,
) -> Result<Response, WebError> {
    let page = Page::load(ctx.session(), ctx.user()).await?;
    Ok(views::login(&page, email, errors).into_response())
}

async fn render_register(
    ctx: &RequestContext,
    email: &str,
    errors: &FieldErrors,
) -> Result<Response, WebError> {
    let page = Page::load(ctx.session(), ctx.user()).await?;
    Ok(views::register(&page, email, errors).into_response())
}
