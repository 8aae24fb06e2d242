//! Route handlers.

use axum::response::{Redirect, Response};

pub mod auth;
pub mod entries;

pub async fn index() -> Redirect {
    Redirect::to("/login")
}

pub async fn not_found() -> Response {
    crate::error::not_found()
}
