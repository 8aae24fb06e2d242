//! # Server-rendered pages
//!
//! Every page is a Dioxus component rendered to a string with `dioxus_ssr` and
//! wrapped in [`Layout`]. Text and attribute values are escaped by the renderer.
//!
//! | Function | Page |
//! |----------|------|
//! | [`login`] / [`register`] | account forms |
//! | [`home`] | the user's entries and last login time |
//! | [`entry_form`] | add and edit forms |
//! | [`not_found`] / [`server_error`] | error pages |
//!
//! Pages that show flashes or forms take a [`Page`], which drains the session's
//! flash queue and carries the CSRF token.

use api::{UserInfo, User};
use axum::response::Html;
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::csrf;
use crate::flash::{self, Flash};

mod auth;
mod entries;

pub use auth::{login, register};
pub use entries::{entry_form, home};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7f7f5; color: #37352f; }
nav { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 1.5rem; background: #ffffff; border-bottom: 1px solid #e9e9e7; }
nav .brand { font-weight: 700; margin-right: auto; }
main { max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; flex-direction: column; gap: 0.5rem; }
input, textarea { padding: 0.5rem; border: 1px solid #d3d3d0; border-radius: 4px; font: inherit; }
button { align-self: flex-start; padding: 0.5rem 1rem; border: none; border-radius: 4px; background: #2383e2; color: #ffffff; cursor: pointer; }
.flash { padding: 0.625rem; border-radius: 4px; margin-bottom: 1rem; }
.flash-success { background: #edf9ee; color: #1e7b34; }
.flash-info { background: #eaf3fc; color: #1d5fa6; }
.flash-warning { background: #fdf5e3; color: #8a5a00; }
.flash-danger { background: #fdebec; color: #b3261e; }
.error { color: #b3261e; font-size: 0.8125rem; }
.entry { background: #ffffff; border: 1px solid #e9e9e7; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
.entry .meta { color: #787774; font-size: 0.8125rem; }
.entry p { white-space: pre-wrap; }
"#;

/// Per-render data shared by every page that shows flashes or forms.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
    pub user: Option<UserInfo>,
}

impl Page {
    /// Drain the flash queue and fetch the CSRF token for this session.
    pub async fn load(session: &Session, user: Option<&User>) -> api::Result<Self> {
        Ok(Self {
            flashes: flash::take(session).await?,
            csrf_token: csrf::token(session).await?,
            user: user.map(User::to_info),
        })
    }
}

fn render(title: &str, page: &Page, body: Element) -> Html<String> {
    let html = dioxus_ssr::render_element(rsx! {
        Layout {
            title: title.to_string(),
            flashes: page.flashes.clone(),
            user: page.user.clone(),
            children: body,
        }
    });
    Html(format!("<!DOCTYPE html><html lang=\"en\">{html}</html>"))
}

#[component]
fn Layout(title: String, flashes: Vec<Flash>, user: Option<UserInfo>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | Journal" }
            style { "{STYLE}" }
        }
        body {
            nav {
                span { class: "brand", "Journal" }
                if let Some(user) = &user {
                    a { href: "/home", "Home" }
                    a { href: "/add", "New entry" }
                    span { class: "user", "{user.email}" }
                    a { href: "/logout", "Logout" }
                } else {
                    a { href: "/login", "Login" }
                    a { href: "/register", "Register" }
                }
            }
            main {
                for flash in flashes {
                    div { class: "flash flash-{flash.level}", "{flash.message}" }
                }
                {children}
            }
        }
    }
}

/// Messages rendered under a form field.
#[component]
fn FieldMessages(messages: Vec<String>) -> Element {
    rsx! {
        for message in messages {
            span { class: "error", "{message}" }
        }
    }
}

/// Hidden CSRF field plus any error about it.
#[component]
fn CsrfField(token: String, messages: Vec<String>) -> Element {
    rsx! {
        input { r#type: "hidden", name: "csrf_token", value: "{token}" }
        FieldMessages { messages }
    }
}

pub fn not_found() -> Html<String> {
    render(
        "Not Found",
        &Page::default(),
        rsx! {
            h1 { "Not Found" }
            p { "The requested page does not exist." }
            a { href: "/home", "Back to your journal" }
        },
    )
}

pub fn server_error() -> Html<String> {
    render(
        "Error",
        &Page::default(),
        rsx! {
            h1 { "Something went wrong" }
            p { "The server could not complete your request. Please try again." }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_complete_documents() {
        let Html(body) = not_found();
        assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(body.contains("<head>"));
        assert!(body.contains("Not Found | Journal"));
        assert!(body.ends_with("</body></html>"));
    }
}
