//! Journal pages: the entry list and the add/edit form.

use api::{FieldErrors, JournalEntry};
use axum::response::Html;
use dioxus::prelude::*;

use super::{render, CsrfField, FieldMessages, Page};
use crate::csrf;

/// Display-ready view of one entry.
#[derive(Debug, Clone, PartialEq)]
struct EntryRow {
    id: i64,
    title: String,
    content: String,
    created: String,
    edit_href: String,
    delete_href: String,
}

impl From<&JournalEntry> for EntryRow {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            content: entry.content.clone(),
            created: entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            edit_href: format!("/edit/{}", entry.id),
            delete_href: format!("/delete/{}", entry.id),
        }
    }
}

pub fn home(page: &Page, entries: &[JournalEntry], last_login: Option<&str>) -> Html<String> {
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    let last_login = last_login.map(str::to_string);

    render(
        "Home",
        page,
        rsx! {
            h1 { "Your journal" }
            if let Some(last_login) = last_login {
                p { class: "last-login", "Last login: {last_login}" }
            }
            a { href: "/add", "Add a new entry" }
            EntryList { rows }
        },
    )
}

#[component]
fn EntryList(rows: Vec<EntryRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "empty", "You have no journal entries yet." }
        };
    }

    rsx! {
        section { class: "entries",
            for row in rows {
                article { key: "{row.id}", class: "entry",
                    h2 { "{row.title}" }
                    span { class: "meta", "{row.created}" }
                    p { "{row.content}" }
                    a { href: "{row.edit_href}", "Edit" }
                    " "
                    a { href: "{row.delete_href}", "Delete" }
                }
            }
        }
    }
}

/// Add form when `entry_id` is `None`, edit form otherwise.
pub fn entry_form(
    page: &Page,
    entry_id: Option<i64>,
    title: &str,
    content: &str,
    errors: &FieldErrors,
) -> Html<String> {
    let (page_title, action) = match entry_id {
        Some(id) => ("Edit entry", format!("/edit/{id}")),
        None => ("New entry", "/add".to_string()),
    };

    render(
        page_title,
        page,
        rsx! {
            h1 { "{page_title}" }
            form { method: "post", action: "{action}",
                CsrfField { token: page.csrf_token.clone(), messages: errors.for_field(csrf::FIELD) }
                label { r#for: "title", "Title" }
                input { id: "title", r#type: "text", name: "title", value: "{title}" }
                FieldMessages { messages: errors.for_field("title") }
                label { r#for: "content", "Content" }
                textarea { id: "content", name: "content", rows: "10", "{content}" }
                FieldMessages { messages: errors.for_field("content") }
                button { r#type: "submit", "Save" }
            }
            a { href: "/home", "Cancel" }
        },
    )
}
