//! Login and registration pages.

use api::FieldErrors;
use axum::response::Html;
use dioxus::prelude::*;

use super::{render, CsrfField, FieldMessages, Page};
use crate::csrf;

pub fn login(page: &Page, email: &str, errors: &FieldErrors) -> Html<String> {
    render(
        "Login",
        page,
        rsx! {
            h1 { "Login" }
            AccountForm {
                action: "/login",
                submit: "Login",
                password_hint: "Password",
                csrf_token: page.csrf_token.clone(),
                email: email.to_string(),
                errors: errors.clone(),
            }
            p {
                "No account yet? "
                a { href: "/register", "Register" }
            }
        },
    )
}

pub fn register(page: &Page, email: &str, errors: &FieldErrors) -> Html<String> {
    render(
        "Register",
        page,
        rsx! {
            h1 { "Create an account" }
            AccountForm {
                action: "/register",
                submit: "Register",
                password_hint: "Password (at least 6 characters)",
                csrf_token: page.csrf_token.clone(),
                email: email.to_string(),
                errors: errors.clone(),
            }
            p {
                "Already registered? "
                a { href: "/login", "Login" }
            }
        },
    )
}

#[component]
fn AccountForm(
    action: String,
    submit: String,
    password_hint: String,
    csrf_token: String,
    email: String,
    errors: FieldErrors,
) -> Element {
    rsx! {
        form { method: "post", action: "{action}",
            CsrfField { token: csrf_token, messages: errors.for_field(csrf::FIELD) }
            label { r#for: "email", "Email" }
            input { id: "email", r#type: "email", name: "email", value: "{email}" }
            FieldMessages { messages: errors.for_field("email") }
            label { r#for: "password", "Password" }
            input { id: "password", r#type: "password", name: "password", placeholder: "{password_hint}" }
            FieldMessages { messages: errors.for_field("password") }
            button { r#type: "submit", "{submit}" }
        }
    }
}
