//! # Web crate: the journal's HTTP server
//!
//! Wires the domain types from the `api` crate into an axum [`Router`]:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | `config`-based settings: defaults, `config.toml`, `JOURNAL_*` env vars |
//! | [`context`] | axum extractors producing the per-request [`api::RequestContext`] and the logged-in [`context::CurrentUser`] |
//! | [`flash`] | One-shot flash messages kept in the session |
//! | [`csrf`] | Per-session CSRF token for every form |
//! | [`error`] | Maps [`api::JournalError`] onto flash + redirect, 404 and 500 responses |
//! | [`handlers`] | Route handlers |
//! | [`views`] | Server-rendered pages built with Dioxus SSR |
//!
//! ## Routes
//!
//! | Method | Path | Login | Handler |
//! |--------|------|-------|---------|
//! | GET | `/` | no | redirect to `/login` |
//! | GET, POST | `/register` | no | [`handlers::auth::register_form`], [`handlers::auth::register`] |
//! | GET, POST | `/login` | no | [`handlers::auth::login_form`], [`handlers::auth::login`] |
//! | GET | `/home` | yes | [`handlers::entries::home`] |
//! | GET, POST | `/add` | yes | [`handlers::entries::add_form`], [`handlers::entries::add`] |
//! | GET, POST | `/edit/{entry_id}` | yes | [`handlers::entries::edit_form`], [`handlers::entries::edit`] |
//! | GET | `/delete/{entry_id}` | yes | [`handlers::entries::delete`] |
//! | GET | `/logout` | yes | [`handlers::auth::logout`] |

use api::{AuthManager, JournalStore, SqliteJournalRepository, SqliteUserRepository};
use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

pub mod context;
pub mod csrf;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod settings;
pub mod views;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthManager<SqliteUserRepository>,
    pub journal: JournalStore<SqliteJournalRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            auth: AuthManager::new(SqliteUserRepository::new(pool.clone())),
            journal: JournalStore::new(SqliteJournalRepository::new(pool)),
        }
    }
}

/// Session layer configured from [`settings::Session`].
pub fn session_layer<S>(store: S, settings: &settings::Session) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_secure(settings.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(settings.expiry)))
}

/// Build the application router.
pub fn router<S>(state: AppState, session_layer: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    use handlers::{auth, entries};

    Router::new()
        .route("/", get(handlers::index))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/home", get(entries::home))
        .route("/add", get(entries::add_form).post(entries::add))
        .route("/edit/{entry_id}", get(entries::edit_form).post(entries::edit))
        .route("/delete/{entry_id}", get(entries::delete))
        .fallback(handlers::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
