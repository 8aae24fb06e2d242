//! # API crate: domain core of the journal server
//!
//! Everything the `web` crate needs to serve the journal lives here, free of any
//! HTTP or rendering concerns.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, session keys and state, [`AuthManager`] and the per-request [`RequestContext`] |
//! | [`db`] | SQLite connection pool and embedded migrations |
//! | [`error`] | [`JournalError`], the single error type returned by every operation |
//! | [`journal`] | [`JournalStore`]: owner-checked CRUD over journal entries |
//! | [`models`] | Database rows (`User`, `JournalEntry`) and insert payloads |
//! | [`repo`] | `UserRepository` / `JournalRepository` traits with SQLite and in-memory implementations |
//! | [`validation`] | Explicit form validation returning [`FieldErrors`] |
//!
//! ## Operations exposed here
//!
//! - **Authentication**: [`AuthManager::register`], [`AuthManager::login`],
//!   [`AuthManager::logout`], [`AuthManager::load_context`], [`RequestContext::require_auth`]
//! - **Journal**: [`JournalStore::list`], [`JournalStore::create`], [`JournalStore::get`],
//!   [`JournalStore::get_owned`], [`JournalStore::update`], [`JournalStore::delete`]

pub mod auth;
pub mod db;
pub mod error;
pub mod journal;
pub mod models;
pub mod repo;
pub mod validation;

pub use auth::{AuthManager, RequestContext, SessionState};
pub use error::{JournalError, Result};
pub use journal::JournalStore;
pub use models::{JournalEntry, User, UserInfo};
pub use repo::{
    JournalRepository, MemoryJournalRepository, MemoryUserRepository, SqliteJournalRepository,
    SqliteUserRepository, UserRepository,
};
pub use validation::FieldErrors;
