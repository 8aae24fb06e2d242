//! # Repositories: explicit persistence interfaces
//!
//! The journal never talks to the database directly. [`crate::AuthManager`] goes
//! through a [`UserRepository`] and [`crate::JournalStore`] through a
//! [`JournalRepository`], so the same logic runs against SQLite in production and
//! an in-memory store in tests.
//!
//! | Trait | SQLite | In-memory |
//! |-------|--------|-----------|
//! | [`UserRepository`] | [`SqliteUserRepository`] | [`MemoryUserRepository`] |
//! | [`JournalRepository`] | [`SqliteJournalRepository`] | [`MemoryJournalRepository`] |
//!
//! Repositories do no ownership checks; that is [`crate::JournalStore`]'s job.
//! The one rule they do enforce is email uniqueness: inserting a taken email
//! yields [`JournalError::DuplicateEmail`](crate::JournalError::DuplicateEmail).

use std::future::Future;

use crate::error::Result;
use crate::models::{JournalEntry, NewEntry, NewUser, User};

mod memory;
mod sqlite;

pub use memory::{MemoryJournalRepository, MemoryUserRepository};
pub use sqlite::{SqliteJournalRepository, SqliteUserRepository};

/// Storage for user accounts.
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<User>>> + Send;

    /// Look up by an already-normalized email.
    fn find_by_email(&self, email: &str) -> impl Future<Output = Result<Option<User>>> + Send;

    fn insert(&self, user: NewUser) -> impl Future<Output = Result<User>> + Send;
}

/// Storage for journal entries.
pub trait JournalRepository: Send + Sync {
    /// Entries owned by `user_id`, oldest first.
    fn list_for_user(&self, user_id: i64)
        -> impl Future<Output = Result<Vec<JournalEntry>>> + Send;

    fn find(&self, id: i64) -> impl Future<Output = Result<Option<JournalEntry>>> + Send;

    fn insert(&self, entry: NewEntry) -> impl Future<Output = Result<JournalEntry>> + Send;

    /// Overwrite title and content. `None` if the entry does not exist.
    fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Option<JournalEntry>>> + Send;

    /// Remove an entry. Returns whether a row was deleted.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool>> + Send;
}
