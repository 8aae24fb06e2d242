//! # User model for registered accounts
//!
//! Defines the two representations of a journal user:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table. It derives [`sqlx::FromRow`] so it can
//! be loaded directly from queries:
//!
//! - `id`: integer primary key.
//! - `email`: trimmed, lower-cased and unique.
//! - `password_hash`: Argon2id PHC string. Never logged, never rendered.
//! - `created_at`: registration time.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The subset handed to views. It omits the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user record from the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// User information safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
}

/// Insert payload for a new account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
