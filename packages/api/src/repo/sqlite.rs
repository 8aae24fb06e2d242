//! SQLite-backed repositories over a shared [`SqlitePool`].

use chrono::Utc;
use sqlx::SqlitePool;

use super::{JournalRepository, UserRepository};
use crate::error::{JournalError, Result};
use crate::models::{JournalEntry, NewEntry, NewUser, User};

#[derive(Clone, Debug)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                JournalError::DuplicateEmail
            }
            other => other.into(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct SqliteJournalRepository {
    pool: SqlitePool,
}

impl SqliteJournalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl JournalRepository for SqliteJournalRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as("SELECT * FROM journal_entries WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn find(&self, id: i64) -> Result<Option<JournalEntry>> {
        let entry = sqlx::query_as("SELECT * FROM journal_entries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(entry)
    }

    async fn insert(&self, entry: NewEntry) -> Result<JournalEntry> {
        let entry = sqlx::query_as(
            "INSERT INTO journal_entries (title, content, user_id, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Option<JournalEntry>> {
        let entry = sqlx::query_as(
            "UPDATE journal_entries SET title = ?, content = ? WHERE id = ? RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
