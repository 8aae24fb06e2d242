use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `journal_entries` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owning user. Only this user may read, edit or delete the entry.
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Insert payload for a new entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}
