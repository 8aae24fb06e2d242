use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::{JournalRepository, UserRepository};
use crate::error::{JournalError, Result};
use crate::models::{JournalEntry, NewEntry, NewUser, User};

#[derive(Debug)]
struct Table<T> {
    last_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> MutexGuard<'_, Table<T>> {
    // A panic while holding the lock cannot leave a row half-written.
    table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory UserRepository for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<Table<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.users).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(lock(&self.users).rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(lock(&self.users)
            .rows
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut table = lock(&self.users);
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(JournalError::DuplicateEmail);
        }
        let user = User {
            id: table.next_id(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        table.rows.push(user.clone());
        Ok(user)
    }
}

/// In-memory JournalRepository for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryJournalRepository {
    entries: Arc<Mutex<Table<JournalEntry>>>,
}

impl MemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries across all users.
    pub fn len(&self) -> usize {
        lock(&self.entries).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JournalRepository for MemoryJournalRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        Ok(lock(&self.entries)
            .rows
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Option<JournalEntry>> {
        Ok(lock(&self.entries).rows.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, entry: NewEntry) -> Result<JournalEntry> {
        let mut table = lock(&self.entries);
        let entry = JournalEntry {
            id: table.next_id(),
            title: entry.title,
            content: entry.content,
            user_id: entry.user_id,
            created_at: Utc::now(),
        };
        table.rows.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Option<JournalEntry>> {
        let mut table = lock(&self.entries);
        Ok(table.rows.iter_mut().find(|e| e.id == id).map(|entry| {
            entry.title = title.to_string();
            entry.content = content.to_string();
            entry.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = lock(&self.entries);
        let before = table.rows.len();
        table.rows.retain(|e| e.id != id);
        Ok(table.rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_repositories_start_empty() {
        let users = MemoryUserRepository::default();
        let entries = MemoryJournalRepository::default();
        assert!(users.is_empty());
        assert!(entries.is_empty());
        assert!(users.find_by_id(1).await.unwrap().is_none());
        assert!(entries.list_for_user(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_users_unique_email() {
        let users = MemoryUserRepository::new();
        let first = users
            .insert(NewUser {
                email: "a@x.com".into(),
                password_hash: "h".into(),
            })
            .await
            .unwrap();
        assert_eq!(first.id, 1);

        let err = users
            .insert(NewUser {
                email: "a@x.com".into(),
                password_hash: "other".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::DuplicateEmail));
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let entries = MemoryJournalRepository::new();
        let first = entries
            .insert(NewEntry {
                user_id: 1,
                title: "a".into(),
                content: "b".into(),
            })
            .await
            .unwrap();
        assert!(entries.delete(first.id).await.unwrap());

        let second = entries
            .insert(NewEntry {
                user_id: 1,
                title: "c".into(),
                content: "d".into(),
            })
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
        assert!(entries.find(first.id).await.unwrap().is_none());
    }
}
