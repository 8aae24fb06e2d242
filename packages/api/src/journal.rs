//! # Journal Store: owner-checked entry management
//!
//! [`JournalStore`] wraps a [`JournalRepository`] and is the only way the web layer
//! touches entries. Every mutating call takes the acting user's id and refuses to
//! act on an entry owned by someone else:
//!
//! | Method | Fails with |
//! |--------|-----------|
//! | [`list`](JournalStore::list) | never |
//! | [`create`](JournalStore::create) | `Validation` |
//! | [`get`](JournalStore::get) | `NotFound` |
//! | [`get_owned`](JournalStore::get_owned) | `NotFound`, `Forbidden` |
//! | [`update`](JournalStore::update) | `NotFound`, `Forbidden`, `Validation` |
//! | [`delete`](JournalStore::delete) | `NotFound`, `Forbidden` |
//!
//! Existence is checked before ownership, so a missing id is always `NotFound`
//! regardless of who asks.

use crate::error::{JournalError, Result};
use crate::models::{JournalEntry, NewEntry};
use crate::repo::JournalRepository;
use crate::validation::validate_entry;

#[derive(Clone, Debug)]
pub struct JournalStore<J> {
    entries: J,
}

impl<J: JournalRepository> JournalStore<J> {
    pub fn new(entries: J) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &J {
        &self.entries
    }

    /// All entries owned by `user_id`, in insertion order.
    pub async fn list(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        self.entries.list_for_user(user_id).await
    }

    pub async fn create(&self, user_id: i64, title: &str, content: &str) -> Result<JournalEntry> {
        let draft = validate_entry(title, content)?;
        let entry = self
            .entries
            .insert(NewEntry {
                user_id,
                title: draft.title,
                content: draft.content,
            })
            .await?;
        tracing::info!(user_id, entry_id = entry.id, "journal entry created");
        Ok(entry)
    }

    pub async fn get(&self, entry_id: i64) -> Result<JournalEntry> {
        self.entries
            .find(entry_id)
            .await?
            .ok_or(JournalError::NotFound(entry_id))
    }

    /// Fetch an entry for `user_id`, refusing entries owned by anyone else.
    pub async fn get_owned(&self, entry_id: i64, user_id: i64) -> Result<JournalEntry> {
        let entry = self.get(entry_id).await?;
        if !entry.is_owned_by(user_id) {
            tracing::warn!(user_id, entry_id, owner = entry.user_id, "entry access denied");
            return Err(JournalError::Forbidden(entry_id));
        }
        Ok(entry)
    }

    pub async fn update(
        &self,
        entry_id: i64,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<JournalEntry> {
        self.get_owned(entry_id, user_id).await?;
        let draft = validate_entry(title, content)?;

        let entry = self
            .entries
            .update(entry_id, &draft.title, &draft.content)
            .await?
            .ok_or(JournalError::NotFound(entry_id))?;
        tracing::info!(user_id, entry_id, "journal entry updated");
        Ok(entry)
    }

    pub async fn delete(&self, entry_id: i64, user_id: i64) -> Result<()> {
        self.get_owned(entry_id, user_id).await?;
        if !self.entries.delete(entry_id).await? {
            return Err(JournalError::NotFound(entry_id));
        }
        tracing::info!(user_id, entry_id, "journal entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MemoryJournalRepository;

    const ALICE: i64 = 1;
    const BOB: i64 = 2;

    fn store() -> JournalStore<MemoryJournalRepository> {
        JournalStore::new(MemoryJournalRepository::new())
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let journal = store();
        let created = journal.create(ALICE, "Day 1", "Went well").await.unwrap();

        let fetched = journal.get(created.id).await.unwrap();
        assert_eq!(fetched.title, "Day 1");
        assert_eq!(fetched.content, "Went well");
        assert_eq!(fetched.user_id, ALICE);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let journal = store();

        for (title, content) in [("", "body"), ("title", ""), ("  ", "\n\t")] {
            let err = journal.create(ALICE, title, content).await.unwrap_err();
            assert!(matches!(err, JournalError::Validation(_)));
        }
        assert!(journal.entries().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_per_user_in_insertion_order() {
        let journal = store();
        journal.create(ALICE, "first", "a").await.unwrap();
        journal.create(BOB, "bob", "b").await.unwrap();
        journal.create(ALICE, "second", "c").await.unwrap();

        let titles: Vec<String> = journal
            .list(ALICE)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(journal.list(BOB).await.unwrap().len(), 1);
        assert!(journal.list(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_entry() {
        let journal = store();
        assert!(matches!(journal.get(5).await, Err(JournalError::NotFound(5))));
        assert!(matches!(
            journal.update(5, ALICE, "t", "c").await,
            Err(JournalError::NotFound(5))
        ));
        assert!(matches!(
            journal.delete(5, ALICE).await,
            Err(JournalError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_other_users_entries_are_forbidden() {
        let journal = store();
        let entry = journal.create(BOB, "Bob's", "private").await.unwrap();

        assert!(matches!(
            journal.get_owned(entry.id, ALICE).await,
            Err(JournalError::Forbidden(_))
        ));
        assert!(matches!(
            journal.update(entry.id, ALICE, "hacked", "hacked").await,
            Err(JournalError::Forbidden(_))
        ));
        assert!(matches!(
            journal.delete(entry.id, ALICE).await,
            Err(JournalError::Forbidden(_))
        ));
        assert!(journal.list(ALICE).await.unwrap().is_empty());

        let untouched = journal.get(entry.id).await.unwrap();
        assert_eq!(untouched.title, "Bob's");
        assert_eq!(untouched.content, "private");
    }

    #[tokio::test]
    async fn test_update_and_delete_by_owner() {
        let journal = store();
        let entry = journal.create(ALICE, "Day 1", "Went well").await.unwrap();

        let updated = journal
            .update(entry.id, ALICE, "Day 1", "Went great")
            .await
            .unwrap();
        assert_eq!(updated.content, "Went great");
        assert_eq!(updated.created_at, entry.created_at);

        let err = journal.update(entry.id, ALICE, "Day 1", " ").await.unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
        assert_eq!(journal.get(entry.id).await.unwrap().content, "Went great");

        journal.delete(entry.id, ALICE).await.unwrap();
        assert!(journal.list(ALICE).await.unwrap().is_empty());
        assert!(matches!(
            journal.delete(entry.id, ALICE).await,
            Err(JournalError::NotFound(_))
        ));
    }
}
