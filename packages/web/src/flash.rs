//! One-shot messages shown by the next rendered page.

use std::fmt;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const FLASHES_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

/// Queue a message for the next page render.
pub async fn push(session: &Session, level: Level, message: impl Into<String>) -> api::Result<()> {
    let mut flashes: Vec<Flash> = session.get(FLASHES_KEY).await?.unwrap_or_default();
    flashes.push(Flash {
        level,
        message: message.into(),
    });
    session.insert(FLASHES_KEY, flashes).await?;
    Ok(())
}

/// Remove and return every queued message.
pub async fn take(session: &Session) -> api::Result<Vec<Flash>> {
    Ok(session
        .remove::<Vec<Flash>>(FLASHES_KEY)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_flashes_are_shown_once() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        push(&session, Level::Success, "Saved").await.unwrap();
        push(&session, Level::Danger, "But also this").await.unwrap();

        let flashes = take(&session).await.unwrap();
        assert_eq!(flashes.len(), 2);
        assert_eq!(flashes[0].message, "Saved");
        assert_eq!(flashes[1].level.to_string(), "danger");

        assert!(take(&session).await.unwrap().is_empty());
    }
}
