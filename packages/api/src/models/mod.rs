//! Data models for the application.

mod entry;
mod user;

pub use entry::{JournalEntry, NewEntry};
pub use user::{NewUser, User, UserInfo};
