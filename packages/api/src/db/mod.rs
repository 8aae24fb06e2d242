//! # Database module: SQLite connection pool and migrations
//!
//! This module provides the SQLite pool shared by the repositories in
//! [`crate::repo`]. Unlike a process-wide singleton, the pool is built once by the
//! caller (the `web` binary, or a test) and handed to whatever needs it.
//!
//! ## Re-exports
//!
//! - [`connect`]: opens a pool for a `sqlite:` URL, creating the file if missing.
//! - [`migrate`]: applies the migrations embedded from `packages/api/migrations`.

mod pool;

pub use pool::{connect, migrate};
