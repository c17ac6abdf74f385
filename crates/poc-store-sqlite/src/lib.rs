//! SQLite backend for the POC desk.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. That thread also serialises
//! every statement issued through the shared connection.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_PATH, SqliteStore};

#[cfg(test)]
mod tests;
