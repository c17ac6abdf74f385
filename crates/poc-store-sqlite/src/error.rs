//! Error type for `poc-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database file or its directory could not be opened or initialised.
  #[error("cannot open store at {path:?}: {reason}")]
  Connection { path: PathBuf, reason: String },

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("core error: {0}")]
  Core(#[from] poc_core::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
