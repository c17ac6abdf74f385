//! Error types for `poc-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown POC status: {0:?}")]
  UnknownStatus(String),

  #[error("invalid meeting date {0:?} (expected YYYY-MM-DD)")]
  InvalidDate(String),

  #[error("invalid meeting time {0:?} (expected HH:MM or HH:MM:SS)")]
  InvalidTime(String),

  #[error("invalid meeting schedule {0:?}")]
  InvalidSchedule(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
