//! Error type for `poc-store-remote`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The service is misconfigured or unreachable at startup.
  #[error("cannot connect to remote store: {0}")]
  Connection(String),

  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("remote store answered {status}: {body}")]
  Status { status: StatusCode, body: String },

  #[error("unexpected response: {0}")]
  Decode(String),

  #[error("core error: {0}")]
  Core(#[from] poc_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
