//! Error types and axum `IntoResponse` implementation for the HTML routes.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::html::RenderError;

#[derive(Debug, Error)]
pub enum Error {
  /// The store could not be opened or reached at startup.
  #[error("store connection failed: {0}")]
  Connection(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Render(#[from] RenderError),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
      Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, self.to_string()).into_response()
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
