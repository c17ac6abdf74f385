//! `GET /` — the page itself.

use axum::{
  extract::{Query, State},
  response::Response,
};
use poc_core::{filter::ListFilter, store::PocStore};

use crate::{
  AppState, Result,
  handlers::{Screen, respond},
  page::Notice,
};

/// Filters come from repeated `city` / `institute` / `status` pairs; a
/// `notice` pair shows the confirmation left by a redirect.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response>
where
  S: PocStore + 'static,
{
  let screen = Screen {
    notice: Notice::from_pairs(&pairs),
    filter: ListFilter::from_pairs(pairs.iter().map(|(k, v)| (k, v))),
    ..Screen::default()
  };
  respond(&state, screen).await
}
