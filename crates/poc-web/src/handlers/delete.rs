//! Delete handlers — per-row and bulk.
//!
//! Both go through the store and redirect, so the table is always rebuilt
//! from what the store actually holds. The query carries the filters active
//! when the delete was posted, and the redirect keeps them.

use axum::{
  Form,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Redirect, Response},
};
use poc_core::{filter::ListFilter, store::PocStore};

use crate::{
  AppState, Error, Result,
  handlers::{Screen, respond},
  page::Notice,
  store::StoreHandle,
};

/// `POST /contacts/{id}/delete`
pub async fn one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response>
where
  S: PocStore + 'static,
{
  let filter = ListFilter::from_pairs(pairs);
  let StoreHandle::Ready(store) = &state.store else {
    return respond(&state, Screen { filter, ..Screen::default() }).await;
  };

  match store.delete_by_id(id).await {
    Ok(n) => {
      tracing::info!(id, deleted = n, "deleted POC");
      Ok(Redirect::to(&Notice::Deleted(n).location(&filter)).into_response())
    }
    Err(e) => failed(&state, e, filter).await,
  }
}

/// `POST /contacts/delete` — body carries one `id` field per checked row.
pub async fn many<S>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
  Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response>
where
  S: PocStore + 'static,
{
  let filter = ListFilter::from_pairs(pairs);
  let StoreHandle::Ready(store) = &state.store else {
    return respond(&state, Screen { filter, ..Screen::default() }).await;
  };

  let ids = fields
    .iter()
    .filter(|(k, _)| k == "id")
    .map(|(_, v)| {
      v.parse::<i64>()
        .map_err(|_| Error::BadRequest(format!("invalid record id {v:?}")))
    })
    .collect::<Result<Vec<_>>>()?;

  if ids.is_empty() {
    return Ok(Redirect::to(&Notice::NothingSelected.location(&filter)).into_response());
  }

  match store.delete_by_ids(&ids).await {
    Ok(n) => {
      tracing::info!(requested = ids.len(), deleted = n, "bulk-deleted POCs");
      Ok(Redirect::to(&Notice::Deleted(n).location(&filter)).into_response())
    }
    Err(e) => failed(&state, e, filter).await,
  }
}

async fn failed<S>(state: &AppState<S>, e: S::Error, filter: ListFilter) -> Result<Response>
where
  S: PocStore + 'static,
{
  tracing::warn!(error = %e, "delete failed");
  let screen = Screen {
    status: StatusCode::INTERNAL_SERVER_ERROR,
    delete_error: Some(e.to_string()),
    filter,
    ..Screen::default()
  };
  respond(state, screen).await
}
