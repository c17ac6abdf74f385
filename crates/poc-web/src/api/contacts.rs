//! Handlers for `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/contacts` | Optional repeated `city`, `institute`, `status` |
//! | `POST`   | `/contacts` | Body: [`NewPocContact`]; returns 201 + stored record |
//! | `DELETE` | `/contacts/{id}` | `{"deleted": n}` |
//! | `POST`   | `/contacts/delete` | Body: `{"ids": [..]}`; `{"deleted": n}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use poc_core::{
  contact::{NewPocContact, PocContact},
  filter::ListFilter,
  store::PocStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, api::ApiError, store::StoreHandle};

fn ready<S>(state: &AppState<S>) -> Result<&Arc<S>, ApiError> {
  match &state.store {
    StoreHandle::Ready(store) => Ok(store),
    StoreHandle::Unavailable(reason) => Err(ApiError::Unavailable(reason.to_string())),
  }
}

fn store_error(e: impl std::error::Error + Send + Sync + 'static) -> ApiError {
  tracing::warn!(error = %e, "store operation failed");
  ApiError::Store(Box::new(e))
}

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub deleted: u64,
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /contacts[?city=..][&institute=..][&status=..]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<PocContact>>, ApiError>
where
  S: PocStore + 'static,
{
  let filter = ListFilter::from_pairs(pairs);
  let records = ready(&state)?
    .select_all(state.order)
    .await
    .map_err(store_error)?;
  Ok(Json(records.into_iter().filter(|r| filter.matches(r)).collect()))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewPocContact>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PocStore + 'static,
{
  let Json(input) = body?;
  let contact = ready(&state)?.insert(input).await.map_err(store_error)?;
  tracing::info!(id = contact.id, "saved POC");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Deleted>, ApiError>
where
  S: PocStore + 'static,
{
  let deleted = ready(&state)?.delete_by_id(id).await.map_err(store_error)?;
  Ok(Json(Deleted { deleted }))
}

#[derive(Debug, Deserialize)]
pub struct DeleteBody {
  pub ids: Vec<i64>,
}

/// `POST /contacts/delete` — body: `{"ids":[1,2,3]}`
pub async fn delete_many<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<DeleteBody>, JsonRejection>,
) -> Result<Json<Deleted>, ApiError>
where
  S: PocStore + 'static,
{
  let Json(DeleteBody { ids }) = body?;
  let deleted = ready(&state)?
    .delete_by_ids(&ids)
    .await
    .map_err(store_error)?;
  Ok(Json(Deleted { deleted }))
}
