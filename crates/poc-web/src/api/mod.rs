//! JSON API over the same store the page uses.
//!
//! Nested under `/api` by [`crate::router`].

pub mod contacts;
pub mod error;

use axum::{
  Router,
  routing::{delete, get, post},
};
use poc_core::store::PocStore;

pub use error::ApiError;

use crate::AppState;

pub fn router<S>() -> Router<AppState<S>>
where
  S: PocStore + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/delete", post(contacts::delete_many::<S>))
    .route("/contacts/{id}", delete(contacts::delete_one::<S>))
}
