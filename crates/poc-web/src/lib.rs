//! Web layer for the POC desk.
//!
//! Exposes an axum [`Router`] serving the single HTML page (intake form,
//! filters, record table, delete controls) and a small JSON API, backed by
//! any [`PocStore`].

pub mod api;
pub mod error;
pub mod handlers;
pub mod html;
pub mod page;
pub mod settings;
pub mod store;

pub use error::{Error, Result};

use axum::{
  Router,
  routing::{get, post},
};
use poc_core::store::{PocStore, RecordOrder};
use tower_http::trace::TraceLayer;

use store::StoreHandle;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store: StoreHandle<S>,
  /// Order every reload uses.
  pub order: RecordOrder,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), order: self.order }
  }
}

impl<S> AppState<S> {
  pub fn new(store: StoreHandle<S>) -> Self {
    Self { store, order: RecordOrder::default() }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PocStore + 'static,
{
  Router::new()
    .route("/",                      get(handlers::index::handler::<S>))
    .route("/contacts",              post(handlers::create::handler::<S>))
    .route("/contacts/delete",       post(handlers::delete::many::<S>))
    .route("/contacts/{id}/delete",  post(handlers::delete::one::<S>))
    .nest("/api", api::router::<S>())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
