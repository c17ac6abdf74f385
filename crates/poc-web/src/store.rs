//! Backend selection and the shared store handle.

use std::sync::Arc;

use poc_core::{
  contact::{NewPocContact, PocContact},
  store::{PocStore, RecordOrder},
};
use poc_store_remote::{RemoteConfig, RemoteStore};
use poc_store_sqlite::SqliteStore;
use thiserror::Error;

use crate::{
  Error,
  settings::{Backend, ServerConfig},
};

// ─── AnyStore ────────────────────────────────────────────────────────────────

/// The backend chosen by configuration.
#[derive(Clone)]
pub enum AnyStore {
  Local(SqliteStore),
  Remote(RemoteStore),
}

#[derive(Debug, Error)]
pub enum AnyStoreError {
  #[error(transparent)]
  Local(#[from] poc_store_sqlite::Error),
  #[error(transparent)]
  Remote(#[from] poc_store_remote::Error),
}

impl PocStore for AnyStore {
  type Error = AnyStoreError;

  async fn insert(&self, input: NewPocContact) -> Result<PocContact, AnyStoreError> {
    Ok(match self {
      Self::Local(s) => s.insert(input).await?,
      Self::Remote(s) => s.insert(input).await?,
    })
  }

  async fn select_all(&self, order: RecordOrder) -> Result<Vec<PocContact>, AnyStoreError> {
    Ok(match self {
      Self::Local(s) => s.select_all(order).await?,
      Self::Remote(s) => s.select_all(order).await?,
    })
  }

  async fn delete_by_id(&self, id: i64) -> Result<u64, AnyStoreError> {
    Ok(match self {
      Self::Local(s) => s.delete_by_id(id).await?,
      Self::Remote(s) => s.delete_by_id(id).await?,
    })
  }

  async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, AnyStoreError> {
    Ok(match self {
      Self::Local(s) => s.delete_by_ids(ids).await?,
      Self::Remote(s) => s.delete_by_ids(ids).await?,
    })
  }
}

/// Open the configured backend. Every failure is [`Error::Connection`].
pub async fn connect(config: &ServerConfig) -> Result<AnyStore, Error> {
  match config.backend {
    Backend::Local => SqliteStore::open(&config.store_path)
      .await
      .map(AnyStore::Local)
      .map_err(|e| Error::Connection(e.to_string())),
    Backend::Remote => {
      let (Some(url), Some(key)) = (&config.remote_url, &config.remote_key) else {
        return Err(Error::Connection(
          "remote backend needs remote_url and remote_key (POC_REMOTE_URL / POC_REMOTE_KEY)"
            .into(),
        ));
      };
      RemoteStore::connect(RemoteConfig { url: url.clone(), key: key.clone() })
        .await
        .map(AnyStore::Remote)
        .map_err(|e| Error::Connection(e.to_string()))
    }
  }
}

// ─── Handle ──────────────────────────────────────────────────────────────────

/// The store as seen by handlers: either open, or the reason it is not.
pub enum StoreHandle<S> {
  Ready(Arc<S>),
  Unavailable(Arc<str>),
}

impl<S> Clone for StoreHandle<S> {
  fn clone(&self) -> Self {
    match self {
      Self::Ready(s) => Self::Ready(Arc::clone(s)),
      Self::Unavailable(reason) => Self::Unavailable(Arc::clone(reason)),
    }
  }
}

impl<S> StoreHandle<S> {
  pub fn ready(store: S) -> Self {
    Self::Ready(Arc::new(store))
  }

  pub fn unavailable(reason: impl Into<Arc<str>>) -> Self {
    Self::Unavailable(reason.into())
  }
}
