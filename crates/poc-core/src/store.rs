//! The `PocStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (`poc-store-sqlite`,
//! `poc-store-remote`). The web layer depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::contact::{NewPocContact, PocContact};

/// Name of the single logical table every backend operates on.
pub const TABLE: &str = "poc_contacts";

// ─── Ordering ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
  Id,
  CreatedAt,
}

impl SortColumn {
  pub fn column_name(self) -> &'static str {
    match self {
      Self::Id => "id",
      Self::CreatedAt => "created_at",
    }
  }
}

/// Ordering for [`PocStore::select_all`]. Defaults to newest id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOrder {
  pub by:         SortColumn,
  pub descending: bool,
}

impl Default for RecordOrder {
  fn default() -> Self {
    Self { by: SortColumn::Id, descending: true }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a POC record store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PocStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. The store assigns `id` and `created_at` and
  /// returns the stored row.
  fn insert(
    &self,
    input: NewPocContact,
  ) -> impl Future<Output = Result<PocContact, Self::Error>> + Send + '_;

  /// Return every record in the given order.
  fn select_all(
    &self,
    order: RecordOrder,
  ) -> impl Future<Output = Result<Vec<PocContact>, Self::Error>> + Send + '_;

  /// Delete one record. Returns the number of rows removed; a missing id
  /// removes nothing and is not an error.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Delete every record whose id is in `ids`. Missing ids are ignored and an
  /// empty slice never reaches the backend.
  fn delete_by_ids<'a>(
    &'a self,
    ids: &'a [i64],
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;
}
