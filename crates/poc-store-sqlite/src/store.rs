//! [`SqliteStore`] — the SQLite implementation of [`PocStore`].

use std::path::{Path, PathBuf};

use chrono::{SubsecRound as _, Utc};
use poc_core::{
  contact::{NewPocContact, PocContact},
  store::{PocStore, RecordOrder},
};

use crate::{
  Error, Result,
  encode::{CONTACT_COLUMNS, RawContact, encode_dt, encode_schedule, encode_status},
  schema::SCHEMA,
};

/// Where the local store lives unless configured otherwise.
pub const DEFAULT_PATH: &str = "data/poc_contacts.db";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A POC store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone talks to the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, creating its parent directory and
  /// the schema if they do not exist yet.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let connection_err = |reason: String| Error::Connection {
      path: path.clone(),
      reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| connection_err(e.to_string()))?;
    }

    let conn = tokio_rusqlite::Connection::open(&path)
      .await
      .map_err(|e| connection_err(e.to_string()))?;
    let store = Self { conn };
    store
      .init_schema()
      .await
      .map_err(|e| connection_err(e.to_string()))?;

    tracing::debug!(?path, "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(|e| Error::Connection {
        path:   PathBuf::from(":memory:"),
        reason: e.to_string(),
      })?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PocStore impl ───────────────────────────────────────────────────────────

impl PocStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewPocContact) -> Result<PocContact> {
    let created_at = Utc::now().trunc_subsecs(6);

    let city           = input.city.clone();
    let institute_name = input.institute_name.clone();
    let poc_name       = input.poc_name.clone();
    let mobile         = input.mobile.clone();
    let email          = input.email.clone();
    let status_str     = encode_status(input.status);
    let remarks        = input.remarks.clone();
    let schedule_str   = encode_schedule(input.meeting_schedule);
    let created_str    = encode_dt(created_at);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO poc_contacts (
             city, institute_name, poc_name, mobile, email,
             status, remarks, meeting_schedule, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            city,
            institute_name,
            poc_name,
            mobile,
            email,
            status_str,
            remarks,
            schedule_str,
            created_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_contact(id, created_at))
  }

  async fn select_all(&self, order: RecordOrder) -> Result<Vec<PocContact>> {
    let direction = if order.descending { "DESC" } else { "ASC" };
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM poc_contacts
       ORDER BY {column} {direction}, id {direction}",
      column = order.by.column_name(),
    );

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn delete_by_id(&self, id: i64) -> Result<u64> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM poc_contacts WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(removed as u64)
  }

  async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64> {
    if ids.is_empty() {
      return Ok(0);
    }

    let ids = ids.to_vec();
    let removed = self
      .conn
      .call(move |conn| {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM poc_contacts WHERE id IN ({placeholders})");
        Ok(conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?)
      })
      .await?;
    Ok(removed as u64)
  }
}
