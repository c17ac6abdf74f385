//! [`RemoteStore`] — the hosted-table implementation of [`PocStore`].
//!
//! | Operation | Request |
//! |-----------|---------|
//! | insert | `POST /rest/v1/poc_contacts` (`Prefer: return=representation`) |
//! | select_all | `GET /rest/v1/poc_contacts?select=*&order=<col>.<desc\|asc>` |
//! | delete_by_id | `DELETE /rest/v1/poc_contacts?id=eq.<id>` |
//! | delete_by_ids | `DELETE /rest/v1/poc_contacts?id=in.(<ids>)` |

use poc_core::{
  contact::{NewPocContact, PocContact},
  store::{PocStore, RecordOrder, TABLE},
};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::IgnoredAny;

use crate::{Error, Result, row::RemoteRow};

/// Connection settings. Both values are secrets and come from the
/// environment or a config file, never from source.
#[derive(Clone)]
pub struct RemoteConfig {
  /// Service base URL, e.g. `https://abcd.supabase.co`.
  pub url: String,
  /// API key sent as both `apikey` and bearer token.
  pub key: String,
}

impl std::fmt::Debug for RemoteConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RemoteConfig")
      .field("url", &self.url)
      .field("key", &"<redacted>")
      .finish()
  }
}

/// A POC store backed by a remote table.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct RemoteStore {
  client:   Client,
  endpoint: Url,
  key:      String,
}

impl RemoteStore {
  /// Validate `config`, build the client, and check the table answers.
  ///
  /// Every failure here is [`Error::Connection`]; the table is never
  /// created on the caller's behalf.
  pub async fn connect(config: RemoteConfig) -> Result<Self> {
    let base = Url::parse(config.url.trim())
      .map_err(|e| Error::Connection(format!("invalid service URL: {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
      return Err(Error::Connection(format!(
        "unsupported URL scheme {:?}",
        base.scheme()
      )));
    }
    if config.key.trim().is_empty() {
      return Err(Error::Connection("access key is empty".into()));
    }

    let endpoint = Url::parse(&format!(
      "{}/rest/v1/{TABLE}",
      base.as_str().trim_end_matches('/')
    ))
    .map_err(|e| Error::Connection(e.to_string()))?;

    let client = Client::builder()
      .build()
      .map_err(|e| Error::Connection(format!("failed to build HTTP client: {e}")))?;

    let store = Self { client, endpoint, key: config.key.trim().to_owned() };
    store.probe().await?;
    tracing::debug!(endpoint = %store.endpoint, "connected to remote store");
    Ok(store)
  }

  async fn probe(&self) -> Result<()> {
    let resp = self
      .authed(self.client.get(self.endpoint.clone()))
      .query(&[("select", "id"), ("limit", "1")])
      .send()
      .await
      .map_err(|e| Error::Connection(e.to_string()))?;

    if !resp.status().is_success() {
      let status = resp.status();
      let body = resp.text().await.unwrap_or_default();
      return Err(Error::Connection(format!("probe answered {status}: {body}")));
    }
    Ok(())
  }

  fn authed(&self, req: RequestBuilder) -> RequestBuilder {
    req.header("apikey", &self.key).bearer_auth(&self.key)
  }

  /// Turn a non-2xx answer into [`Error::Status`].
  async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(Error::Status { status, body })
  }

  async fn delete_where(&self, filter: String) -> Result<u64> {
    let resp = self
      .authed(self.client.delete(self.endpoint.clone()))
      .header("Prefer", "return=representation")
      .query(&[("id", filter.as_str()), ("select", "id")])
      .send()
      .await?;

    let removed: Vec<IgnoredAny> = Self::check(resp).await?.json().await?;
    Ok(removed.len() as u64)
  }
}

// ─── PocStore impl ───────────────────────────────────────────────────────────

impl PocStore for RemoteStore {
  type Error = Error;

  async fn insert(&self, input: NewPocContact) -> Result<PocContact> {
    let resp = self
      .authed(self.client.post(self.endpoint.clone()))
      .header("Prefer", "return=representation")
      .json(&[&input])
      .send()
      .await?;

    let rows: Vec<RemoteRow> = Self::check(resp).await?.json().await?;
    rows
      .into_iter()
      .next()
      .ok_or_else(|| Error::Decode("insert returned no rows".into()))?
      .into_contact()
  }

  async fn select_all(&self, order: RecordOrder) -> Result<Vec<PocContact>> {
    let direction = if order.descending { "desc" } else { "asc" };
    let ordering = format!("{}.{direction},id.{direction}", order.by.column_name());

    let resp = self
      .authed(self.client.get(self.endpoint.clone()))
      .query(&[("select", "*"), ("order", ordering.as_str())])
      .send()
      .await?;

    let rows: Vec<RemoteRow> = Self::check(resp).await?.json().await?;
    rows.into_iter().map(RemoteRow::into_contact).collect()
  }

  async fn delete_by_id(&self, id: i64) -> Result<u64> {
    self.delete_where(format!("eq.{id}")).await
  }

  async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64> {
    if ids.is_empty() {
      return Ok(0);
    }
    let list = ids
      .iter()
      .map(i64::to_string)
      .collect::<Vec<_>>()
      .join(",");
    self.delete_where(format!("in.({list})")).await
  }
}
