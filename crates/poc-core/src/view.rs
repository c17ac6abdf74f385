//! The list view's load state.
//!
//! Every render starts from a full reload of the store (`Loading` is the
//! in-flight request itself) and ends in exactly one of the states below.
//! Inserts and deletes never patch a loaded view; they trigger a new load.

use crate::{
  contact::PocContact,
  filter::{FilterOptions, ListFilter},
  store::{PocStore, RecordOrder},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
  /// The store answered with no records. Informational, not an error.
  Empty,
  /// The store answered with at least one record, in load order.
  WithData(Vec<PocContact>),
  /// The load failed; the message is shown and no table is rendered.
  LoadFailed(String),
}

impl ViewState {
  /// Reload the full record set from `store`.
  pub async fn load<S: PocStore>(store: &S, order: RecordOrder) -> Self {
    match store.select_all(order).await {
      Ok(records) if records.is_empty() => Self::Empty,
      Ok(records) => Self::WithData(records),
      Err(e) => Self::LoadFailed(e.to_string()),
    }
  }

  pub fn records(&self) -> &[PocContact] {
    match self {
      Self::WithData(records) => records,
      Self::Empty | Self::LoadFailed(_) => &[],
    }
  }

  pub fn options(&self) -> FilterOptions {
    FilterOptions::from_records(self.records())
  }

  pub fn filtered<'a>(&'a self, filter: &ListFilter) -> Vec<&'a PocContact> {
    filter.apply(self.records())
  }
}
