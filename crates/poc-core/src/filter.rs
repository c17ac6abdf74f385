//! Multi-value filters over a loaded record set.
//!
//! Three independent dimensions: city, institute, status. A record passes
//! when, for every dimension with at least one selected value, its field is
//! one of the selected values. Unselected dimensions impose nothing.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::contact::{PocContact, PocStatus};

/// Query keys used for the three dimensions.
pub const CITY_KEY: &str = "city";
pub const INSTITUTE_KEY: &str = "institute";
pub const STATUS_KEY: &str = "status";

// ─── Options ─────────────────────────────────────────────────────────────────

/// The choices offered for each filter, drawn from the records currently
/// loaded rather than from a fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
  pub cities:     Vec<String>,
  pub institutes: Vec<String>,
  pub statuses:   Vec<PocStatus>,
}

impl FilterOptions {
  /// Sorted distinct values per dimension, blank text included so records
  /// saved without a city or institute can still be picked out.
  pub fn from_records(records: &[PocContact]) -> Self {
    Self {
      cities:     distinct(records.iter().map(|r| r.city.as_str())),
      institutes: distinct(records.iter().map(|r| r.institute_name.as_str())),
      statuses:   records
        .iter()
        .map(|r| r.status)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect(),
    }
  }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  values
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(str::to_owned)
    .collect()
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// The values the user has selected in each dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
  pub cities:     BTreeSet<String>,
  pub institutes: BTreeSet<String>,
  pub statuses:   BTreeSet<PocStatus>,
}

impl ListFilter {
  /// Build a filter from repeated query pairs such as
  /// `city=Pune&city=Nagpur&status=Warm`. Unknown keys and status labels
  /// outside the vocabulary are ignored.
  pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut filter = Self::default();
    for (key, value) in pairs {
      let value = value.as_ref();
      match key.as_ref() {
        CITY_KEY => {
          filter.cities.insert(value.to_owned());
        }
        INSTITUTE_KEY => {
          filter.institutes.insert(value.to_owned());
        }
        STATUS_KEY => {
          if let Ok(status) = PocStatus::parse(value) {
            filter.statuses.insert(status);
          }
        }
        _ => {}
      }
    }
    filter
  }

  pub fn is_empty(&self) -> bool {
    self.cities.is_empty() && self.institutes.is_empty() && self.statuses.is_empty()
  }

  pub fn matches(&self, record: &PocContact) -> bool {
    (self.cities.is_empty() || self.cities.contains(&record.city))
      && (self.institutes.is_empty()
        || self.institutes.contains(&record.institute_name))
      && (self.statuses.is_empty() || self.statuses.contains(&record.status))
  }

  /// The selection as query pairs, the inverse of [`Self::from_pairs`].
  pub fn pairs(&self) -> Vec<(&'static str, &str)> {
    let cities = self.cities.iter().map(|c| (CITY_KEY, c.as_str()));
    let institutes = self.institutes.iter().map(|i| (INSTITUTE_KEY, i.as_str()));
    let statuses = self.statuses.iter().map(|s| (STATUS_KEY, <&str>::from(s)));
    cities.chain(institutes).chain(statuses).collect()
  }

  /// Records that pass the filter, in their loaded order.
  pub fn apply<'a>(&self, records: &'a [PocContact]) -> Vec<&'a PocContact> {
    records.iter().filter(|r| self.matches(r)).collect()
  }
}
