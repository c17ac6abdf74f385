//! The POC contact record — the only entity in the store.
//!
//! Records are never updated in place. They are created from a form
//! submission and destroyed individually or in a batch.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Format used when writing `meeting_schedule`.
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where the outreach with this contact stands. Fixed vocabulary.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PocStatus {
  #[default]
  Cold,
  Warm,
  Active,
  Closed,
}

impl PocStatus {
  /// Parse a status label, e.g. `"Warm"` or `"warm"`.
  pub fn parse(label: &str) -> Result<Self> {
    label
      .trim()
      .parse()
      .map_err(|_| Error::UnknownStatus(label.to_owned()))
  }
}

// ─── Schedule ────────────────────────────────────────────────────────────────

pub fn format_meeting_schedule(at: NaiveDateTime) -> String {
  at.format(SCHEDULE_FORMAT).to_string()
}

/// Parse a stored meeting schedule. Accepts ISO-8601 (`T` separator) and the
/// `"date time"` form, with or without fractional seconds.
pub fn parse_meeting_schedule(s: &str) -> Result<NaiveDateTime> {
  let s = s.trim();
  ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    .ok_or_else(|| Error::InvalidSchedule(s.to_owned()))
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted point-of-contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocContact {
  /// Store-assigned; never supplied by a caller.
  pub id:               i64,
  pub city:             String,
  pub institute_name:   String,
  pub poc_name:         String,
  pub mobile:           String,
  pub email:            String,
  pub status:           PocStatus,
  pub remarks:          String,
  pub meeting_schedule: NaiveDateTime,
  pub created_at:       DateTime<Utc>,
}

/// Input to [`crate::store::PocStore::insert`]: the eight business fields.
/// `id` and `created_at` are always set by the store.
///
/// Only `meeting_schedule` is required when deserialising; it accepts the
/// same forms as [`parse_meeting_schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPocContact {
  #[serde(default)]
  pub city:             String,
  #[serde(default)]
  pub institute_name:   String,
  #[serde(default)]
  pub poc_name:         String,
  #[serde(default)]
  pub mobile:           String,
  #[serde(default)]
  pub email:            String,
  #[serde(default)]
  pub status:           PocStatus,
  #[serde(default)]
  pub remarks:          String,
  #[serde(deserialize_with = "deserialize_schedule")]
  pub meeting_schedule: NaiveDateTime,
}

fn deserialize_schedule<'de, D>(d: D) -> std::result::Result<NaiveDateTime, D::Error>
where
  D: Deserializer<'de>,
{
  let s = String::deserialize(d)?;
  parse_meeting_schedule(&s).map_err(serde::de::Error::custom)
}

impl NewPocContact {
  /// Attach store-assigned fields to produce the persisted record.
  pub fn into_contact(self, id: i64, created_at: DateTime<Utc>) -> PocContact {
    PocContact {
      id,
      city: self.city,
      institute_name: self.institute_name,
      poc_name: self.poc_name,
      mobile: self.mobile,
      email: self.email,
      status: self.status,
      remarks: self.remarks,
      meeting_schedule: self.meeting_schedule,
      created_at,
    }
  }
}
