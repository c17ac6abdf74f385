//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! `created_at` is stored as a UTC RFC 3339 string, `meeting_schedule` as a
//! naive ISO-8601 string, and `status` as its label.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use poc_core::contact::{
  PocContact, PocStatus, format_meeting_schedule, parse_meeting_schedule,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

/// Fixed-width microsecond precision so the column sorts chronologically.
pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Meeting schedule ────────────────────────────────────────────────────────

pub fn encode_schedule(at: NaiveDateTime) -> String { format_meeting_schedule(at) }

pub fn decode_schedule(s: &str) -> Result<NaiveDateTime> {
  Ok(parse_meeting_schedule(s)?)
}

// ─── PocStatus ───────────────────────────────────────────────────────────────

pub fn encode_status(status: PocStatus) -> &'static str { status.into() }

pub fn decode_status(s: &str) -> Result<PocStatus> { Ok(PocStatus::parse(s)?) }

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list matching [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = "id, city, institute_name, poc_name, mobile, \
                                   email, status, remarks, meeting_schedule, \
                                   created_at";

/// Raw values read directly from a `poc_contacts` row.
pub struct RawContact {
  pub id:               i64,
  pub city:             String,
  pub institute_name:   String,
  pub poc_name:         String,
  pub mobile:           String,
  pub email:            String,
  pub status:           String,
  pub remarks:          String,
  pub meeting_schedule: String,
  pub created_at:       String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      city:             row.get(1)?,
      institute_name:   row.get(2)?,
      poc_name:         row.get(3)?,
      mobile:           row.get(4)?,
      email:            row.get(5)?,
      status:           row.get(6)?,
      remarks:          row.get(7)?,
      meeting_schedule: row.get(8)?,
      created_at:       row.get(9)?,
    })
  }

  pub fn into_contact(self) -> Result<PocContact> {
    Ok(PocContact {
      id:               self.id,
      city:             self.city,
      institute_name:   self.institute_name,
      poc_name:         self.poc_name,
      mobile:           self.mobile,
      email:            self.email,
      status:           decode_status(&self.status)?,
      remarks:          self.remarks,
      meeting_schedule: decode_schedule(&self.meeting_schedule)?,
      created_at:       decode_dt(&self.created_at)?,
    })
  }
}
