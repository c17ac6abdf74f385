//! Wire shape of a `poc_contacts` row as returned by the remote API.
//!
//! Text columns are nullable on the remote side; a null reads as an empty
//! string. Timestamps may come back with or without an offset depending on
//! the column type, so both are accepted (naive values are taken as UTC).

use chrono::{DateTime, NaiveDateTime, Utc};
use poc_core::contact::{PocContact, PocStatus, parse_meeting_schedule};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct RemoteRow {
  pub id:               i64,
  pub city:             Option<String>,
  pub institute_name:   Option<String>,
  pub poc_name:         Option<String>,
  pub mobile:           Option<String>,
  pub email:            Option<String>,
  pub status:           Option<String>,
  pub remarks:          Option<String>,
  pub meeting_schedule: Option<String>,
  pub created_at:       Option<String>,
}

impl RemoteRow {
  pub fn into_contact(self) -> Result<PocContact> {
    let status = match self.status.as_deref() {
      None | Some("") => PocStatus::default(),
      Some(s) => PocStatus::parse(s)?,
    };

    let meeting_schedule = self
      .meeting_schedule
      .as_deref()
      .map(decode_schedule)
      .transpose()?
      .ok_or_else(|| Error::Decode(format!("row {} has no meeting_schedule", self.id)))?;

    let created_at = self
      .created_at
      .as_deref()
      .map(decode_timestamp)
      .transpose()?
      .ok_or_else(|| Error::Decode(format!("row {} has no created_at", self.id)))?;

    Ok(PocContact {
      id: self.id,
      city: self.city.unwrap_or_default(),
      institute_name: self.institute_name.unwrap_or_default(),
      poc_name: self.poc_name.unwrap_or_default(),
      mobile: self.mobile.unwrap_or_default(),
      email: self.email.unwrap_or_default(),
      status,
      remarks: self.remarks.unwrap_or_default(),
      meeting_schedule,
      created_at,
    })
  }
}

/// A `timestamptz` column carries an offset; convert it to wall-clock time.
fn decode_schedule(s: &str) -> Result<NaiveDateTime> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.naive_local());
  }
  Ok(parse_meeting_schedule(s)?)
}

fn decode_timestamp(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.with_timezone(&Utc));
  }
  // Postgres renders `timestamptz` with a short offset (`+00`) that RFC 3339
  // does not allow.
  if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%#z") {
    return Ok(dt.with_timezone(&Utc));
  }
  Ok(parse_meeting_schedule(s)?.and_utc())
}
