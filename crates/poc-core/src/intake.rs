//! Form intake: shapes raw submitted strings into a [`NewPocContact`].
//!
//! Text fields are taken verbatim; nothing is required to be non-empty. The
//! only rejections are inputs that cannot be turned into the stored types: a
//! malformed date or time, or a status outside the fixed vocabulary.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike as _};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  contact::{NewPocContact, PocStatus},
};

/// The raw values of the "Add New POC" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PocForm {
  pub city:           String,
  pub institute_name: String,
  pub poc_name:       String,
  pub mobile:         String,
  pub email:          String,
  pub status:         String,
  pub remarks:        String,
  /// `YYYY-MM-DD`, as sent by an `<input type="date">`.
  pub meeting_date:   String,
  /// `HH:MM` or `HH:MM:SS`, as sent by an `<input type="time">`.
  pub meeting_time:   String,
}

impl PocForm {
  /// Combine the date and time pickers and build the insert payload.
  ///
  /// Empty pickers fall back to `now` (date, and time to the minute); an
  /// empty status falls back to [`PocStatus::Cold`].
  pub fn into_new_contact(self, now: NaiveDateTime) -> Result<NewPocContact> {
    let meeting_schedule =
      combine_schedule(&self.meeting_date, &self.meeting_time, now)?;

    let status = if self.status.trim().is_empty() {
      PocStatus::default()
    } else {
      PocStatus::parse(&self.status)?
    };

    Ok(NewPocContact {
      city: self.city,
      institute_name: self.institute_name,
      poc_name: self.poc_name,
      mobile: self.mobile,
      email: self.email,
      status,
      remarks: self.remarks,
      meeting_schedule,
    })
  }
}

fn combine_schedule(
  date: &str,
  time: &str,
  now: NaiveDateTime,
) -> Result<NaiveDateTime> {
  let date = match date.trim() {
    "" => now.date(),
    d => NaiveDate::parse_from_str(d, "%Y-%m-%d")
      .map_err(|_| Error::InvalidDate(d.to_owned()))?,
  };

  let time = match time.trim() {
    "" => now
      .time()
      .with_second(0)
      .and_then(|t| t.with_nanosecond(0))
      .unwrap_or(NaiveTime::MIN),
    t => NaiveTime::parse_from_str(t, "%H:%M:%S")
      .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
      .map_err(|_| Error::InvalidTime(t.to_owned()))?,
  };

  Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
      .unwrap()
      .and_hms_milli_opt(9, 41, 27, 500)
      .unwrap()
  }

  fn filled() -> PocForm {
    PocForm {
      city:           "Pune".into(),
      institute_name: "ABC College".into(),
      poc_name:       "J. Doe".into(),
      mobile:         "+91 98765 43210".into(),
      email:          "jdoe@abc.edu".into(),
      status:         "Warm".into(),
      remarks:        "Met at fair".into(),
      meeting_date:   "2025-02-03".into(),
      meeting_time:   "14:30".into(),
    }
  }

  #[test]
  fn combines_date_and_time() {
    let c = filled().into_new_contact(now()).unwrap();
    assert_eq!(
      c.meeting_schedule,
      NaiveDate::from_ymd_opt(2025, 2, 3).unwrap().and_hms_opt(14, 30, 0).unwrap()
    );
    assert_eq!(c.status, PocStatus::Warm);
    assert_eq!(c.city, "Pune");
    assert_eq!(c.remarks, "Met at fair");
  }

  #[test]
  fn accepts_seconds_in_time() {
    let mut form = filled();
    form.meeting_time = "08:05:09".into();
    let c = form.into_new_contact(now()).unwrap();
    assert_eq!(c.meeting_schedule.time(), NaiveTime::from_hms_opt(8, 5, 9).unwrap());
  }

  #[test]
  fn empty_form_is_accepted_with_defaults() {
    let c = PocForm::default().into_new_contact(now()).unwrap();
    assert_eq!(c.city, "");
    assert_eq!(c.poc_name, "");
    assert_eq!(c.status, PocStatus::Cold);
    assert_eq!(
      c.meeting_schedule,
      NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 41, 0).unwrap()
    );
  }

  #[test]
  fn text_is_kept_verbatim() {
    let mut form = filled();
    form.email = "  not an email ".into();
    let c = form.into_new_contact(now()).unwrap();
    assert_eq!(c.email, "  not an email ");
  }

  #[test]
  fn rejects_unknown_status() {
    let mut form = filled();
    form.status = "Hot".into();
    assert!(matches!(form.into_new_contact(now()), Err(Error::UnknownStatus(_))));
  }

  #[test]
  fn rejects_malformed_date_and_time() {
    let mut form = filled();
    form.meeting_date = "03/02/2025".into();
    assert!(matches!(form.into_new_contact(now()), Err(Error::InvalidDate(_))));

    let mut form = filled();
    form.meeting_time = "half past two".into();
    assert!(matches!(form.into_new_contact(now()), Err(Error::InvalidTime(_))));
  }
}
