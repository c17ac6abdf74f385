pub mod create;
pub mod delete;
pub mod index;

use axum::{
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use poc_core::{filter::ListFilter, intake::PocForm, store::PocStore, view::ViewState};

use crate::{
  AppState, Result,
  page::{self, Body, Notice, Page},
  store::StoreHandle,
};

/// Everything about a page render except the record set, which is always
/// reloaded from the store.
pub(crate) struct Screen {
  pub status:       StatusCode,
  pub notice:       Option<Notice>,
  pub form:         PocForm,
  pub form_error:   Option<String>,
  pub delete_error: Option<String>,
  pub filter:       ListFilter,
}

impl Default for Screen {
  fn default() -> Self {
    Self {
      status:       StatusCode::OK,
      notice:       None,
      form:         blank_form(Local::now().naive_local()),
      form_error:   None,
      delete_error: None,
      filter:       ListFilter::default(),
    }
  }
}

/// A fresh form with the date and time pickers set to `now`.
fn blank_form(now: NaiveDateTime) -> PocForm {
  PocForm {
    meeting_date: now.format("%Y-%m-%d").to_string(),
    meeting_time: now.format("%H:%M").to_string(),
    ..PocForm::default()
  }
}

/// Reload the store and render the page around `screen`.
///
/// An unavailable store always answers 503 with the connection banner.
pub(crate) async fn respond<S>(state: &AppState<S>, screen: Screen) -> Result<Response>
where
  S: PocStore + 'static,
{
  let (status, view) = match &state.store {
    StoreHandle::Ready(store) => {
      let view = ViewState::load(store.as_ref(), state.order).await;
      if let ViewState::LoadFailed(reason) = &view {
        tracing::warn!(%reason, "failed to load records");
      }
      (screen.status, view)
    }
    StoreHandle::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, ViewState::Empty),
  };

  let body = match &state.store {
    StoreHandle::Ready(_) => Body::Ready(&view),
    StoreHandle::Unavailable(reason) => Body::Disconnected(reason),
  };

  let html = page::render(&Page {
    body,
    notice: screen.notice,
    form: &screen.form,
    form_error: screen.form_error.as_deref(),
    delete_error: screen.delete_error.as_deref(),
    filter: &screen.filter,
  })?;

  Ok((status, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn blank_form_prefills_pickers() {
    let now = NaiveDate::from_ymd_opt(2025, 1, 15)
      .unwrap()
      .and_hms_opt(9, 41, 27)
      .unwrap();
    let form = blank_form(now);
    assert_eq!(form.meeting_date, "2025-01-15");
    assert_eq!(form.meeting_time, "09:41");
    assert_eq!(form.city, "");
    assert_eq!(form.status, "");
  }
}
