//! `POST /contacts` — the "Add New POC" form.

use axum::{
  Form,
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Redirect, Response},
};
use chrono::Local;
use poc_core::{filter::ListFilter, intake::PocForm, store::PocStore};

use crate::{
  AppState, Result,
  handlers::{Screen, respond},
  page::Notice,
  store::StoreHandle,
};

/// One insert per accepted submission, then a redirect so the page reloads
/// from the store. A rejected or failed submission re-renders the page with
/// the submitted values kept in the form. The query carries the filters
/// active when the form was posted.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
  Form(form): Form<PocForm>,
) -> Result<Response>
where
  S: PocStore + 'static,
{
  let filter = ListFilter::from_pairs(pairs);
  let StoreHandle::Ready(store) = &state.store else {
    return respond(&state, Screen { form, filter, ..Screen::default() }).await;
  };

  let input = match form.clone().into_new_contact(Local::now().naive_local()) {
    Ok(input) => input,
    Err(e) => {
      let screen = Screen {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        form,
        form_error: Some(e.to_string()),
        filter,
        ..Screen::default()
      };
      return respond(&state, screen).await;
    }
  };

  match store.insert(input).await {
    Ok(contact) => {
      tracing::info!(id = contact.id, "saved POC");
      Ok(Redirect::to(&Notice::Saved.location(&filter)).into_response())
    }
    Err(e) => {
      tracing::warn!(error = %e, "insert failed");
      let screen = Screen {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        form,
        form_error: Some(e.to_string()),
        filter,
        ..Screen::default()
      };
      respond(&state, screen).await
    }
  }
}
