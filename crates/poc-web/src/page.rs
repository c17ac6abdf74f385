//! The single HTML page: intake form, filters, record table, delete controls.

use poc_core::{
  contact::{PocContact, PocStatus},
  filter::{CITY_KEY, FilterOptions, INSTITUTE_KEY, ListFilter, STATUS_KEY},
  intake::PocForm,
  view::ViewState,
};
use strum::IntoEnumIterator as _;

use crate::html::{HtmlWriter, Result};

const TITLE: &str = "POC Database";
const CAPTION: &str = "School & College Point of Contact Management System";

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem; color: #222; }
.caption { color: #666; margin-top: -0.5rem; }
.banner, .notice { padding: 0.75rem 1rem; border-radius: 4px; margin: 1rem 0; }
.error { background: #fde8e8; border: 1px solid #f5a3a3; }
.warning { background: #fff6e0; border: 1px solid #f0c96b; }
.success { background: #e6f6ea; border: 1px solid #8fd19e; }
.info { background: #e8f1fd; border: 1px solid #9cc0f0; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
label { display: block; font-size: 0.9rem; margin-bottom: 0.5rem; }
input, select, textarea { display: block; width: 100%; box-sizing: border-box; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #ddd; padding: 0.4rem; text-align: left; }
pre { white-space: pre-wrap; }
";

// ─── Page model ──────────────────────────────────────────────────────────────

/// A one-shot confirmation carried across the post-redirect-get reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
  Saved,
  Deleted(u64),
  NothingSelected,
}

impl Notice {
  /// Read the notice out of the page's query pairs.
  pub fn from_pairs(pairs: &[(String, String)]) -> Option<Self> {
    let get = |key: &str| {
      pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
    };
    match get("notice")? {
      "saved" => Some(Self::Saved),
      "deleted" => Some(Self::Deleted(
        get("count").and_then(|c| c.parse().ok()).unwrap_or(0),
      )),
      "none-selected" => Some(Self::NothingSelected),
      _ => None,
    }
  }

  /// Redirect target that shows this notice and keeps `filter` applied.
  pub fn location(self, filter: &ListFilter) -> String {
    let count;
    let mut pairs = vec![("notice", self.key())];
    if let Self::Deleted(n) = self {
      count = n.to_string();
      pairs.push(("count", count.as_str()));
    }
    pairs.extend(filter.pairs());
    href("/", &pairs)
  }

  fn key(self) -> &'static str {
    match self {
      Self::Saved => "saved",
      Self::Deleted(_) => "deleted",
      Self::NothingSelected => "none-selected",
    }
  }

  fn message(self) -> String {
    match self {
      Self::Saved => "POC saved successfully".to_owned(),
      Self::Deleted(1) => "Deleted 1 record".to_owned(),
      Self::Deleted(n) => format!("Deleted {n} records"),
      Self::NothingSelected => "Select at least one record to delete.".to_owned(),
    }
  }

  fn class(self) -> &'static str {
    match self {
      Self::Saved | Self::Deleted(_) => "notice success",
      Self::NothingSelected => "notice info",
    }
  }
}

/// `path` with `pairs` appended as a query string.
pub fn href(path: &str, pairs: &[(&str, &str)]) -> String {
  match serde_urlencoded::to_string(pairs) {
    Ok(query) if !query.is_empty() => format!("{path}?{query}"),
    _ => path.to_owned(),
  }
}

/// How a filter value is labelled; the stored value may be empty.
fn option_label(value: &str) -> &str {
  if value.trim().is_empty() { "(blank)" } else { value }
}

pub enum Body<'a> {
  /// The store could not be opened at startup; nothing else is shown.
  Disconnected(&'a str),
  Ready(&'a ViewState),
}

pub struct Page<'a> {
  pub body:         Body<'a>,
  pub notice:       Option<Notice>,
  pub form:         &'a PocForm,
  pub form_error:   Option<&'a str>,
  pub delete_error: Option<&'a str>,
  pub filter:       &'a ListFilter,
}

// ─── Rendering ───────────────────────────────────────────────────────────────

pub fn render(page: &Page<'_>) -> Result<String> {
  let mut w = HtmlWriter::new()?;
  w.open("html", &[("lang", "en")])?;

  w.open("head", &[])?;
  w.void("meta", &[("charset", "utf-8")])?;
  w.element("title", &[], TITLE)?;
  w.open("style", &[])?;
  w.trusted(STYLE)?;
  w.close("style")?;
  w.close("head")?;

  w.open("body", &[])?;
  w.element("h1", &[], TITLE)?;
  w.element("p", &[("class", "caption")], CAPTION)?;

  match page.body {
    Body::Disconnected(reason) => {
      w.open("div", &[("class", "banner error"), ("role", "alert")])?;
      w.element("strong", &[], "Store connection failed.")?;
      w.element("pre", &[], reason)?;
      w.close("div")?;
    }
    Body::Ready(view) => {
      if let Some(notice) = page.notice {
        w.element("div", &[("class", notice.class()), ("role", "status")], &notice.message())?;
      }
      write_form(&mut w, page.form, page.form_error, page.filter)?;
      w.void("hr", &[])?;
      w.element("h2", &[], "POC Records")?;
      write_records(&mut w, view, page.filter, page.delete_error)?;
    }
  }

  w.element("footer", &[("class", "caption")], "POC desk")?;
  w.close("body")?;
  w.close("html")?;
  w.finish()
}

fn write_form(
  w: &mut HtmlWriter,
  form: &PocForm,
  error: Option<&str>,
  filter: &ListFilter,
) -> Result<()> {
  let action = href("/contacts", &filter.pairs());
  w.open("details", &[("open", "open")])?;
  w.element("summary", &[], "Add New POC")?;
  w.open("form", &[("method", "post"), ("action", action.as_str())])?;
  w.open("div", &[("class", "grid")])?;

  w.open("div", &[])?;
  text_input(w, "City", "city", "text", &form.city)?;
  text_input(w, "Institute Name", "institute_name", "text", &form.institute_name)?;
  text_input(w, "POC Name", "poc_name", "text", &form.poc_name)?;
  w.close("div")?;

  w.open("div", &[])?;
  text_input(w, "POC Mobile Number", "mobile", "tel", &form.mobile)?;
  text_input(w, "POC Email ID", "email", "email", &form.email)?;
  w.open("label", &[])?;
  w.text("POC Status")?;
  w.open("select", &[("name", "status")])?;
  for status in PocStatus::iter() {
    let label = status.as_ref();
    let selected = form.status.eq_ignore_ascii_case(label)
      || (form.status.is_empty() && status == PocStatus::default());
    let mut attrs = vec![("value", label)];
    if selected {
      attrs.push(("selected", "selected"));
    }
    w.element("option", &attrs, label)?;
  }
  w.close("select")?;
  w.close("label")?;
  w.close("div")?;

  w.open("div", &[])?;
  text_input(w, "Meeting Date", "meeting_date", "date", &form.meeting_date)?;
  text_input(w, "Meeting Time", "meeting_time", "time", &form.meeting_time)?;
  w.open("label", &[])?;
  w.text("Remarks")?;
  w.element("textarea", &[("name", "remarks"), ("rows", "3")], &form.remarks)?;
  w.close("label")?;
  w.close("div")?;

  w.close("div")?;

  if let Some(error) = error {
    w.open("div", &[("class", "banner error"), ("role", "alert")])?;
    w.element("strong", &[], "Error while saving data")?;
    w.element("pre", &[], error)?;
    w.close("div")?;
  }

  w.element("button", &[("type", "submit")], "Save POC")?;
  w.close("form")?;
  w.close("details")
}

fn text_input(
  w: &mut HtmlWriter,
  label: &str,
  name: &str,
  kind: &str,
  value: &str,
) -> Result<()> {
  w.open("label", &[])?;
  w.text(label)?;
  w.void("input", &[("type", kind), ("name", name), ("value", value)])?;
  w.close("label")
}

fn write_records(
  w: &mut HtmlWriter,
  view: &ViewState,
  filter: &ListFilter,
  delete_error: Option<&str>,
) -> Result<()> {
  if let Some(error) = delete_error {
    w.open("div", &[("class", "banner error"), ("role", "alert")])?;
    w.element("strong", &[], "Error while deleting data")?;
    w.element("pre", &[], error)?;
    w.close("div")?;
  }

  let records = match view {
    ViewState::LoadFailed(reason) => {
      w.open("div", &[("class", "banner warning"), ("role", "alert")])?;
      w.element("strong", &[], "Error while loading data")?;
      w.element("pre", &[], reason)?;
      return w.close("div");
    }
    ViewState::Empty => {
      return w.element("p", &[("class", "notice info")], "No POC records found.");
    }
    ViewState::WithData(records) => records,
  };

  write_filters(w, &view.options(), filter)?;

  let shown = filter.apply(records);
  w.element(
    "p",
    &[("class", "count")],
    &format!("Showing {} of {} records", shown.len(), records.len()),
  )?;

  let kept = filter.pairs();
  let action = href("/contacts/delete", &kept);
  w.open("form", &[("method", "post"), ("action", action.as_str())])?;
  w.open("table", &[])?;
  w.open("thead", &[])?;
  w.open("tr", &[])?;
  w.element("th", &[], "")?;
  for heading in [
    "City",
    "Institute",
    "POC Name",
    "Mobile",
    "Email",
    "Status",
    "Remarks",
    "Meeting",
    "Created",
    "",
  ] {
    w.element("th", &[], heading)?;
  }
  w.close("tr")?;
  w.close("thead")?;

  w.open("tbody", &[])?;
  for record in shown {
    write_row(w, record, &kept)?;
  }
  w.close("tbody")?;
  w.close("table")?;

  w.element("button", &[("type", "submit")], "Delete selected")?;
  w.close("form")
}

fn write_row(w: &mut HtmlWriter, record: &PocContact, kept: &[(&str, &str)]) -> Result<()> {
  let id = record.id.to_string();
  let delete_action = href(&format!("/contacts/{id}/delete"), kept);
  let meeting = record.meeting_schedule.format("%Y-%m-%d %H:%M").to_string();
  let created = record.created_at.format("%Y-%m-%d %H:%M UTC").to_string();

  w.open("tr", &[])?;
  w.open("td", &[])?;
  w.void("input", &[
    ("type", "checkbox"),
    ("name", "id"),
    ("value", id.as_str()),
    ("aria-label", "Select record"),
  ])?;
  w.close("td")?;

  for cell in [
    record.city.as_str(),
    &record.institute_name,
    &record.poc_name,
    &record.mobile,
    &record.email,
    record.status.as_ref(),
    &record.remarks,
    &meeting,
    &created,
  ] {
    w.element("td", &[], cell)?;
  }

  w.open("td", &[])?;
  w.element(
    "button",
    &[("type", "submit"), ("formaction", delete_action.as_str()), ("title", "Delete")],
    "Delete",
  )?;
  w.close("td")?;
  w.close("tr")
}

fn write_filters(
  w: &mut HtmlWriter,
  options: &FilterOptions,
  filter: &ListFilter,
) -> Result<()> {
  w.open("form", &[("method", "get"), ("action", "/"), ("class", "grid")])?;

  multi_select(
    w,
    "Filter by City",
    CITY_KEY,
    options.cities.iter().map(|c| (c.as_str(), filter.cities.contains(c))),
  )?;
  multi_select(
    w,
    "Filter by Institute",
    INSTITUTE_KEY,
    options
      .institutes
      .iter()
      .map(|i| (i.as_str(), filter.institutes.contains(i))),
  )?;
  multi_select(
    w,
    "Filter by Status",
    STATUS_KEY,
    options
      .statuses
      .iter()
      .map(|s| (s.as_ref(), filter.statuses.contains(s))),
  )?;

  w.open("div", &[])?;
  w.element("button", &[("type", "submit")], "Apply filters")?;
  w.element("a", &[("href", "/")], "Clear filters")?;
  w.close("div")?;
  w.close("form")
}

fn multi_select<'a>(
  w: &mut HtmlWriter,
  label: &str,
  name: &str,
  choices: impl Iterator<Item = (&'a str, bool)>,
) -> Result<()> {
  w.open("label", &[])?;
  w.text(label)?;
  w.open("select", &[("name", name), ("multiple", "multiple")])?;
  for (value, selected) in choices {
    let mut attrs = vec![("value", value)];
    if selected {
      attrs.push(("selected", "selected"));
    }
    w.element("option", &attrs, option_label(value))?;
  }
  w.close("select")?;
  w.close("label")
}
