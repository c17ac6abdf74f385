//! Minimal HTML writer.
//!
//! Uses `quick-xml`'s writer API so every text node and attribute value is
//! escaped on the way out. Void elements (`input`, `meta`, `hr`) are written
//! self-closed, which HTML accepts; every other element always gets an
//! explicit end tag.

use std::io::Cursor;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to render page: {0}")]
pub struct RenderError(String);

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

pub struct HtmlWriter {
  writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
  /// Start a document with the HTML5 doctype.
  pub fn new() -> Result<Self> {
    let mut w = Self { writer: Writer::new(Cursor::new(Vec::new())) };
    w.emit(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(w)
  }

  fn emit(&mut self, event: Event<'_>) -> Result<()> {
    self
      .writer
      .write_event(event)
      .map_err(|e| RenderError(e.to_string()))
  }

  pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(tag);
    for (k, v) in attrs {
      el.push_attribute((*k, *v));
    }
    self.emit(Event::Start(el))
  }

  pub fn close(&mut self, tag: &str) -> Result<()> {
    self.emit(Event::End(BytesEnd::new(tag)))
  }

  /// An escaped text node.
  pub fn text(&mut self, text: &str) -> Result<()> {
    self.emit(Event::Text(BytesText::new(text)))
  }

  /// Trusted, pre-escaped content such as the static stylesheet.
  pub fn trusted(&mut self, content: &str) -> Result<()> {
    self.emit(Event::Text(BytesText::from_escaped(content)))
  }

  /// `<tag attrs>text</tag>`
  pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
    self.open(tag, attrs)?;
    self.text(text)?;
    self.close(tag)
  }

  /// A void element such as `<input>`.
  pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(tag);
    for (k, v) in attrs {
      el.push_attribute((*k, *v));
    }
    self.emit(Event::Empty(el))
  }

  pub fn finish(self) -> Result<String> {
    String::from_utf8(self.writer.into_inner().into_inner())
      .map_err(|e| RenderError(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_text_and_attributes() {
    let mut w = HtmlWriter::new().unwrap();
    w.element("td", &[("title", "a\"b")], "<script>&").unwrap();
    let html = w.finish().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
    assert!(html.contains("&lt;script&gt;&amp;"), "{html}");
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains("title=\"a&quot;b\""), "{html}");
  }

  #[test]
  fn empty_elements_keep_end_tags() {
    let mut w = HtmlWriter::new().unwrap();
    w.element("textarea", &[("name", "remarks")], "").unwrap();
    w.void("input", &[("name", "city")]).unwrap();
    let html = w.finish().unwrap();
    assert!(html.contains("<textarea name=\"remarks\"></textarea>"), "{html}");
    assert!(html.contains("<input name=\"city\"/>"), "{html}");
  }
}
