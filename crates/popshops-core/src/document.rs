//! Generic XML response document
//!
//! PopShops responses have no fixed schema the client cares about; every
//! operation returns one subtree of the parsed body and leaves navigation to
//! the caller. `Document` is the explicit tagged union backing that: an
//! element is an ordered list of named children (repeated siblings keep their
//! shared name), a leaf is its text content. XML attributes become named
//! children alongside the element's child elements; text inside a mixed
//! element is kept under the reserved `$text` key.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Key under which mixed-content text is stored on an element.
pub const TEXT_KEY: &str = "$text";

/// A dynamically-keyed view of a parsed XML payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
  /// Leaf text content (also used for attribute values)
  Text(String),
  /// Element children in document order, repeated names allowed
  Element(Vec<(String, Document)>),
}

impl Document {
  /// Parse an XML body into a document.
  ///
  /// The returned document is a virtual root whose children are the body's
  /// top-level elements, so `parse("<merchants>..</merchants>")?.get("merchants")`
  /// yields the root element.
  pub fn parse(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Frame::new(String::new())];

    loop {
      match reader.read_event() {
        Ok(Event::Start(ref e)) => {
          stack.push(Frame::from_start(e)?);
        }
        Ok(Event::Empty(ref e)) => {
          let frame = Frame::from_start(e)?;
          let (name, doc) = frame.close();
          stack.last_mut().expect("virtual root").children.push((name, doc));
        }
        Ok(Event::Text(ref e)) => {
          let text =
            e.unescape().map_err(|e| Error::Parse(format!("invalid text content: {e}")))?;
          stack.last_mut().expect("virtual root").text.push_str(&text);
        }
        Ok(Event::CData(ref e)) => {
          let text = String::from_utf8_lossy(e).into_owned();
          stack.last_mut().expect("virtual root").text.push_str(&text);
        }
        Ok(Event::End(_)) => {
          if stack.len() < 2 {
            return Err(Error::Parse("unbalanced closing tag".to_string()));
          }
          let frame = stack.pop().expect("checked above");
          let (name, doc) = frame.close();
          stack.last_mut().expect("virtual root").children.push((name, doc));
        }
        Ok(Event::Eof) => break,
        Err(e) => return Err(Error::Parse(format!("malformed XML: {e}"))),
        _ => {}
      }
    }

    if stack.len() != 1 {
      return Err(Error::Parse("unclosed element at end of document".to_string()));
    }
    let root = stack.pop().expect("virtual root");
    if root.children.is_empty() {
      return Err(Error::Parse("empty document".to_string()));
    }
    Ok(Document::Element(root.children))
  }

  /// First child with the given name, if any.
  pub fn get(&self, name: &str) -> Option<&Document> {
    self.children().iter().find(|(n, _)| n == name).map(|(_, d)| d)
  }

  /// All children with the given name, in document order.
  ///
  /// Repeated sibling elements form the sequence; a single occurrence is a
  /// one-element sequence.
  pub fn get_all(&self, name: &str) -> Vec<&Document> {
    self.children().iter().filter(|(n, _)| n == name).map(|(_, d)| d).collect()
  }

  /// Navigate a dot-separated path of child names.
  pub fn at(&self, path: &str) -> Option<&Document> {
    path.split('.').try_fold(self, |doc, name| doc.get(name))
  }

  /// Leaf text at a dot-separated path.
  pub fn get_str(&self, path: &str) -> Option<&str> {
    self.at(path).and_then(Document::text)
  }

  /// Sequence of elements at a dot-separated path.
  ///
  /// All segments but the last navigate to the parent; the last collects
  /// every sibling with that name.
  pub fn get_seq(&self, path: &str) -> Vec<&Document> {
    let (parent, last) = match path.rsplit_once('.') {
      Some((parent, last)) => (self.at(parent), last),
      None => (Some(self), path),
    };
    parent.map(|doc| doc.get_all(last)).unwrap_or_default()
  }

  /// Text content of a leaf (or of a mixed element's `$text` entry).
  pub fn text(&self) -> Option<&str> {
    match self {
      Document::Text(s) => Some(s),
      Document::Element(_) => self.get(TEXT_KEY).and_then(Document::text),
    }
  }

  /// Children of an element; empty for a leaf.
  pub fn children(&self) -> &[(String, Document)] {
    match self {
      Document::Element(children) => children,
      Document::Text(_) => &[],
    }
  }

  /// Consume the document and return the first child with the given name.
  pub fn into_child(self, name: &str) -> Option<Document> {
    match self {
      Document::Element(children) => {
        children.into_iter().find(|(n, _)| n == name).map(|(_, d)| d)
      }
      Document::Text(_) => None,
    }
  }

  /// Consume the document and navigate a dot-separated path.
  pub fn into_at(self, path: &str) -> Option<Document> {
    path.split('.').try_fold(self, |doc, name| doc.into_child(name))
  }
}

/// An open element during parsing.
struct Frame {
  name: String,
  children: Vec<(String, Document)>,
  text: String,
}

impl Frame {
  fn new(name: String) -> Self {
    Frame { name, children: Vec::new(), text: String::new() }
  }

  fn from_start(e: &quick_xml::events::BytesStart<'_>) -> Result<Self> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut frame = Frame::new(name);
    for attr in e.attributes() {
      let attr = attr.map_err(|e| Error::Parse(format!("invalid attribute: {e}")))?;
      let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
      let value = attr
        .unescape_value()
        .map_err(|e| Error::Parse(format!("invalid attribute value: {e}")))?
        .into_owned();
      frame.children.push((key, Document::Text(value)));
    }
    Ok(frame)
  }

  fn close(self) -> (String, Document) {
    let text = self.text.trim();
    if self.children.is_empty() {
      return (self.name, Document::Text(text.to_string()));
    }
    let mut children = self.children;
    if !text.is_empty() {
      children.push((TEXT_KEY.to_string(), Document::Text(text.to_string())));
    }
    (self.name, Document::Element(children))
  }
}
