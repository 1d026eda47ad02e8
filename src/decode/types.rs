//! Decoder types
//!
//! Defines the normalized record and the detected payload shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Wire format the server chose for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// JSON object or array
    Json,
    /// XML document
    Xml,
}

/// One logical record: field name to string value
///
/// A key mapped to `None` was present in the payload with no value
/// (JSON `null`). A key that is missing was never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Option<String>>,
}

/// Records in server emission order
pub type RecordList = Vec<Record>;

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.insert(key.into(), value);
    }

    /// Insert a field with a present value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Some(value.into()));
    }

    /// Value of a field, if the key is present and holds a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Whether the key appears in the record at all
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over keys and values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Merge another record into this one; keys from `other` win
    pub fn merge(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }
}

impl FromIterator<(String, Option<String>)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Record {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect()
    }
}

/// A parsed XML element
///
/// `text` follows the usual element-tree convention: it holds the text that
/// precedes the first child element, or `None` when there is none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name as written (including any namespace prefix)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Leading text content
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes, text or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// All elements named `tag`, this one included, in document order
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        let mut pending = vec![self];

        while let Some(element) = pending.pop() {
            if element.name == tag {
                found.push(element);
            }
            pending.extend(element.children.iter().rev());
        }

        found
    }

    /// Text used when this element is read as a record field
    ///
    /// An element without text is present-but-empty. Whitespace that only
    /// indents nested children is formatting, not a value.
    pub fn field_text(&self) -> String {
        match &self.text {
            Some(text) if !self.children.is_empty() && text.trim().is_empty() => String::new(),
            Some(text) => text.clone(),
            None => String::new(),
        }
    }
}

/// Result of sniffing a response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Nothing but whitespace
    Empty,
    /// Valid JSON document
    Json(Value),
    /// Well-formed XML document (the document element)
    Xml(XmlElement),
    /// Neither parser accepted the body
    Malformed {
        /// JSON parser message
        json: String,
        /// XML parser message
        xml: String,
    },
}

impl Payload {
    /// Detected wire format, if any
    pub fn format(&self) -> Option<PayloadFormat> {
        match self {
            Payload::Json(_) => Some(PayloadFormat::Json),
            Payload::Xml(_) => Some(PayloadFormat::Xml),
            Payload::Empty | Payload::Malformed { .. } => None,
        }
    }
}
