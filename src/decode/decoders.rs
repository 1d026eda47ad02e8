//! Decoder implementations
//!
//! `detect` decides the wire format; `decode_single` and `decode_list` turn
//! the detected payload into records for one endpoint's root tag.

use super::types::{Payload, Record, RecordList, XmlElement};
use super::xml;
use crate::error::{Error, Result};
use serde_json::{Map, Value};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ============================================================================
// Detection
// ============================================================================

/// Sniff a response body: JSON first, XML as the fallback
///
/// Never fails. A body neither parser accepts comes back as
/// [`Payload::Malformed`] carrying both parser messages.
pub fn detect(raw: &[u8]) -> Payload {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Payload::Empty;
    }

    let json_error = match serde_json::from_slice::<Value>(raw) {
        Ok(value) => return Payload::Json(value),
        Err(e) => e.to_string(),
    };

    match xml::parse_document(raw) {
        Ok(root) => Payload::Xml(root),
        Err(xml_error) => Payload::Malformed {
            json: json_error,
            xml: xml_error,
        },
    }
}

// ============================================================================
// Single-record endpoints
// ============================================================================

/// Decode the one record a single-record endpoint returns
///
/// Returns `Ok(None)` for an empty body, an empty object or array, JSON
/// `null`, or an XML document with no `root_tag` element. When several
/// records match, the first one wins.
///
/// A JSON array of two or more single-key objects is the fragmented-row
/// shape some servers emit for single records; those fragments are merged
/// with [`merge_fragments`].
pub fn decode_single(raw: &[u8], root_tag: &str) -> Result<Option<Record>> {
    single_from_payload(detect(raw), root_tag)
}

/// [`decode_single`] for a body that was already sniffed with [`detect`]
pub fn single_from_payload(payload: Payload, root_tag: &str) -> Result<Option<Record>> {
    match payload {
        Payload::Empty => Ok(None),
        Payload::Json(value) => single_from_json(value, root_tag),
        Payload::Xml(root) => Ok(root
            .find_all(root_tag)
            .into_iter()
            .next()
            .map(record_from_element)
            .filter(|record| !record.is_empty())),
        Payload::Malformed { json, xml } => Err(Error::malformed(json, xml)),
    }
}

fn single_from_json(value: Value, root_tag: &str) -> Result<Option<Record>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(non_empty(record_from_object(map))),
        Value::Array(items) => {
            let rows = records_from_array(items, root_tag)?;
            if is_fragmented(&rows) {
                Ok(non_empty(merge_fragments(rows)))
            } else {
                Ok(rows.into_iter().next().and_then(non_empty))
            }
        }
        other => Err(Error::unexpected_shape(
            root_tag,
            format!("expected an object or array, found {}", json_kind(&other)),
        )),
    }
}

/// Merge single-key JSON fragments into one record
///
/// `[{"a":"1"},{"b":"2"}]` becomes `{a: "1", b: "2"}`. Later fragments win
/// when a key repeats.
pub fn merge_fragments(fragments: impl IntoIterator<Item = Record>) -> Record {
    let mut merged = Record::new();
    for fragment in fragments {
        merged.merge(fragment);
    }
    merged
}

fn is_fragmented(rows: &[Record]) -> bool {
    rows.len() > 1 && rows.iter().all(|row| row.len() == 1)
}

fn non_empty(record: Record) -> Option<Record> {
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

// ============================================================================
// List endpoints
// ============================================================================

/// Decode every record a list endpoint returns, in emission order
///
/// An empty body, JSON `null`, `[]`, `{}` or an XML document without any
/// `root_tag` element all decode to an empty list. Each JSON array element
/// is its own record; fragments are never merged here.
pub fn decode_list(raw: &[u8], root_tag: &str) -> Result<RecordList> {
    list_from_payload(detect(raw), root_tag)
}

/// [`decode_list`] for a body that was already sniffed with [`detect`]
pub fn list_from_payload(payload: Payload, root_tag: &str) -> Result<RecordList> {
    match payload {
        Payload::Empty => Ok(Vec::new()),
        Payload::Json(value) => list_from_json(value, root_tag),
        Payload::Xml(root) => Ok(root
            .find_all(root_tag)
            .into_iter()
            .map(record_from_element)
            .collect()),
        Payload::Malformed { json, xml } => Err(Error::malformed(json, xml)),
    }
}

fn list_from_json(value: Value, root_tag: &str) -> Result<RecordList> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => records_from_array(items, root_tag),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        // Keyed collection: {"0": {...}, "1": {...}}
        Value::Object(map) if map.values().all(Value::is_object) => Ok(map
            .into_iter()
            .filter_map(|(_, row)| match row {
                Value::Object(fields) => Some(record_from_object(fields)),
                _ => None,
            })
            .collect()),
        Value::Object(map) => Ok(vec![record_from_object(map)]),
        other => Err(Error::unexpected_shape(
            root_tag,
            format!("expected an object or array, found {}", json_kind(&other)),
        )),
    }
}

// ============================================================================
// JSON → Record
// ============================================================================

fn records_from_array(items: Vec<Value>, root_tag: &str) -> Result<RecordList> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(record_from_object(map)),
            other => Err(Error::unexpected_shape(
                root_tag,
                format!(
                    "array element {index} is {}, expected an object",
                    json_kind(&other)
                ),
            )),
        })
        .collect()
}

fn record_from_object(map: Map<String, Value>) -> Record {
    map.into_iter()
        .map(|(key, value)| (key, json_field(value)))
        .collect()
}

fn json_field(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// XML → Record
// ============================================================================

/// Build a record from a matched element
///
/// The element's own attributes come first, then each child contributes
/// `tag → text` followed by its attributes. Later writes win.
fn record_from_element(element: &XmlElement) -> Record {
    let mut record = Record::new();

    for (key, value) in &element.attributes {
        record.set(key.as_str(), value.as_str());
    }

    for child in &element.children {
        record.set(child.name.as_str(), child.field_text());
        for (key, value) in &child.attributes {
            record.set(key.as_str(), value.as_str());
        }
    }

    record
}
