//! XML document builder
//!
//! Streams quick-xml events into a small element tree. The tree keeps only
//! what record extraction needs: names, attributes, leading text, children.

use super::types::XmlElement;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;

/// Parse a complete XML document and return its document element
///
/// Rejects anything that is not well-formed: unbalanced or mismatched tags,
/// a second document element, or stray text outside the document element.
pub(crate) fn parse_document(raw: &[u8]) -> Result<XmlElement, String> {
    let mut reader = Reader::from_reader(raw);
    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("{e} (at byte {})", reader.buffer_position()))?;

        match event {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err("junk after document element".to_string());
                }
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    )
                })?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(|e| e.to_string())?;
                push_text(&mut stack, text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            _ => {}
        }

        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(format!("unclosed element <{}>", open.name));
    }

    root.ok_or_else(|| "no document element found".to_string())
}

fn open_element(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let name = utf8(start.name().as_ref())?.into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = utf8(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        attributes.push((key, value.into_owned()));
    }

    Ok(XmlElement {
        name,
        attributes,
        text: None,
        children: Vec::new(),
    })
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err("junk after document element".to_string()),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), String> {
    match stack.last_mut() {
        Some(current) if current.children.is_empty() => {
            current
                .text
                .get_or_insert_with(String::new)
                .push_str(text);
        }
        // Tail text after a child element
        Some(_) => {}
        None if text.trim().is_empty() => {}
        None => return Err(format!("text outside the document element: {:?}", text.trim())),
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<Cow<'_, str>, String> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|e| e.to_string())
}
