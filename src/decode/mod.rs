//! Response decoder module
//!
//! Supports: JSON object, JSON array, XML document, empty body
//!
//! # Overview
//!
//! XMLAgent answers the same endpoint in JSON or XML depending on how the
//! billing server is configured. The decoder sniffs the payload, then pulls
//! either one record or every record identified by the endpoint's root tag
//! out of it. Records are format-agnostic string maps; typing happens later
//! in [`crate::schema`].
//!
//! Decoding is pure: no I/O, no logging, no shared state.

mod decoders;
mod types;
mod xml;

pub use decoders::{
    decode_list, decode_single, detect, list_from_payload, merge_fragments, single_from_payload,
};
pub use types::{Payload, PayloadFormat, Record, RecordList, XmlElement};

#[cfg(test)]
mod tests;
