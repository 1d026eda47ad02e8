//! XMLAgent endpoint definitions
//!
//! Each endpoint knows the query parameters that select it and the root tag
//! its records are wrapped in. Building a query is pure data assembly.

mod endpoints;
mod types;

pub use endpoints::Endpoint;
pub use types::{Credentials, Query};
