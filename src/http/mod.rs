//! HTTP transport module
//!
//! The client talks to the server through the [`Transport`] trait. The
//! default implementation, [`HttpTransport`], is a thin reqwest wrapper.
//!
//! # Features
//!
//! - **One Request Per Call**: No retries, no rate limiting, no caching
//! - **Error Classification**: Timeouts, HTTP status errors and connection
//!   failures map to distinct error variants
//! - **Raw Bodies**: Responses come back as bytes for the decoder to sniff

mod client;
mod transport;

pub use client::HttpTransport;
pub use transport::Transport;
