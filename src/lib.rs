// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Ubilling XMLAgent client
//!
//! Async client for the Ubilling "XMLAgent" userstats API. The same endpoint
//! may answer in JSON or XML depending on server configuration; this crate
//! hides that behind one decoder and hands back typed, validated entities.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ubilling_xmlagent::{ClientConfig, Credentials, Result, UbillingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new("http://demo.ubilling.net.ua:9999/billing/userstats");
//!     let client = UbillingClient::new(&config)?;
//!     let creds = Credentials::new("demo", "fe01ce2a7fbac8fafaed7c982a04e229")?;
//!
//!     let payments = client.get_payments(&creds).await?;
//!     for payment in &payments {
//!         println!("{} {}", payment.date, payment.summ);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UbillingClient                         │
//! │   get_user_info()  get_payments()  create_ticket()  ...     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┼───────────────┬────────────────┐
//! │  Endpoint  │   Transport   │    Decode     │    Schema      │
//! ├────────────┼───────────────┼───────────────┼────────────────┤
//! │ Query      │ reqwest GET   │ detect        │ Field aliases  │
//! │ Root tag   │ reqwest POST  │ decode_single │ Coercions      │
//! │ Base64     │ reachable     │ decode_list   │ ValidatedList  │
//! └────────────┴───────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Response decoding (JSON or XML into records)
pub mod decode;

/// Record validation into typed entities
pub mod schema;

/// XMLAgent entities
pub mod models;

/// Endpoint catalogue and query building
pub mod endpoint;

/// HTTP transport
pub mod http;

/// Client facade
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::UbillingClient;
pub use config::ClientConfig;
pub use decode::{decode_list, decode_single, detect, Payload, Record};
pub use endpoint::{Credentials, Endpoint};
pub use error::{Error, Result};
pub use schema::{validate, validate_list, Entity, ValidatedList, ValidationError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
