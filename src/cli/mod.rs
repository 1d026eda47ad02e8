//! CLI module
//!
//! Command-line interface over [`UbillingClient`](crate::client::UbillingClient).
//!
//! # Commands
//!
//! - `user-info`, `payments`, `tickets`, ... - Call one XMLAgent endpoint
//! - `ping` - Check that the userstats URL answers
//! - `decode` - Run the response decoder on a saved payload, offline

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
