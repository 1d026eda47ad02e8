//! Shape validator module
//!
//! Turns normalized records into typed entities.
//!
//! # Features
//!
//! - **Field Aliases**: Canonical name first, then each alias in order
//! - **Lenient Numbers**: Empty or missing numeric fields take their default
//! - **Strict Timestamps**: `YYYY-MM-DD HH:MM:SS` or a validation error
//! - **Forward Compatible**: Unknown keys are ignored
//! - **Per-Record Outcomes**: List validation keeps good rows and reports bad ones

mod fields;
mod types;
mod validator;

pub use fields::{FieldReader, TIMESTAMP_FORMAT};
pub use types::{Entity, Field, Rejected, ValidatedList, ValidationError, ValidationErrorKind};
pub use validator::{validate, validate_list};
