//! Schema types

use super::fields::FieldReader;
use crate::decode::Record;
use thiserror::Error;

/// A declared entity field: canonical name plus accepted server aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Canonical field name
    pub name: &'static str,
    /// Alternative server names, in priority order
    pub aliases: &'static [&'static str],
}

impl Field {
    /// A field with no aliases
    pub const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    /// A field that servers may also send under other names
    pub const fn aliased(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    /// Lookup order: canonical name, then aliases
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// A typed, validated value built from a [`Record`]
///
/// Implementations read their fields through a [`FieldReader`], which
/// applies alias lookup and coercion rules.
pub trait Entity: Sized {
    /// Entity name used in validation errors
    const NAME: &'static str;

    /// Build the entity from a record's fields
    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError>;
}

/// What went wrong with a field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("required field is missing")]
    Missing,

    #[error("'{value}' is not an integer")]
    InvalidInteger { value: String },

    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    #[error("'{value}' is not a boolean flag")]
    InvalidFlag { value: String },

    #[error("'{value}' does not match YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },
}

/// A record that could not be turned into an entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to validate {entity}.{field}: {kind}")]
pub struct ValidationError {
    /// Entity being built
    pub entity: &'static str,
    /// Canonical name of the offending field
    pub field: &'static str,
    /// Failure detail
    pub kind: ValidationErrorKind,
    /// The record that failed
    pub record: Record,
}

/// A list entry that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the record in the decoded list
    pub index: usize,
    /// Why it was rejected
    pub error: ValidationError,
}

/// Outcome of validating a list of records
///
/// Accepted entities keep their input order. A bad record never hides the
/// good ones; it is reported in `rejected` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedList<E> {
    /// Entities that validated, in input order
    pub entities: Vec<E>,
    /// Records that failed, with their input positions
    pub rejected: Vec<Rejected>,
}

impl<E> Default for ValidatedList<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<E> ValidatedList<E> {
    /// Number of accepted entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when no entity was accepted
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// True when every record validated
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Iterate over accepted entities
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities.iter()
    }

    /// Accepted entities, dropping rejections
    pub fn into_entities(self) -> Vec<E> {
        self.entities
    }

    /// All entities, or the first rejection
    pub fn into_strict(self) -> Result<Vec<E>, ValidationError> {
        match self.rejected.into_iter().next() {
            Some(rejected) => Err(rejected.error),
            None => Ok(self.entities),
        }
    }
}

impl<E> IntoIterator for ValidatedList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ValidatedList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
