//! Record validation entry points

use super::fields::FieldReader;
use super::types::{Entity, Rejected, ValidatedList, ValidationError};
use crate::decode::Record;

/// Validate one record as entity `E`
pub fn validate<E: Entity>(record: &Record) -> Result<E, ValidationError> {
    E::from_fields(&FieldReader::new(record, E::NAME))
}

/// Validate every record as entity `E`, keeping per-record outcomes
pub fn validate_list<E: Entity>(records: &[Record]) -> ValidatedList<E> {
    let mut list = ValidatedList::default();

    for (index, record) in records.iter().enumerate() {
        match validate::<E>(record) {
            Ok(entity) => list.entities.push(entity),
            Err(error) => list.rejected.push(Rejected { index, error }),
        }
    }

    list
}
