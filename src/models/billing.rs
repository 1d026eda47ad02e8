//! Payments, fee charges and payment systems

use crate::schema::{Entity, Field, FieldReader, ValidationError};
use chrono::NaiveDateTime;
use serde::Serialize;

const DATE: Field = Field::new("date");
const SUMM: Field = Field::new("summ");
const BALANCE: Field = Field::new("balance");

/// Single payment record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub date: NaiveDateTime,
    pub summ: String,
    pub balance: String,
}

impl Entity for Payment {
    const NAME: &'static str = "Payment";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            date: fields.timestamp(&DATE)?,
            summ: fields.text(&SUMM),
            balance: fields.text(&BALANCE),
        })
    }
}

/// Fee charge (debit) record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeCharge {
    pub date: NaiveDateTime,
    pub summ: String,
    pub balance: String,
    pub note: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FeeCharge {
    const NOTE: Field = Field::new("note");
    const KIND: Field = Field::new("type");
}

impl Entity for FeeCharge {
    const NAME: &'static str = "FeeCharge";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            date: fields.timestamp(&DATE)?,
            summ: fields.text(&SUMM),
            balance: fields.text(&BALANCE),
            note: fields.text(&Self::NOTE),
            kind: fields.text(&Self::KIND),
        })
    }
}

/// Online payment system available to the user (OpenPayz)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSystem {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl Entity for PaymentSystem {
    const NAME: &'static str = "PaymentSystem";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.text(&Field::new("name")),
            url: fields.text(&Field::new("url")),
            description: fields.text(&Field::new("description")),
        })
    }
}
