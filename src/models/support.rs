//! Announcements and support tickets

use crate::schema::{Entity, Field, FieldReader, ValidationError};
use chrono::NaiveDateTime;
use serde::Serialize;

/// System announcement entry
///
/// Older servers send the body as `message`, newer ones as `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub text: String,
    pub unic: String,
    pub title: String,
}

impl Announcement {
    const TEXT: Field = Field::aliased("text", &["message"]);
    const UNIC: Field = Field::new("unic");
    const TITLE: Field = Field::new("title");
}

impl Entity for Announcement {
    const NAME: &'static str = "Announcement";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            text: fields.text(&Self::TEXT),
            unic: fields.text(&Self::UNIC),
            title: fields.text(&Self::TITLE),
        })
    }
}

/// Support ticket or a reply to one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub date: NaiveDateTime,
    pub from_user: String,
    pub to: Option<String>,
    pub reply_id: Option<i64>,
    pub status: i64,
    pub text: String,
}

impl Ticket {
    const ID: Field = Field::aliased("id", &["_id"]);
    const DATE: Field = Field::new("date");
    const FROM: Field = Field::aliased("from_user", &["from", "_from"]);
    const TO: Field = Field::new("to");
    const REPLY_ID: Field = Field::aliased("reply_id", &["replyid"]);
    const STATUS: Field = Field::new("status");
    const TEXT: Field = Field::new("text");

    /// True for a reply rather than an opening ticket
    pub fn is_reply(&self) -> bool {
        self.reply_id.is_some_and(|id| id != 0)
    }
}

impl Entity for Ticket {
    const NAME: &'static str = "Ticket";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: fields.integer(&Self::ID, 0)?,
            date: fields.timestamp(&Self::DATE)?,
            from_user: fields.text(&Self::FROM),
            to: fields.optional_text(&Self::TO),
            reply_id: fields.optional_integer(&Self::REPLY_ID)?,
            status: fields.integer(&Self::STATUS, 0)?,
            text: fields.text(&Self::TEXT),
        })
    }
}

/// Result of ticket creation, a reply, or a signup request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCreateResult {
    pub created: String,
    pub id: i64,
}

impl TicketCreateResult {
    /// Whether the server accepted the ticket
    pub fn is_success(&self) -> bool {
        self.created == "success"
    }
}

impl Entity for TicketCreateResult {
    const NAME: &'static str = "TicketCreateResult";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            created: fields.text(&Field::new("created")),
            id: fields.integer(&Field::new("id"), 0)?,
        })
    }
}

/// Connection request submitted through a POST body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    /// `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    pub ip: String,
    pub street: String,
    pub build: String,
    pub apt: String,
    pub realname: String,
    pub phone: String,
    pub notes: String,
}

impl SignupForm {
    /// JSON body expected by the signup endpoint
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "date": self.date,
            "state": 0,
            "ip": self.ip,
            "street": self.street,
            "build": self.build,
            "apt": self.apt,
            "realname": self.realname,
            "phone": self.phone,
            "service": "Internet",
            "notes": self.notes,
        })
    }
}
