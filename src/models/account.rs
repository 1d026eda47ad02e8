//! Account, contractor, credit and pay card entities

use crate::schema::{Entity, Field, FieldReader, ValidationError};
use serde::Serialize;

// ============================================================================
// User Info
// ============================================================================

/// User account information returned by the auto-auth endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub billing_login: String,
    pub address: String,
    pub realname: String,
    pub cash: f64,
    pub ip: String,
    pub phone: String,
    pub mobile: String,
    pub email: Option<String>,
    pub credit: String,
    pub credit_expire: Option<String>,
    pub pay_id: i64,
    pub contract: String,
    pub tariff: String,
    pub tariff_alias: String,
    pub tariff_name: String,
    pub traffic_download: String,
    pub traffic_upload: String,
    pub traffic_total: String,
    pub account_state: String,
    pub account_expire: Option<String>,
    pub currency: String,
    pub version: String,
}

impl UserInfo {
    const LOGIN: Field = Field::aliased("billing_login", &["login"]);
    const ADDRESS: Field = Field::new("address");
    const REALNAME: Field = Field::new("realname");
    const IP: Field = Field::new("ip");
    const PHONE: Field = Field::new("phone");
    const MOBILE: Field = Field::new("mobile");
    const CREDIT: Field = Field::new("credit");
    const CONTRACT: Field = Field::new("contract");
    const TARIFF: Field = Field::new("tariff");
    const CURRENCY: Field = Field::new("currency");
    const VERSION: Field = Field::new("version");
    const CASH: Field = Field::new("cash");
    const EMAIL: Field = Field::new("email");
    const CREDIT_EXPIRE: Field = Field::aliased("credit_expire", &["creditexpire"]);
    const PAY_ID: Field = Field::aliased("pay_id", &["payid"]);
    const TARIFF_ALIAS: Field = Field::aliased("tariff_alias", &["tariffalias"]);
    const TARIFF_NAME: Field = Field::aliased("tariff_name", &["tariffnm"]);
    const TRAFFIC_DOWNLOAD: Field = Field::aliased("traffic_download", &["traffdownload"]);
    const TRAFFIC_UPLOAD: Field = Field::aliased("traffic_upload", &["traffupload"]);
    const TRAFFIC_TOTAL: Field = Field::aliased("traffic_total", &["trafftotal"]);
    const ACCOUNT_STATE: Field = Field::aliased("account_state", &["accountstate"]);
    const ACCOUNT_EXPIRE: Field = Field::aliased("account_expire", &["accountexpire"]);
}

impl Entity for UserInfo {
    const NAME: &'static str = "UserInfo";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            billing_login: fields.required_text(&Self::LOGIN)?,
            address: fields.text(&Self::ADDRESS),
            realname: fields.text(&Self::REALNAME),
            cash: fields.number(&Self::CASH, 0.0)?,
            ip: fields.text(&Self::IP),
            phone: fields.text(&Self::PHONE),
            mobile: fields.text(&Self::MOBILE),
            email: fields.optional_text(&Self::EMAIL),
            credit: fields.text(&Self::CREDIT),
            credit_expire: fields.optional_text(&Self::CREDIT_EXPIRE),
            pay_id: fields.integer(&Self::PAY_ID, 0)?,
            contract: fields.text(&Self::CONTRACT),
            tariff: fields.text(&Self::TARIFF),
            tariff_alias: fields.text(&Self::TARIFF_ALIAS),
            tariff_name: fields.text(&Self::TARIFF_NAME),
            traffic_download: fields.text(&Self::TRAFFIC_DOWNLOAD),
            traffic_upload: fields.text(&Self::TRAFFIC_UPLOAD),
            traffic_total: fields.text(&Self::TRAFFIC_TOTAL),
            account_state: fields.text(&Self::ACCOUNT_STATE),
            account_expire: fields.optional_text(&Self::ACCOUNT_EXPIRE),
            currency: fields.text(&Self::CURRENCY),
            version: fields.text(&Self::VERSION),
        })
    }
}

// ============================================================================
// Agent (contractor)
// ============================================================================

/// Contractor assigned to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentData {
    pub id: i64,
    pub bankacc: String,
    pub bankname: String,
    pub bankcode: String,
    pub edrpo: String,
    pub ipn: String,
    pub licensenum: String,
    pub juraddr: String,
    pub phisaddr: String,
    pub phone: String,
    pub contrname: String,
    pub agnameabbr: String,
    pub agsignatory: String,
    pub agsignatory2: String,
    pub agbasis: String,
    pub agmail: String,
    pub siteurl: String,
}

impl AgentData {
    const ID: Field = Field::new("id");
    const BANKACC: Field = Field::new("bankacc");
    const BANKNAME: Field = Field::new("bankname");
    const BANKCODE: Field = Field::new("bankcode");
    const EDRPO: Field = Field::new("edrpo");
    const IPN: Field = Field::new("ipn");
    const LICENSENUM: Field = Field::new("licensenum");
    const JURADDR: Field = Field::new("juraddr");
    const PHISADDR: Field = Field::new("phisaddr");
    const PHONE: Field = Field::new("phone");
    const CONTRNAME: Field = Field::new("contrname");
    const AGNAMEABBR: Field = Field::new("agnameabbr");
    const AGSIGNATORY: Field = Field::new("agsignatory");
    const AGSIGNATORY2: Field = Field::new("agsignatory2");
    const AGBASIS: Field = Field::new("agbasis");
    const AGMAIL: Field = Field::new("agmail");
    const SITEURL: Field = Field::new("siteurl");
}

impl Entity for AgentData {
    const NAME: &'static str = "AgentData";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: fields.integer(&Self::ID, 0)?,
            bankacc: fields.text(&Self::BANKACC),
            bankname: fields.text(&Self::BANKNAME),
            bankcode: fields.text(&Self::BANKCODE),
            edrpo: fields.text(&Self::EDRPO),
            ipn: fields.text(&Self::IPN),
            licensenum: fields.text(&Self::LICENSENUM),
            juraddr: fields.text(&Self::JURADDR),
            phisaddr: fields.text(&Self::PHISADDR),
            phone: fields.text(&Self::PHONE),
            contrname: fields.text(&Self::CONTRNAME),
            agnameabbr: fields.text(&Self::AGNAMEABBR),
            agsignatory: fields.text(&Self::AGSIGNATORY),
            agsignatory2: fields.text(&Self::AGSIGNATORY2),
            agbasis: fields.text(&Self::AGBASIS),
            agmail: fields.text(&Self::AGMAIL),
            siteurl: fields.text(&Self::SITEURL),
        })
    }
}

// ============================================================================
// Credit
// ============================================================================

/// Credit request or credit check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditInfo {
    pub status: i64,
    pub message: String,
    pub full_message: Option<String>,
    pub min_day: Option<i64>,
    pub max_day: Option<i64>,
    pub credit_term: Option<i64>,
    pub credit_price: Option<String>,
    pub currency: Option<String>,
    pub credit_intro: Option<String>,
}

impl CreditInfo {
    const STATUS: Field = Field::new("status");
    const MESSAGE: Field = Field::new("message");
    const FULL_MESSAGE: Field = Field::aliased("full_message", &["fullmessage"]);
    const MIN_DAY: Field = Field::aliased("min_day", &["minday"]);
    const MAX_DAY: Field = Field::aliased("max_day", &["maxday"]);
    const CREDIT_TERM: Field = Field::aliased("credit_term", &["creditterm"]);
    const CREDIT_PRICE: Field = Field::aliased("credit_price", &["creditprice"]);
    const CURRENCY: Field = Field::new("currency");
    const CREDIT_INTRO: Field = Field::aliased("credit_intro", &["creditintro"]);
}

impl Entity for CreditInfo {
    const NAME: &'static str = "CreditInfo";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: fields.integer(&Self::STATUS, 0)?,
            message: fields.text(&Self::MESSAGE),
            full_message: fields.optional_text(&Self::FULL_MESSAGE),
            min_day: fields.optional_integer(&Self::MIN_DAY)?,
            max_day: fields.optional_integer(&Self::MAX_DAY)?,
            credit_term: fields.optional_integer(&Self::CREDIT_TERM)?,
            credit_price: fields.optional_text(&Self::CREDIT_PRICE),
            currency: fields.optional_text(&Self::CURRENCY),
            credit_intro: fields.optional_text(&Self::CREDIT_INTRO),
        })
    }
}

// ============================================================================
// Pay Cards
// ============================================================================

/// Result of prepaid card activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayCardResult {
    pub result: String,
    pub message: String,
}

impl PayCardResult {
    const RESULT: Field = Field::new("result");
    const MESSAGE: Field = Field::new("message");

    /// Whether the card was accepted
    pub fn is_success(&self) -> bool {
        self.result == "true"
    }
}

impl Entity for PayCardResult {
    const NAME: &'static str = "PayCardResult";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            result: fields.text(&Self::RESULT),
            message: fields.text(&Self::MESSAGE),
        })
    }
}
