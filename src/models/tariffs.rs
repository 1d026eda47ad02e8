//! Tariffs, virtual services and account freezing

use crate::schema::{Entity, Field, FieldReader, ValidationError};
use serde::Serialize;

/// Tariff or virtual service entry
///
/// Both kinds arrive mixed in one list. Tariffs fill the `tariff_*` fields,
/// virtual services the `vservice_*` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TariffVService {
    pub tariff_name: Option<String>,
    pub tariff_price: Option<String>,
    pub tariff_days_period: Option<String>,
    pub vservice_name: Option<String>,
    pub vservice_price: Option<String>,
    pub vservice_days_period: Option<String>,
}

impl TariffVService {
    const TARIFF_NAME: Field = Field::aliased("tariff_name", &["tariffname"]);
    const TARIFF_PRICE: Field = Field::aliased("tariff_price", &["tariffprice"]);
    const TARIFF_DAYS_PERIOD: Field = Field::aliased("tariff_days_period", &["tariffdaysperiod"]);
    const VSERVICE_NAME: Field = Field::aliased("vservice_name", &["vsrvname"]);
    const VSERVICE_PRICE: Field = Field::aliased("vservice_price", &["vsrvprice"]);
    const VSERVICE_DAYS_PERIOD: Field = Field::aliased("vservice_days_period", &["vsrvdaysperiod"]);

    /// True for a tariff, false for a virtual service
    pub fn is_tariff(&self) -> bool {
        self.tariff_name.is_some()
    }
}

impl Entity for TariffVService {
    const NAME: &'static str = "TariffVService";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            tariff_name: fields.optional_text(&Self::TARIFF_NAME),
            tariff_price: fields.optional_text(&Self::TARIFF_PRICE),
            tariff_days_period: fields.optional_text(&Self::TARIFF_DAYS_PERIOD),
            vservice_name: fields.optional_text(&Self::VSERVICE_NAME),
            vservice_price: fields.optional_text(&Self::VSERVICE_PRICE),
            vservice_days_period: fields.optional_text(&Self::VSERVICE_DAYS_PERIOD),
        })
    }
}

/// Tariff the user may switch to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowedTariff {
    pub tariff: String,
}

impl Entity for AllowedTariff {
    const NAME: &'static str = "AllowedTariff";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            tariff: fields.text(&Field::new("tariff")),
        })
    }
}

/// Freeze status and parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeData {
    pub result: String,
    pub message: String,
    pub freeze_self_available: Option<bool>,
    pub activation_cost: Option<String>,
    pub tariffs_allowed_list: Option<String>,
    pub tariff_allowed_any: Option<bool>,
    pub negative_balance_freeze_allowed: Option<bool>,
    pub user_balance: Option<String>,
    pub user_tariff: Option<String>,
    pub user_tariff_freeze_price: Option<String>,
    pub freeze_status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub freeze_days_charge_active: Option<bool>,
    pub freeze_days_total: Option<String>,
    pub freeze_days_restore: Option<String>,
    pub freeze_days_used: Option<String>,
    pub freeze_days_available: Option<String>,
    pub freeze_days_worked: Option<String>,
    pub freeze_days_left_to_work: Option<String>,
}

impl FreezeData {
    const FREEZE_SELF_AVAILABLE: Field =
        Field::aliased("freeze_self_available", &["freezeSelfAvailable"]);
    const ACTIVATION_COST: Field = Field::aliased("activation_cost", &["activationCost"]);
    const TARIFFS_ALLOWED_LIST: Field =
        Field::aliased("tariffs_allowed_list", &["tariffsAllowedList"]);
    const TARIFF_ALLOWED_ANY: Field = Field::aliased("tariff_allowed_any", &["tariffAllowedAny"]);
    const NEGATIVE_BALANCE_FREEZE_ALLOWED: Field = Field::aliased(
        "negative_balance_freeze_allowed",
        &["negativeBalanceFreezeAllowed"],
    );
    const USER_BALANCE: Field = Field::aliased("user_balance", &["userBalance"]);
    const USER_TARIFF: Field = Field::aliased("user_tariff", &["userTariff"]);
    const USER_TARIFF_FREEZE_PRICE: Field =
        Field::aliased("user_tariff_freeze_price", &["userTariffFreezePrice"]);
    const FREEZE_STATUS: Field = Field::aliased("freeze_status", &["freezeStatus"]);
    const DATE_FROM: Field = Field::aliased("date_from", &["dateFrom"]);
    const DATE_TO: Field = Field::aliased("date_to", &["dateTo"]);
    const FREEZE_DAYS_CHARGE_ACTIVE: Field =
        Field::aliased("freeze_days_charge_active", &["freezeDaysChargeActive"]);
    const FREEZE_DAYS_TOTAL: Field = Field::aliased("freeze_days_total", &["freezeDaysTotal"]);
    const FREEZE_DAYS_RESTORE: Field =
        Field::aliased("freeze_days_restore", &["freezeDaysRestore"]);
    const FREEZE_DAYS_USED: Field = Field::aliased("freeze_days_used", &["freezeDaysUsed"]);
    const FREEZE_DAYS_AVAILABLE: Field =
        Field::aliased("freeze_days_available", &["freezeDaysAvailable"]);
    const FREEZE_DAYS_WORKED: Field = Field::aliased("freeze_days_worked", &["freezeDaysWorked"]);
    const FREEZE_DAYS_LEFT_TO_WORK: Field =
        Field::aliased("freeze_days_left_to_work", &["freezeDaysLeftToWork"]);
}

impl Entity for FreezeData {
    const NAME: &'static str = "FreezeData";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            result: fields.text(&Field::new("result")),
            message: fields.text(&Field::new("message")),
            freeze_self_available: fields.optional_flag(&Self::FREEZE_SELF_AVAILABLE)?,
            activation_cost: fields.optional_text(&Self::ACTIVATION_COST),
            tariffs_allowed_list: fields.optional_text(&Self::TARIFFS_ALLOWED_LIST),
            tariff_allowed_any: fields.optional_flag(&Self::TARIFF_ALLOWED_ANY)?,
            negative_balance_freeze_allowed: fields
                .optional_flag(&Self::NEGATIVE_BALANCE_FREEZE_ALLOWED)?,
            user_balance: fields.optional_text(&Self::USER_BALANCE),
            user_tariff: fields.optional_text(&Self::USER_TARIFF),
            user_tariff_freeze_price: fields.optional_text(&Self::USER_TARIFF_FREEZE_PRICE),
            freeze_status: fields.optional_text(&Self::FREEZE_STATUS),
            date_from: fields.optional_text(&Self::DATE_FROM),
            date_to: fields.optional_text(&Self::DATE_TO),
            freeze_days_charge_active: fields.optional_flag(&Self::FREEZE_DAYS_CHARGE_ACTIVE)?,
            freeze_days_total: fields.optional_text(&Self::FREEZE_DAYS_TOTAL),
            freeze_days_restore: fields.optional_text(&Self::FREEZE_DAYS_RESTORE),
            freeze_days_used: fields.optional_text(&Self::FREEZE_DAYS_USED),
            freeze_days_available: fields.optional_text(&Self::FREEZE_DAYS_AVAILABLE),
            freeze_days_worked: fields.optional_text(&Self::FREEZE_DAYS_WORKED),
            freeze_days_left_to_work: fields.optional_text(&Self::FREEZE_DAYS_LEFT_TO_WORK),
        })
    }
}

/// Result of a freeze or unfreeze request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeResult {
    pub result: String,
    pub message: String,
}

impl FreezeResult {
    /// Whether the server applied the change
    pub fn is_success(&self) -> bool {
        self.result == "Success"
    }
}

impl Entity for FreezeResult {
    const NAME: &'static str = "FreezeResult";

    fn from_fields(fields: &FieldReader<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            result: fields.text(&Field::new("result")),
            message: fields.text(&Field::new("message")),
        })
    }
}
