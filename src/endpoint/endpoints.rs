//! Endpoint catalogue

use super::types::{Credentials, Query};
use base64::Engine as _;

/// One XMLAgent call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Account details (`userdata`)
    UserInfo,
    /// Credential check without payload
    JustAuth,
    /// Payment history
    Payments,
    /// Fee charge history, optionally bounded by `YYYY-MM-DD` dates
    FeeCharges {
        date_from: Option<String>,
        date_to: Option<String>,
    },
    /// Active announcements
    Announcements,
    /// Mark every announcement as read
    AnnouncementsReadAll,
    /// Tickets and replies
    Tickets,
    /// New support ticket, or a reply when `reply_id` is set
    TicketCreate { text: String, reply_id: Option<i64> },
    /// Connection (signup) request; details travel in the POST body
    SignupRequest,
    /// OpenPayz payment systems
    PaymentSystems,
    /// Contractor assigned to the user
    AgentAssigned,
    /// Current tariff and virtual services
    TariffVServices,
    /// Tariffs the user may switch to
    TariffsToSwitch,
    /// Every non-archived tariff and virtual service
    ActiveTariffsVServices,
    /// Freeze status
    FreezeData,
    /// Freeze the account
    DoFreeze,
    /// Unfreeze the account
    DoUnfreeze,
    /// Take a credit
    Credit,
    /// Check whether a credit can be taken
    CheckCredit,
    /// Activate a prepaid card
    PayCard { card_number: String },
}

impl Endpoint {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::UserInfo => "user_info",
            Endpoint::JustAuth => "just_auth",
            Endpoint::Payments => "payments",
            Endpoint::FeeCharges { .. } => "fee_charges",
            Endpoint::Announcements => "announcements",
            Endpoint::AnnouncementsReadAll => "announcements_read_all",
            Endpoint::Tickets => "tickets",
            Endpoint::TicketCreate { .. } => "ticket_create",
            Endpoint::SignupRequest => "signup_request",
            Endpoint::PaymentSystems => "payment_systems",
            Endpoint::AgentAssigned => "agent_assigned",
            Endpoint::TariffVServices => "tariff_vservices",
            Endpoint::TariffsToSwitch => "tariffs_to_switch",
            Endpoint::ActiveTariffsVServices => "active_tariffs_vservices",
            Endpoint::FreezeData => "freeze_data",
            Endpoint::DoFreeze => "do_freeze",
            Endpoint::DoUnfreeze => "do_unfreeze",
            Endpoint::Credit => "credit",
            Endpoint::CheckCredit => "check_credit",
            Endpoint::PayCard { .. } => "pay_card",
        }
    }

    /// Element name wrapping this endpoint's records in XML responses
    pub fn root_tag(&self) -> &'static str {
        match self {
            Endpoint::UserInfo => "userdata",
            Endpoint::Payments => "payment",
            Endpoint::FeeCharges { .. } => "feecharge",
            Endpoint::Tickets => "ticket",
            Endpoint::PaymentSystems => "paysys",
            Endpoint::AgentAssigned => "agentdata",
            Endpoint::TariffVServices => "tariffvservices",
            Endpoint::TariffsToSwitch => "tarifftoswitchallowed",
            Endpoint::ActiveTariffsVServices => "activetariffsvservices",
            Endpoint::FreezeData => "freezedata",
            Endpoint::DoFreeze | Endpoint::DoUnfreeze => "dofreeze",
            Endpoint::JustAuth
            | Endpoint::Announcements
            | Endpoint::AnnouncementsReadAll
            | Endpoint::TicketCreate { .. }
            | Endpoint::SignupRequest
            | Endpoint::Credit
            | Endpoint::CheckCredit
            | Endpoint::PayCard { .. } => "data",
        }
    }

    /// Query parameters selecting this endpoint for `credentials`
    pub fn query(&self, credentials: &Credentials) -> Query {
        match self {
            Endpoint::UserInfo => base(credentials),
            Endpoint::JustAuth => base(credentials).with("justauth", "true"),
            Endpoint::Payments => base(credentials).with("payments", "true"),
            Endpoint::FeeCharges { date_from, date_to } => {
                let mut query = base(credentials).with("feecharges", "true");
                if let Some(from) = date_from.as_deref().filter(|d| !d.is_empty()) {
                    query.set("datefrom", from);
                }
                if let Some(to) = date_to.as_deref().filter(|d| !d.is_empty()) {
                    query.set("dateto", to);
                }
                query
            }
            Endpoint::Announcements => base(credentials).with("announcements", "true"),
            Endpoint::AnnouncementsReadAll => base(credentials).with("annreadall", "true"),
            Endpoint::Tickets => base(credentials).with("tickets", "true"),
            Endpoint::TicketCreate { text, reply_id } => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
                let mut query = base(credentials)
                    .with("ticketcreate", "true")
                    .with("tickettype", "support_request")
                    .with("tickettext", encoded);
                if let Some(id) = reply_id {
                    query.set("reply_id", id.to_string());
                }
                query
            }
            Endpoint::SignupRequest => base(credentials)
                .with("ticketcreate", "true")
                .with("tickettype", "signup_request"),
            Endpoint::PaymentSystems => base(credentials).with("opayz", "true"),
            Endpoint::AgentAssigned => base(credentials).with("agentassigned", "true"),
            Endpoint::TariffVServices => base(credentials).with("tariffvservices", "true"),
            Endpoint::TariffsToSwitch => base(credentials).with("tarifftoswitchallowed", "true"),
            Endpoint::ActiveTariffsVServices => {
                base(credentials).with("activetariffsvservices", "true")
            }
            Endpoint::FreezeData => base(credentials).with("freezedata", "true"),
            Endpoint::DoFreeze => base(credentials).with("dofreeze", "true"),
            Endpoint::DoUnfreeze => base(credentials).with("dounfreeze", "true"),
            Endpoint::Credit => credit(credentials),
            Endpoint::CheckCredit => credit(credentials).with("justcheck", "true"),
            Endpoint::PayCard { card_number } => Query::new()
                .with("module", "paycards")
                .with("agentpaycards", "true")
                .with("json", "true")
                .with("paycard", card_number.as_str())
                .with("uberlogin", credentials.login())
                .with("uberpassword", credentials.password()),
        }
    }
}

fn base(credentials: &Credentials) -> Query {
    Query::new()
        .with("xmlagent", "true")
        .with("json", "true")
        .with("uberlogin", credentials.login())
        .with("uberpassword", credentials.password())
}

fn credit(credentials: &Credentials) -> Query {
    Query::new()
        .with("module", "creditor")
        .with("agentcredit", "true")
        .with("json", "true")
        .with("uberlogin", credentials.login())
        .with("uberpassword", credentials.password())
}
