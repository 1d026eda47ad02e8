//! XMLAgent client
//!
//! [`UbillingClient`] ties the pieces together: an [`Endpoint`] builds the
//! query, a [`Transport`] fetches the body, the decoder extracts records for
//! the endpoint's root tag, and the schema layer turns them into entities.
//!
//! ```rust,ignore
//! use ubilling_xmlagent::{ClientConfig, Credentials, UbillingClient};
//!
//! let client = UbillingClient::new(&ClientConfig::new("http://host/billing/userstats"))?;
//! let creds = Credentials::new("john", "5f4dcc3b5aa765d61d8327deb882cf99")?;
//!
//! if let Some(user) = client.get_user_info(&creds).await? {
//!     println!("{} has {}", user.billing_login, user.cash);
//! }
//! ```

use crate::config::ClientConfig;
use crate::decode::{decode_list, decode_single};
use crate::endpoint::{Credentials, Endpoint, Query};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport};
use crate::models::{
    AgentData, AllowedTariff, Announcement, CreditInfo, FeeCharge, FreezeData, FreezeResult,
    PayCardResult, Payment, PaymentSystem, SignupForm, TariffVService, Ticket,
    TicketCreateResult, UserInfo,
};
use crate::schema::{validate, validate_list, Entity, ValidatedList};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Async client for the XMLAgent API
#[derive(Clone)]
pub struct UbillingClient {
    transport: Arc<dyn Transport>,
    uber_key: Option<String>,
}

impl UbillingClient {
    /// Create a client talking HTTP to `config.base_url`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config.uber_key.clone()))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: impl Transport + 'static, uber_key: Option<String>) -> Self {
        Self {
            transport: Arc::new(transport),
            uber_key: uber_key.filter(|k| !k.is_empty()),
        }
    }

    fn prepare(&self, endpoint: &Endpoint, credentials: &Credentials) -> Query {
        let mut query = endpoint.query(credentials);
        if let Some(key) = &self.uber_key {
            query.set("uberkey", key.as_str());
        }
        query
    }

    async fn fetch(&self, endpoint: &Endpoint, credentials: &Credentials) -> Result<Bytes> {
        let query = self.prepare(endpoint, credentials);
        let raw = self.transport.get(&query).await?;
        debug!("{} returned {} bytes", endpoint.name(), raw.len());
        Ok(raw)
    }

    async fn fetch_single<E: Entity>(
        &self,
        endpoint: Endpoint,
        credentials: &Credentials,
    ) -> Result<Option<E>> {
        let raw = self.fetch(&endpoint, credentials).await?;
        single::<E>(&raw, endpoint.root_tag())
    }

    async fn fetch_list<E: Entity>(
        &self,
        endpoint: Endpoint,
        credentials: &Credentials,
    ) -> Result<ValidatedList<E>> {
        let raw = self.fetch(&endpoint, credentials).await?;
        let records = decode_list(&raw, endpoint.root_tag())?;
        let list = validate_list::<E>(&records);
        if !list.is_complete() {
            debug!(
                "{}: {} of {} records rejected",
                endpoint.name(),
                list.rejected.len(),
                records.len()
            );
        }
        Ok(list)
    }

    // ------------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------------

    /// Account details
    pub async fn get_user_info(&self, credentials: &Credentials) -> Result<Option<UserInfo>> {
        self.fetch_single(Endpoint::UserInfo, credentials).await
    }

    /// Whether the server accepts the credentials
    ///
    /// A rejecting HTTP status means `false`; other failures propagate.
    pub async fn check_auth(&self, credentials: &Credentials) -> Result<bool> {
        match self.fetch(&Endpoint::JustAuth, credentials).await {
            Ok(_) => Ok(true),
            Err(Error::HttpStatus { status, .. }) => {
                debug!("Auth check rejected with HTTP {}", status);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Contractor assigned to the user
    pub async fn get_agent_data(&self, credentials: &Credentials) -> Result<Option<AgentData>> {
        self.fetch_single(Endpoint::AgentAssigned, credentials).await
    }

    // ------------------------------------------------------------------------
    // Payments and charges
    // ------------------------------------------------------------------------

    /// Payment history
    pub async fn get_payments(&self, credentials: &Credentials) -> Result<ValidatedList<Payment>> {
        self.fetch_list(Endpoint::Payments, credentials).await
    }

    /// Fee charge history, optionally bounded by `YYYY-MM-DD` dates
    pub async fn get_fee_charges(
        &self,
        credentials: &Credentials,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<ValidatedList<FeeCharge>> {
        let endpoint = Endpoint::FeeCharges {
            date_from: date_from.map(str::to_string),
            date_to: date_to.map(str::to_string),
        };
        self.fetch_list(endpoint, credentials).await
    }

    /// OpenPayz payment systems
    pub async fn get_payment_systems(
        &self,
        credentials: &Credentials,
    ) -> Result<ValidatedList<PaymentSystem>> {
        self.fetch_list(Endpoint::PaymentSystems, credentials).await
    }

    /// Take a credit
    pub async fn get_credit(&self, credentials: &Credentials) -> Result<Option<CreditInfo>> {
        self.fetch_single(Endpoint::Credit, credentials).await
    }

    /// Check whether a credit can be taken, without taking it
    pub async fn check_credit(&self, credentials: &Credentials) -> Result<Option<CreditInfo>> {
        self.fetch_single(Endpoint::CheckCredit, credentials).await
    }

    /// Activate a prepaid card
    pub async fn use_pay_card(
        &self,
        credentials: &Credentials,
        card_number: &str,
    ) -> Result<Option<PayCardResult>> {
        let endpoint = Endpoint::PayCard {
            card_number: card_number.to_string(),
        };
        self.fetch_single(endpoint, credentials).await
    }

    // ------------------------------------------------------------------------
    // Announcements and tickets
    // ------------------------------------------------------------------------

    /// Active announcements
    pub async fn get_announcements(
        &self,
        credentials: &Credentials,
    ) -> Result<ValidatedList<Announcement>> {
        self.fetch_list(Endpoint::Announcements, credentials).await
    }

    /// Mark every announcement as read
    pub async fn mark_announcements_read(&self, credentials: &Credentials) -> Result<()> {
        self.fetch(&Endpoint::AnnouncementsReadAll, credentials)
            .await
            .map(|_| ())
    }

    /// Tickets and replies
    pub async fn get_tickets(&self, credentials: &Credentials) -> Result<ValidatedList<Ticket>> {
        self.fetch_list(Endpoint::Tickets, credentials).await
    }

    /// Open a ticket, or reply to ticket `reply_id`
    pub async fn create_ticket(
        &self,
        credentials: &Credentials,
        text: &str,
        reply_id: Option<i64>,
    ) -> Result<Option<TicketCreateResult>> {
        let endpoint = Endpoint::TicketCreate {
            text: text.to_string(),
            reply_id,
        };
        self.fetch_single(endpoint, credentials).await
    }

    /// Submit a connection request
    pub async fn create_signup_request(
        &self,
        credentials: &Credentials,
        form: &SignupForm,
    ) -> Result<Option<TicketCreateResult>> {
        let endpoint = Endpoint::SignupRequest;
        let query = self.prepare(&endpoint, credentials);
        let raw = self.transport.post(&query, &form.to_body()).await?;
        debug!("{} returned {} bytes", endpoint.name(), raw.len());
        single(&raw, endpoint.root_tag())
    }

    // ------------------------------------------------------------------------
    // Tariffs and freezing
    // ------------------------------------------------------------------------

    /// Current tariff and virtual services
    pub async fn get_tariff_vservices(
        &self,
        credentials: &Credentials,
    ) -> Result<ValidatedList<TariffVService>> {
        self.fetch_list(Endpoint::TariffVServices, credentials).await
    }

    /// Tariffs the user may switch to
    pub async fn get_allowed_tariffs(
        &self,
        credentials: &Credentials,
    ) -> Result<ValidatedList<AllowedTariff>> {
        self.fetch_list(Endpoint::TariffsToSwitch, credentials).await
    }

    /// Every non-archived tariff and virtual service
    pub async fn get_active_tariffs_vservices(
        &self,
        credentials: &Credentials,
    ) -> Result<ValidatedList<TariffVService>> {
        self.fetch_list(Endpoint::ActiveTariffsVServices, credentials)
            .await
    }

    /// Freeze status
    pub async fn get_freeze_data(&self, credentials: &Credentials) -> Result<Option<FreezeData>> {
        self.fetch_single(Endpoint::FreezeData, credentials).await
    }

    /// Freeze the account
    pub async fn freeze_user(&self, credentials: &Credentials) -> Result<Option<FreezeResult>> {
        self.fetch_single(Endpoint::DoFreeze, credentials).await
    }

    /// Unfreeze the account (needs self-unfreeze enabled on the server)
    pub async fn unfreeze_user(&self, credentials: &Credentials) -> Result<Option<FreezeResult>> {
        self.fetch_single(Endpoint::DoUnfreeze, credentials).await
    }

    // ------------------------------------------------------------------------
    // Connectivity
    // ------------------------------------------------------------------------

    /// Whether the userstats URL is reachable
    pub async fn check_connection(&self) -> bool {
        self.transport.reachable().await
    }
}

impl std::fmt::Debug for UbillingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UbillingClient")
            .field("uber_key", &self.uber_key.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

fn single<E: Entity>(raw: &[u8], root_tag: &str) -> Result<Option<E>> {
    match decode_single(raw, root_tag)? {
        Some(record) => Ok(Some(validate::<E>(&record)?)),
        None => Ok(None),
    }
}
