//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::UbillingClient;
use crate::config::ClientConfig;
use crate::decode::{detect, list_from_payload, single_from_payload};
use crate::endpoint::Credentials;
use crate::error::{Error, Result, ResultExt};
use crate::schema::ValidatedList;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        if !self.cli.command.needs_server() {
            return self.decode();
        }

        let config = self.client_config()?;
        debug!("Using {:?}", config);
        let client = UbillingClient::new(&config)?;

        if !self.cli.command.needs_credentials() {
            let reachable = client.check_connection().await;
            self.output_message(&json!({ "reachable": reachable }));
            return Ok(());
        }

        let creds = self.credentials()?;
        self.call(&client, &creds).await
    }

    async fn call(&self, client: &UbillingClient, creds: &Credentials) -> Result<()> {
        match &self.cli.command {
            Commands::UserInfo => self.emit_single(client.get_user_info(creds).await?),
            Commands::CheckAuth => {
                let ok = client.check_auth(creds).await?;
                self.output_message(&json!({ "authenticated": ok }));
                Ok(())
            }
            Commands::Payments => self.emit_list("payment", client.get_payments(creds).await?),
            Commands::FeeCharges { from, to } => self.emit_list(
                "fee charge",
                client
                    .get_fee_charges(creds, from.as_deref(), to.as_deref())
                    .await?,
            ),
            Commands::Announcements => {
                self.emit_list("announcement", client.get_announcements(creds).await?)
            }
            Commands::MarkRead => {
                client.mark_announcements_read(creds).await?;
                self.output_message(&json!({ "status": "ok" }));
                Ok(())
            }
            Commands::Tickets => self.emit_list("ticket", client.get_tickets(creds).await?),
            Commands::CreateTicket { text, reply_to } => {
                self.emit_single(client.create_ticket(creds, text, *reply_to).await?)
            }
            Commands::PaymentSystems => {
                self.emit_list("payment system", client.get_payment_systems(creds).await?)
            }
            Commands::Credit { check } => {
                let info = if *check {
                    client.check_credit(creds).await?
                } else {
                    client.get_credit(creds).await?
                };
                self.emit_single(info)
            }
            Commands::PayCard { number } => {
                self.emit_single(client.use_pay_card(creds, number).await?)
            }
            Commands::Agent => self.emit_single(client.get_agent_data(creds).await?),
            Commands::Tariffs { active } => {
                let items = if *active {
                    client.get_active_tariffs_vservices(creds).await?
                } else {
                    client.get_tariff_vservices(creds).await?
                };
                self.emit_list("tariff", items)
            }
            Commands::AllowedTariffs => {
                self.emit_list("allowed tariff", client.get_allowed_tariffs(creds).await?)
            }
            Commands::FreezeStatus => self.emit_single(client.get_freeze_data(creds).await?),
            Commands::Freeze => self.emit_single(client.freeze_user(creds).await?),
            Commands::Unfreeze => self.emit_single(client.unfreeze_user(creds).await?),
            Commands::Ping | Commands::Decode { .. } => Ok(()),
        }
    }

    /// Assemble the client config: file, then environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        }
        .with_env_overrides();

        if let Some(url) = self.cli.url.as_deref().filter(|u| !u.is_empty()) {
            config.base_url = url.to_string();
        }
        if let Some(key) = self.cli.uber_key.as_deref().filter(|k| !k.is_empty()) {
            config.uber_key = Some(key.to_string());
        }

        if config.base_url.is_empty() {
            return Err(Error::config(
                "Userstats URL not specified (use --url or UBILLING_URL)",
            ));
        }
        Ok(config)
    }

    /// Subscriber credentials from flags or environment
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::new(
            self.cli.login.clone().unwrap_or_default(),
            self.cli.password.clone().unwrap_or_default(),
        )
    }

    fn decode(&self) -> Result<()> {
        if let Commands::Decode {
            file,
            root_tag,
            list,
        } = &self.cli.command
        {
            let decoded = self.decode_file(file, root_tag, *list)?;
            self.output_message(&decoded);
        }
        Ok(())
    }

    /// Decode a saved body into `{format, records}`
    pub fn decode_file(&self, file: &Path, root_tag: &str, list: bool) -> Result<Value> {
        let raw = fs::read(file)
            .with_context(|| format!("Failed to read response file '{}'", file.display()))?;

        let payload = detect(&raw);
        let format = payload.format();

        let records = if list {
            serde_json::to_value(list_from_payload(payload, root_tag)?)?
        } else {
            serde_json::to_value(single_from_payload(payload, root_tag)?)?
        };

        Ok(json!({
            "format": format,
            "records": records,
        }))
    }

    fn emit_single<E: Serialize>(&self, entity: Option<E>) -> Result<()> {
        let value = match entity {
            Some(entity) => serde_json::to_value(entity)?,
            None => Value::Null,
        };
        self.output_message(&value);
        Ok(())
    }

    fn emit_list<E: Serialize>(&self, what: &str, list: ValidatedList<E>) -> Result<()> {
        for rejected in &list.rejected {
            warn!("Skipping {} #{}: {}", what, rejected.index, rejected.error);
        }
        let value = serde_json::to_value(list.into_entities())?;
        self.output_message(&value);
        Ok(())
    }

    /// Render a message in the selected format
    pub fn render(&self, msg: &Value) -> String {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg).unwrap_or_default(),
            OutputFormat::Pretty => serde_json::to_string_pretty(msg).unwrap_or_default(),
        }
    }

    fn output_message(&self, msg: &Value) {
        println!("{}", self.render(msg));
    }
}
