//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ubilling XMLAgent client
#[derive(Parser, Debug)]
#[command(name = "ubilling")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Userstats URL, e.g. http://host/billing/userstats
    #[arg(short, long, global = true, env = "UBILLING_URL")]
    pub url: Option<String>,

    /// Client config file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subscriber login
    #[arg(short, long, global = true, env = "UBILLING_LOGIN")]
    pub login: Option<String>,

    /// MD5 hash of the subscriber password
    #[arg(short, long, global = true, env = "UBILLING_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Extended-auth key (MD5 of the Ubilling serial)
    #[arg(long, global = true, hide_env_values = true)]
    pub uber_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show account details
    UserInfo,

    /// Check the credentials
    CheckAuth,

    /// List payments
    Payments,

    /// List fee charges
    FeeCharges {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// List announcements
    Announcements,

    /// Mark all announcements as read
    MarkRead,

    /// List tickets and replies
    Tickets,

    /// Open a ticket or reply to one
    CreateTicket {
        /// Ticket text (plain, encoded before sending)
        text: String,

        /// Reply to this ticket id
        #[arg(long)]
        reply_to: Option<i64>,
    },

    /// List online payment systems
    PaymentSystems,

    /// Take a credit
    Credit {
        /// Only check whether a credit is available
        #[arg(long)]
        check: bool,
    },

    /// Activate a prepaid card
    PayCard {
        /// Card number
        number: String,
    },

    /// Show the assigned contractor
    Agent,

    /// List the current tariff and virtual services
    Tariffs {
        /// List every active tariff and service instead
        #[arg(long)]
        active: bool,
    },

    /// List tariffs available to switch to
    AllowedTariffs,

    /// Show freeze status
    FreezeStatus,

    /// Freeze the account
    Freeze,

    /// Unfreeze the account
    Unfreeze,

    /// Check that the userstats URL is reachable
    Ping,

    /// Decode a saved response body without contacting a server
    Decode {
        /// File holding the raw body (JSON or XML)
        file: PathBuf,

        /// Element name wrapping the records
        #[arg(long)]
        root_tag: String,

        /// Decode every record instead of the first one
        #[arg(long)]
        list: bool,
    },
}

impl Commands {
    /// Whether the command talks to a server
    pub fn needs_server(&self) -> bool {
        !matches!(self, Commands::Decode { .. })
    }

    /// Whether the command needs subscriber credentials
    pub fn needs_credentials(&self) -> bool {
        !matches!(self, Commands::Decode { .. } | Commands::Ping)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
