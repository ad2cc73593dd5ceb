//! Hotelier CLI
//!
//! Command-line console for the Hotelier tenant-administration backend.
//!
//! # Usage
//!
//! ```bash
//! hotelier login --token <bearer-token>
//! hotelier tenants list --status suspended
//! hotelier tenants create --hotel-name "Grand Plaza" --email owner@grandplaza.example \
//!     --phone "+1-555-0100" --address "1 Plaza Way" --plan pro
//! hotelier tenants suspend t-42 --reason "payment overdue"
//! hotelier tenants delete t-42 --yes
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use hotelier_api::{SessionEvent, SessionStore, TenantApi, TenantGateway, Transport};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

const DEFAULT_API_URL: &str = "http://localhost:9090";

#[derive(Parser)]
#[command(name = "hotelier")]
#[command(version = "0.1.0")]
#[command(about = "Hotelier tenant-administration console", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "HOTELIER_API_URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from the config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer credential for subsequent calls
    Login {
        #[arg(long)]
        token: String,
    },
    /// Remove the stored credential
    Logout,
    /// Manage tenants
    Tenants {
        #[command(subcommand)]
        action: TenantCommands,
    },
}

#[derive(Subcommand)]
pub enum TenantCommands {
    /// List tenants, paginated and optionally filtered by status
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        /// all | active | suspended | deleted
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one tenant
    Get { id: String },
    /// Create a tenant
    Create {
        #[arg(long)]
        hotel_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        /// free | pro | enterprise
        #[arg(long, default_value = "free")]
        plan: String,
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Update a tenant's editable fields (email and plan are not editable here)
    Update {
        id: String,
        #[arg(long)]
        hotel_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Change the subscription plan
    Plan {
        id: String,
        /// free | pro | enterprise
        plan: String,
    },
    /// Suspend a tenant (reason is mandatory)
    Suspend {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Reactivate a suspended tenant
    Activate { id: String },
    /// Delete a tenant
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();

    if let Err(e) = run(cli, config).await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut config: config::Config) -> Result<(), String> {
    match cli.command {
        Commands::Login { token } => {
            config.access_token = Some(token);
            config.save(cli.profile.as_deref())?;
            println!("{}", "Credential stored.".green());
            Ok(())
        }

        Commands::Logout => {
            config.access_token = None;
            config.save(cli.profile.as_deref())?;
            println!("Credential removed.");
            Ok(())
        }

        Commands::Tenants { action } => {
            let api_url = cli
                .api_url
                .clone()
                .or_else(|| config.api_url.clone())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string());

            let session = match &config.access_token {
                Some(token) => SessionStore::with_token(token),
                None => SessionStore::new(),
            };
            let transport =
                Arc::new(Transport::new(&api_url, session).map_err(|e| e.to_string())?);
            let mut session_events = transport.subscribe();
            let gateway: Arc<dyn TenantGateway> = Arc::new(TenantApi::new(transport.clone()));

            let result = commands::tenants::handle(action, gateway, cli.format).await;

            // The transport has already cleared the in-memory credential on a
            // 401; the shell's job is the persisted one and the user hint.
            if matches!(session_events.try_recv(), Ok(SessionEvent::Unauthorized)) {
                config.access_token = None;
                let _ = config.save(cli.profile.as_deref());
                eprintln!(
                    "{}",
                    "Session expired. Run `hotelier login --token <token>` to authenticate again."
                        .yellow()
                );
            }

            result
        }
    }
}
