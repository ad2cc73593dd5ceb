//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use hotelier_api::Tenant;
use hotelier_console::ConsoleEvent;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Hotel")]
    hotel: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Plan")]
    plan: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Tenant> for TenantRow {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.tenant_id.clone(),
            hotel: tenant.hotel_name.clone(),
            email: tenant.email.clone(),
            plan: tenant.subscription_plan.to_string(),
            status: tenant.status.to_string(),
            updated: tenant.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl OutputFormat {
    pub fn print_tenants(&self, tenants: &[Tenant]) {
        match self {
            OutputFormat::Table => {
                let rows: Vec<TenantRow> = tenants.iter().map(TenantRow::from).collect();
                println!("{}", Table::new(rows));
            }
            _ => self.print_serialized(&tenants),
        }
    }

    pub fn print_tenant(&self, tenant: &Tenant) {
        match self {
            OutputFormat::Table => {
                println!("{}", Table::new([TenantRow::from(tenant)]));
                if let Some(metadata) = &tenant.metadata {
                    println!("{} {metadata}", "Metadata:".bold());
                }
            }
            _ => self.print_serialized(tenant),
        }
    }

    fn print_serialized<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
        }
    }
}

/// Render a controller notice the way the web console renders toasts.
pub fn print_notice(event: &ConsoleEvent) {
    match event {
        ConsoleEvent::Success(msg) => println!("{}", msg.green()),
        ConsoleEvent::Failure(msg) => eprintln!("{}", msg.red()),
    }
}
