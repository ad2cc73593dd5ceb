//! Tenant commands

use super::flush_notices;
use crate::output::OutputFormat;
use crate::TenantCommands;
use colored::Colorize;
use hotelier_api::{StatusFilter, SubscriptionPlan, TenantGateway, DEFAULT_PAGE_SIZE};
use hotelier_console::{
    CreateController, DetailController, DetailState, EditController, ListController, LoadPhase,
};
use std::io::{self, Write};
use std::sync::Arc;

pub async fn handle(
    action: TenantCommands,
    gateway: Arc<dyn TenantGateway>,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        TenantCommands::List { page, size, status } => {
            let filter = match status {
                Some(s) => s.parse::<StatusFilter>()?,
                None => StatusFilter::All,
            };
            let mut ctrl = ListController::with_intent(gateway, page, size, filter);
            let mut rx = ctrl.subscribe();
            ctrl.load().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            render_list(&ctrl, format);
            Ok(())
        }

        TenantCommands::Get { id } => {
            let mut ctrl = DetailController::new(gateway, id);
            ctrl.load().await;
            match ctrl.state() {
                DetailState::Loaded(tenant) => {
                    format.print_tenant(tenant);
                    Ok(())
                }
                DetailState::NotFound => Err("Tenant not found".into()),
                DetailState::Failed(message) => Err(message.clone()),
                DetailState::Loading => Err("tenant is still loading".into()),
            }
        }

        TenantCommands::Create {
            hotel_name,
            email,
            phone,
            address,
            plan,
            metadata,
        } => {
            let mut ctrl = CreateController::new(gateway);
            let mut rx = ctrl.subscribe();
            {
                let draft = ctrl.draft_mut();
                draft.hotel_name = hotel_name;
                draft.email = email;
                draft.phone_number = phone;
                draft.address = address;
                draft.subscription_plan = plan.parse::<SubscriptionPlan>()?;
                draft.metadata = metadata.unwrap_or_default();
            }
            let created = ctrl.submit().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            if let Some(tenant) = created {
                format.print_tenant(&tenant);
            }
            Ok(())
        }

        TenantCommands::Update {
            id,
            hotel_name,
            phone,
            address,
            metadata,
        } => {
            let mut ctrl = EditController::new(gateway, id);
            let mut rx = ctrl.subscribe();
            ctrl.load().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            {
                let draft = ctrl.draft_mut();
                if let Some(value) = hotel_name {
                    draft.hotel_name = value;
                }
                if let Some(value) = phone {
                    draft.phone_number = value;
                }
                if let Some(value) = address {
                    draft.address = value;
                }
                if let Some(value) = metadata {
                    draft.metadata = value;
                }
            }
            ctrl.submit().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            if let Some(tenant) = ctrl.tenant() {
                format.print_tenant(tenant);
            }
            Ok(())
        }

        TenantCommands::Plan { id, plan } => {
            let plan = plan.parse::<SubscriptionPlan>()?;
            let mut ctrl = EditController::new(gateway, id);
            let mut rx = ctrl.subscribe();
            ctrl.load().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            ctrl.select_plan(plan);
            if !ctrl.can_update_plan() {
                println!("Tenant is already on the {plan} plan");
                return Ok(());
            }
            ctrl.update_plan().await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            if let Some(tenant) = ctrl.tenant() {
                format.print_tenant(tenant);
            }
            Ok(())
        }

        TenantCommands::Suspend { id, reason } => {
            let mut ctrl = ListController::new(gateway);
            let mut rx = ctrl.subscribe();
            ctrl.suspend(&id, &reason).await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            render_list(&ctrl, format);
            Ok(())
        }

        TenantCommands::Activate { id } => {
            let mut ctrl = ListController::new(gateway);
            let mut rx = ctrl.subscribe();
            ctrl.activate(&id).await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            render_list(&ctrl, format);
            Ok(())
        }

        TenantCommands::Delete { id, yes } => {
            if !yes && !confirm_delete(&id)? {
                println!("Aborted.");
                return Ok(());
            }
            let mut ctrl = ListController::new(gateway);
            let mut rx = ctrl.subscribe();
            ctrl.delete(&id).await;
            if let Some(failure) = flush_notices(&mut rx) {
                return Err(failure);
            }
            render_list(&ctrl, format);
            Ok(())
        }
    }
}

fn confirm_delete(id: &str) -> Result<bool, String> {
    print!("Delete tenant {id}? This action cannot be undone. [y/N] ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn render_list(ctrl: &ListController, format: OutputFormat) {
    if !matches!(ctrl.phase(), LoadPhase::Loaded) {
        return;
    }
    format.print_tenants(ctrl.tenants());
    if matches!(format, OutputFormat::Table) {
        let prev = pager_control("< prev", ctrl.can_prev());
        let next = pager_control("next >", ctrl.can_next());
        println!(
            "Page {} of {} ({} tenants)  {}  {}",
            ctrl.page() + 1,
            ctrl.total_pages(),
            ctrl.total(),
            prev,
            next,
        );
        if matches!(ctrl.filter(), StatusFilter::Only(_)) {
            println!(
                "{}",
                format!("Filtered view: single batch of up to {DEFAULT_PAGE_SIZE}, count reflects the returned batch")
                    .dimmed()
            );
        }
    }
}

fn pager_control(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        label.dimmed().to_string()
    }
}
