//! Edit view controller.
//!
//! Holds the last-fetched tenant plus a distinct editable draft. Submitting
//! sends only the editable subset (hotel name, phone, address, metadata);
//! email and subscription plan never appear in that body. Plan changes go
//! through the separate subscription operation, gated so a no-op call is
//! never issued.

use crate::draft::TenantDraft;
use crate::events::{failure_message, ConsoleEvent};
use crate::list::LoadPhase;
use hotelier_api::{SubscriptionPlan, Tenant, TenantGateway};
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct EditController {
    gateway: Arc<dyn TenantGateway>,
    tenant_id: String,
    tenant: Option<Tenant>,
    draft: TenantDraft,
    selected_plan: SubscriptionPlan,
    phase: LoadPhase,
    events: broadcast::Sender<ConsoleEvent>,
}

impl EditController {
    pub fn new(gateway: Arc<dyn TenantGateway>, tenant_id: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            gateway,
            tenant_id: tenant_id.into(),
            tenant: None,
            draft: TenantDraft::default(),
            selected_plan: SubscriptionPlan::default(),
            phase: LoadPhase::Idle,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn tenant(&self) -> Option<&Tenant> {
        self.tenant.as_ref()
    }

    pub fn draft(&self) -> &TenantDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TenantDraft {
        &mut self.draft
    }

    pub fn selected_plan(&self) -> SubscriptionPlan {
        self.selected_plan
    }

    pub fn select_plan(&mut self, plan: SubscriptionPlan) {
        self.selected_plan = plan;
    }

    /// The "update plan" action is disabled while the selection equals the
    /// loaded tenant's plan.
    pub fn can_update_plan(&self) -> bool {
        self.tenant
            .as_ref()
            .is_some_and(|t| t.subscription_plan != self.selected_plan)
    }

    /// Fetch the tenant. The draft is seeded only on the first successful
    /// load; a refetch updates the fetched copy without clobbering
    /// in-progress edits.
    pub async fn load(&mut self) {
        self.phase = LoadPhase::Loading;
        match self.gateway.get(&self.tenant_id).await {
            Ok(tenant) => {
                if self.tenant.is_none() {
                    self.draft = TenantDraft::from_tenant(&tenant);
                    self.selected_plan = tenant.subscription_plan;
                }
                self.tenant = Some(tenant);
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                let message = failure_message("load tenant", &err);
                self.phase = LoadPhase::Failed(message.clone());
                self.emit(ConsoleEvent::Failure(message));
            }
        }
    }

    /// Submit the editable subset.
    pub async fn submit(&mut self) {
        if !self.draft.has_required_fields(false) {
            self.emit(ConsoleEvent::Failure("Please fill in all required fields".into()));
            return;
        }
        match self
            .gateway
            .update(&self.tenant_id, &self.draft.update_request())
            .await
        {
            Ok(tenant) => {
                self.tenant = Some(tenant);
                self.emit(ConsoleEvent::Success("Tenant updated successfully".into()));
            }
            Err(err) => self.emit(ConsoleEvent::Failure(failure_message("update tenant", &err))),
        }
    }

    /// Change the subscription plan through its dedicated operation. A no-op
    /// selection returns without contacting the gateway.
    pub async fn update_plan(&mut self) {
        if !self.can_update_plan() {
            return;
        }
        match self
            .gateway
            .update_subscription(&self.tenant_id, self.selected_plan)
            .await
        {
            Ok(tenant) => {
                self.tenant = Some(tenant);
                self.emit(ConsoleEvent::Success(
                    "Subscription plan updated successfully".into(),
                ));
            }
            Err(err) => {
                self.emit(ConsoleEvent::Failure(failure_message("update subscription", &err)));
            }
        }
    }

    fn emit(&self, event: ConsoleEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_tenant, FakeGateway};

    async fn loaded_controller(gateway: &Arc<FakeGateway>) -> EditController {
        gateway.push_tenant(sample_tenant("t-1"));
        let mut ctrl = EditController::new(gateway.clone(), "t-1");
        ctrl.load().await;
        ctrl
    }

    #[tokio::test]
    async fn submit_sends_only_the_editable_subset() {
        let gateway = FakeGateway::new();
        let mut ctrl = loaded_controller(&gateway).await;

        ctrl.draft_mut().hotel_name = "Grand Plaza".into();
        ctrl.submit().await;

        let update_call = gateway
            .calls()
            .into_iter()
            .find(|c| c.starts_with("update t-1"))
            .expect("update issued");
        assert!(update_call.contains("Grand Plaza"));
        assert!(!update_call.contains("email"));
        assert!(!update_call.contains("subscriptionPlan"));
    }

    #[tokio::test]
    async fn submit_rejects_missing_required_fields_locally() {
        let gateway = FakeGateway::new();
        let mut ctrl = loaded_controller(&gateway).await;
        let mut rx = ctrl.subscribe();

        ctrl.draft_mut().phone_number.clear();
        ctrl.submit().await;

        assert_eq!(gateway.calls(), vec!["get t-1"], "no update call issued");
        let notice = rx.try_recv().expect("failure notice emitted");
        assert_eq!(
            notice,
            ConsoleEvent::Failure("Please fill in all required fields".into())
        );
    }

    #[tokio::test]
    async fn plan_update_is_gated_against_no_op_calls() {
        let gateway = FakeGateway::new();
        let mut ctrl = loaded_controller(&gateway).await;

        // sample tenant is on Pro; selecting Pro again must not call out.
        ctrl.select_plan(SubscriptionPlan::Pro);
        assert!(!ctrl.can_update_plan());
        ctrl.update_plan().await;
        assert_eq!(gateway.calls(), vec!["get t-1"]);

        let mut upgraded = sample_tenant("t-1");
        upgraded.subscription_plan = SubscriptionPlan::Enterprise;
        gateway.push_tenant(upgraded);

        ctrl.select_plan(SubscriptionPlan::Enterprise);
        assert!(ctrl.can_update_plan());
        ctrl.update_plan().await;

        assert_eq!(
            gateway.calls(),
            vec!["get t-1", "updateSubscription t-1 ENTERPRISE"]
        );
        // The refreshed tenant re-disables the control.
        assert!(!ctrl.can_update_plan());
    }

    #[tokio::test]
    async fn refetch_does_not_clobber_in_progress_edits() {
        let gateway = FakeGateway::new();
        let mut ctrl = loaded_controller(&gateway).await;

        ctrl.draft_mut().address = "2 Harbor View".into();
        gateway.push_tenant(sample_tenant("t-1"));
        ctrl.load().await;

        assert_eq!(ctrl.draft().address, "2 Harbor View");
    }
}
