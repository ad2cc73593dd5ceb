//! Create view controller.

use crate::draft::TenantDraft;
use crate::events::{failure_message, ConsoleEvent};
use hotelier_api::{Tenant, TenantGateway};
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct CreateController {
    gateway: Arc<dyn TenantGateway>,
    draft: TenantDraft,
    events: broadcast::Sender<ConsoleEvent>,
}

impl CreateController {
    pub fn new(gateway: Arc<dyn TenantGateway>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            gateway,
            draft: TenantDraft::default(),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub fn draft(&self) -> &TenantDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TenantDraft {
        &mut self.draft
    }

    /// Validate locally, then create. Returns the created tenant so the
    /// shell can navigate to it.
    pub async fn submit(&mut self) -> Option<Tenant> {
        if !self.draft.has_required_fields(true) {
            self.emit(ConsoleEvent::Failure("Please fill in all required fields".into()));
            return None;
        }
        match self.gateway.create(&self.draft.create_request()).await {
            Ok(tenant) => {
                self.emit(ConsoleEvent::Success("Tenant created successfully".into()));
                Some(tenant)
            }
            Err(err) => {
                self.emit(ConsoleEvent::Failure(failure_message("create tenant", &err)));
                None
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
    use hotelier_api::ApiError;

    #[tokio::test]
    async fn missing_fields_never_reach_the_gateway() {
        let gateway = FakeGateway::new();
        let mut ctrl = CreateController::new(gateway.clone());
        let mut rx = ctrl.subscribe();

        ctrl.draft_mut().hotel_name = "Grand Plaza".into();
        // email/phone/address still blank
        assert!(ctrl.submit().await.is_none());

        assert!(gateway.calls().is_empty());
        assert_eq!(
            rx.try_recv().expect("notice"),
            ConsoleEvent::Failure("Please fill in all required fields".into())
        );
    }

    #[tokio::test]
    async fn successful_create_returns_the_tenant() {
        let gateway = FakeGateway::new();
        gateway.push_tenant(sample_tenant("t-new"));

        let mut ctrl = CreateController::new(gateway.clone());
        *ctrl.draft_mut() = TenantDraft::from_tenant(&sample_tenant("t-new"));

        let created = ctrl.submit().await.expect("created");
        assert_eq!(created.tenant_id, "t-new");
        assert!(gateway.calls()[0].starts_with("create "));
    }

    #[tokio::test]
    async fn backend_rejection_surfaces_its_message() {
        let gateway = FakeGateway::new();
        gateway.push_tenant_err(ApiError::Validation("email already in use".into()));

        let mut ctrl = CreateController::new(gateway);
        *ctrl.draft_mut() = TenantDraft::from_tenant(&sample_tenant("t-new"));
        let mut rx = ctrl.subscribe();

        assert!(ctrl.submit().await.is_none());
        assert_eq!(
            rx.try_recv().expect("notice"),
            ConsoleEvent::Failure("email already in use".into())
        );
    }
}
