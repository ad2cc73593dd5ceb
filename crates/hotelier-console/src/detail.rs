//! Single-tenant detail view controller.

use crate::events::failure_message;
use hotelier_api::{ApiError, Tenant, TenantGateway};
use std::sync::Arc;

/// Fetch-once-on-mount state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Tenant),
    NotFound,
    Failed(String),
}

pub struct DetailController {
    gateway: Arc<dyn TenantGateway>,
    tenant_id: String,
    state: DetailState,
}

impl DetailController {
    pub fn new(gateway: Arc<dyn TenantGateway>, tenant_id: impl Into<String>) -> Self {
        Self {
            gateway,
            tenant_id: tenant_id.into(),
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub async fn load(&mut self) {
        self.state = DetailState::Loading;
        self.state = match self.gateway.get(&self.tenant_id).await {
            Ok(tenant) => DetailState::Loaded(tenant),
            Err(ApiError::NotFound(_)) => DetailState::NotFound,
            Err(err) => DetailState::Failed(failure_message("load tenant details", &err)),
        };
    }
}
