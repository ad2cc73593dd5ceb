//! Tenant API gateway.
//!
//! Typed façade over the transport: one operation per backend capability
//! under `/api/tenants`. No client-side business validation happens here —
//! that is the backend's job (the one exception, suspend-reason checking,
//! lives in the list controller).

use crate::error::ApiResult;
use crate::model::{
    CreateTenantRequest, Page, SubscriptionPlan, SuspendTenantRequest, Tenant, TenantStatus,
    UpdateSubscriptionRequest, UpdateTenantRequest,
};
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

const BASE_PATH: &str = "/api/tenants";

/// Default page size when the caller does not care.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Seam between controllers and the real backend, so controller logic can be
/// exercised against a scripted gateway in tests.
#[async_trait]
pub trait TenantGateway: Send + Sync {
    async fn create(&self, request: &CreateTenantRequest) -> ApiResult<Tenant>;

    async fn get(&self, tenant_id: &str) -> ApiResult<Tenant>;

    /// Unfiltered, server-paginated listing.
    async fn list(&self, page: u32, size: u32) -> ApiResult<Page<Tenant>>;

    /// Server-side filtered listing.
    async fn list_by_status(
        &self,
        status: TenantStatus,
        page: u32,
        size: u32,
    ) -> ApiResult<Page<Tenant>>;

    /// Partial update; omitted fields are left unchanged by the backend.
    async fn update(&self, tenant_id: &str, request: &UpdateTenantRequest) -> ApiResult<Tenant>;

    async fn update_subscription(
        &self,
        tenant_id: &str,
        plan: SubscriptionPlan,
    ) -> ApiResult<Tenant>;

    async fn suspend(&self, tenant_id: &str, reason: &str) -> ApiResult<Tenant>;

    async fn activate(&self, tenant_id: &str) -> ApiResult<Tenant>;

    /// A repeat delete on an already-deleted id surfaces the backend's own
    /// error; nothing is suppressed client-side.
    async fn delete(&self, tenant_id: &str) -> ApiResult<()>;
}

/// Production gateway over the HTTP transport.
pub struct TenantApi {
    transport: Arc<Transport>,
}

impl TenantApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn tenant_path(tenant_id: &str) -> String {
        format!("{BASE_PATH}/{tenant_id}")
    }
}

#[async_trait]
impl TenantGateway for TenantApi {
    #[instrument(skip_all, fields(hotel = %request.hotel_name))]
    async fn create(&self, request: &CreateTenantRequest) -> ApiResult<Tenant> {
        self.transport.post(BASE_PATH, request).await
    }

    #[instrument(skip(self))]
    async fn get(&self, tenant_id: &str) -> ApiResult<Tenant> {
        self.transport.get(&Self::tenant_path(tenant_id), &[]).await
    }

    #[instrument(skip(self))]
    async fn list(&self, page: u32, size: u32) -> ApiResult<Page<Tenant>> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.transport.get(BASE_PATH, &query).await
    }

    #[instrument(skip(self))]
    async fn list_by_status(
        &self,
        status: TenantStatus,
        page: u32,
        size: u32,
    ) -> ApiResult<Page<Tenant>> {
        let path = format!("{BASE_PATH}/status/{}", status.as_str());
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.transport.get(&path, &query).await
    }

    #[instrument(skip(self, request))]
    async fn update(&self, tenant_id: &str, request: &UpdateTenantRequest) -> ApiResult<Tenant> {
        self.transport.put(&Self::tenant_path(tenant_id), request).await
    }

    #[instrument(skip(self))]
    async fn update_subscription(
        &self,
        tenant_id: &str,
        plan: SubscriptionPlan,
    ) -> ApiResult<Tenant> {
        let path = format!("{}/subscription", Self::tenant_path(tenant_id));
        let body = UpdateSubscriptionRequest {
            subscription_plan: plan,
        };
        self.transport.patch(&path, &body).await
    }

    #[instrument(skip(self, reason))]
    async fn suspend(&self, tenant_id: &str, reason: &str) -> ApiResult<Tenant> {
        let path = format!("{}/suspend", Self::tenant_path(tenant_id));
        let body = SuspendTenantRequest {
            reason: reason.to_string(),
        };
        self.transport.patch(&path, &body).await
    }

    #[instrument(skip(self))]
    async fn activate(&self, tenant_id: &str) -> ApiResult<Tenant> {
        let path = format!("{}/activate", Self::tenant_path(tenant_id));
        self.transport.patch_empty(&path).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, tenant_id: &str) -> ApiResult<()> {
        self.transport.delete(&Self::tenant_path(tenant_id)).await
    }
}
