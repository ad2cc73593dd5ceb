//! Scripted gateway for controller tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hotelier_api::error::{ApiError, ApiResult};
use hotelier_api::model::{
    CreateTenantRequest, Page, SubscriptionPlan, Tenant, TenantStatus, UpdateTenantRequest,
};
use hotelier_api::TenantGateway;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

pub fn sample_tenant(id: &str) -> Tenant {
    let created = Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap();
    Tenant {
        tenant_id: id.to_string(),
        hotel_name: format!("Hotel {id}"),
        email: format!("{id}@hotels.example"),
        phone_number: "+1-555-0100".to_string(),
        address: "1 Plaza Way".to_string(),
        subscription_plan: SubscriptionPlan::Pro,
        status: TenantStatus::Active,
        metadata: None,
        created_at: created,
        updated_at: created,
    }
}

pub fn sample_tenants(count: usize) -> Vec<Tenant> {
    (0..count).map(|i| sample_tenant(&format!("t-{i}"))).collect()
}

/// Records every call as a readable line and serves scripted results.
/// Queues fall back to benign defaults when empty.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<String>>,
    list_results: Mutex<VecDeque<ApiResult<Page<Tenant>>>>,
    tenant_results: Mutex<VecDeque<ApiResult<Tenant>>>,
    delete_results: Mutex<VecDeque<ApiResult<()>>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_page(&self, content: Vec<Tenant>, total_elements: u64) {
        self.list_results.lock().push_back(Ok(Page {
            content,
            total_elements,
        }));
    }

    pub fn push_list_err(&self, err: ApiError) {
        self.list_results.lock().push_back(Err(err));
    }

    pub fn push_tenant(&self, tenant: Tenant) {
        self.tenant_results.lock().push_back(Ok(tenant));
    }

    pub fn push_tenant_err(&self, err: ApiError) {
        self.tenant_results.lock().push_back(Err(err));
    }

    pub fn push_delete_err(&self, err: ApiError) {
        self.delete_results.lock().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }

    fn next_list(&self) -> ApiResult<Page<Tenant>> {
        self.list_results.lock().pop_front().unwrap_or(Ok(Page {
            content: Vec::new(),
            total_elements: 0,
        }))
    }

    fn next_tenant(&self) -> ApiResult<Tenant> {
        self.tenant_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_tenant("t-default")))
    }

    fn next_delete(&self) -> ApiResult<()> {
        self.delete_results.lock().pop_front().unwrap_or(Ok(()))
    }
}

#[async_trait]
impl TenantGateway for FakeGateway {
    async fn create(&self, request: &CreateTenantRequest) -> ApiResult<Tenant> {
        let body = serde_json::to_string(request).unwrap();
        self.record(format!("create {body}"));
        self.next_tenant()
    }

    async fn get(&self, tenant_id: &str) -> ApiResult<Tenant> {
        self.record(format!("get {tenant_id}"));
        self.next_tenant()
    }

    async fn list(&self, page: u32, size: u32) -> ApiResult<Page<Tenant>> {
        self.record(format!("list page={page} size={size}"));
        self.next_list()
    }

    async fn list_by_status(
        &self,
        status: TenantStatus,
        page: u32,
        size: u32,
    ) -> ApiResult<Page<Tenant>> {
        self.record(format!("listByStatus {status} page={page} size={size}"));
        self.next_list()
    }

    async fn update(&self, tenant_id: &str, request: &UpdateTenantRequest) -> ApiResult<Tenant> {
        let body = serde_json::to_string(request).unwrap();
        self.record(format!("update {tenant_id} {body}"));
        self.next_tenant()
    }

    async fn update_subscription(
        &self,
        tenant_id: &str,
        plan: SubscriptionPlan,
    ) -> ApiResult<Tenant> {
        self.record(format!("updateSubscription {tenant_id} {plan}"));
        self.next_tenant()
    }

    async fn suspend(&self, tenant_id: &str, reason: &str) -> ApiResult<Tenant> {
        self.record(format!("suspend {tenant_id} reason={reason}"));
        self.next_tenant()
    }

    async fn activate(&self, tenant_id: &str) -> ApiResult<Tenant> {
        self.record(format!("activate {tenant_id}"));
        self.next_tenant()
    }

    async fn delete(&self, tenant_id: &str) -> ApiResult<()> {
        self.record(format!("delete {tenant_id}"));
        self.next_delete()
    }
}
