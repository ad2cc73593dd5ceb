//! List/filter/pagination state controller.
//!
//! Owns the query intent `{page, size, filter}` and the last-fetched
//! `{tenants, total}` snapshot. Every change flows through this controller:
//! intent changes and completed mutations both re-trigger a load.
//!
//! Two deliberate behaviors carried over from the backend contract:
//! - the filtered path requests a single batch (page/size of the intent are
//!   not forwarded) and derives `total` from the batch length, NOT from the
//!   server-reported total;
//! - mutations reload with the intent unchanged, so deleting the last row of
//!   a non-first page can leave an empty trailing page visible.

use crate::events::{failure_message, ConsoleEvent};
use hotelier_api::error::ApiResult;
use hotelier_api::{Page, StatusFilter, Tenant, TenantGateway, TenantStatus, DEFAULT_PAGE_SIZE};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Where the list view currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// The single gateway call a load issues, derived from the intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListRequest {
    All { page: u32, size: u32 },
    ByStatus(TenantStatus),
}

/// Pairs an in-flight load with the intent generation it serves. A response
/// is applied only while its generation still matches the controller's; a
/// newer intent makes older tickets stale and their responses are dropped.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    generation: u64,
    request: ListRequest,
}

impl LoadTicket {
    pub fn request(&self) -> &ListRequest {
        &self.request
    }
}

pub struct ListController {
    gateway: Arc<dyn TenantGateway>,
    page: u32,
    size: u32,
    filter: StatusFilter,
    tenants: Vec<Tenant>,
    total: u64,
    phase: LoadPhase,
    generation: u64,
    events: broadcast::Sender<ConsoleEvent>,
}

impl ListController {
    pub fn new(gateway: Arc<dyn TenantGateway>) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            gateway,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            filter: StatusFilter::All,
            tenants: Vec::new(),
            total: 0,
            phase: LoadPhase::Idle,
            generation: 0,
            events,
        }
    }

    /// Controller starting from a caller-chosen intent instead of the
    /// defaults. No load is issued until the caller asks for one.
    pub fn with_intent(
        gateway: Arc<dyn TenantGateway>,
        page: u32,
        size: u32,
        filter: StatusFilter,
    ) -> Self {
        let mut ctrl = Self::new(gateway);
        ctrl.page = page;
        ctrl.size = size.max(1);
        ctrl.filter = filter;
        ctrl
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    // ------------------------------------------------------------------
    // Pagination boundaries
    // ------------------------------------------------------------------

    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.total.div_ceil(u64::from(self.size))
        }
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    // ------------------------------------------------------------------
    // Load transition
    // ------------------------------------------------------------------

    /// Enter `Loading` and stamp a ticket for the call the intent demands.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        let request = match self.filter {
            StatusFilter::All => ListRequest::All {
                page: self.page,
                size: self.size,
            },
            // The filtered view always requests a single batch; the intent's
            // page/size are not forwarded.
            StatusFilter::Only(status) => ListRequest::ByStatus(status),
        };
        LoadTicket {
            generation: self.generation,
            request,
        }
    }

    async fn issue(&self, request: &ListRequest) -> ApiResult<Page<Tenant>> {
        match *request {
            ListRequest::All { page, size } => self.gateway.list(page, size).await,
            ListRequest::ByStatus(status) => {
                self.gateway.list_by_status(status, 0, DEFAULT_PAGE_SIZE).await
            }
        }
    }

    /// Reconcile a completed load. Stale tickets are discarded wholesale: a
    /// late response must not overwrite state that belongs to newer intent.
    /// On failure the previous snapshot stays visible (stale-but-present).
    pub fn apply(&mut self, ticket: &LoadTicket, result: ApiResult<Page<Tenant>>) {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale list response"
            );
            return;
        }

        match result {
            Ok(page) => {
                self.total = match ticket.request {
                    ListRequest::All { .. } => page.total_elements,
                    // Derived from the returned batch, not the server total.
                    ListRequest::ByStatus(_) => page.content.len() as u64,
                };
                self.tenants = page.content;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                let message = failure_message("load tenants", &err);
                self.phase = LoadPhase::Failed(message.clone());
                self.emit(ConsoleEvent::Failure(message));
            }
        }
    }

    /// Run one full load transition for the current intent.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.issue(ticket.request()).await;
        self.apply(&ticket, result);
    }

    // ------------------------------------------------------------------
    // Intent changes
    // ------------------------------------------------------------------

    pub async fn set_page(&mut self, page: u32) {
        self.page = page;
        self.load().await;
    }

    /// Changing the size invalidates page-offset semantics; page resets to 0.
    pub async fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.page = 0;
        self.load().await;
    }

    /// Changing the filter invalidates page-offset semantics; page resets to 0.
    pub async fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 0;
        self.load().await;
    }

    // ------------------------------------------------------------------
    // Mutating actions — each reloads with the intent unchanged on success
    // and leaves displayed data untouched on failure.
    // ------------------------------------------------------------------

    pub async fn delete(&mut self, tenant_id: &str) {
        match self.gateway.delete(tenant_id).await {
            Ok(()) => {
                self.emit(ConsoleEvent::Success("Tenant deleted successfully".into()));
                self.load().await;
            }
            Err(err) => self.emit(ConsoleEvent::Failure(failure_message("delete tenant", &err))),
        }
    }

    /// Rejects an empty or whitespace-only reason client-side; the gateway
    /// is never contacted in that case.
    pub async fn suspend(&mut self, tenant_id: &str, reason: &str) {
        if reason.trim().is_empty() {
            self.emit(ConsoleEvent::Failure("Suspension reason is required".into()));
            return;
        }
        match self.gateway.suspend(tenant_id, reason).await {
            Ok(_) => {
                self.emit(ConsoleEvent::Success("Tenant suspended successfully".into()));
                self.load().await;
            }
            Err(err) => self.emit(ConsoleEvent::Failure(failure_message("suspend tenant", &err))),
        }
    }

    pub async fn activate(&mut self, tenant_id: &str) {
        match self.gateway.activate(tenant_id).await {
            Ok(_) => {
                self.emit(ConsoleEvent::Success("Tenant activated successfully".into()));
                self.load().await;
            }
            Err(err) => self.emit(ConsoleEvent::Failure(failure_message("activate tenant", &err))),
        }
    }

    fn emit(&self, event: ConsoleEvent) {
        let _ = self.events.send(event);
    }
}
