//! Hotelier API Client
//!
//! Typed REST client for the tenant-administration backend: data model,
//! error taxonomy, session credential store, HTTP transport, and the tenant
//! gateway. Controllers in `hotelier-console` drive these; nothing here
//! keeps list/pagination state.

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod tenants;
pub mod transport;

pub use error::{ApiError, ApiResult};
pub use model::{Page, StatusFilter, SubscriptionPlan, Tenant, TenantStatus};
pub use session::{SessionEvent, SessionStore};
pub use tenants::{TenantApi, TenantGateway, DEFAULT_PAGE_SIZE};
pub use transport::Transport;
