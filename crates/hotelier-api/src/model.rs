//! Tenant Data Model
//!
//! Wire types for the tenant-administration backend. Field names follow the
//! backend's JSON contract (camelCase fields, SCREAMING enum variants).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier attached to a tenant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl SubscriptionPlan {
    /// Wire representation, as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Pro => "PRO",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FREE" => Ok(Self::Free),
            "PRO" => Ok(Self::Pro),
            "ENTERPRISE" => Ok(Self::Enterprise),
            other => Err(format!("unknown subscription plan: {other}")),
        }
    }
}

/// Lifecycle state of a tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    Active,
    Suspended,
    Deleted,
}

impl TenantStatus {
    /// Wire representation, used both in bodies and in the
    /// `/api/tenants/status/{status}` path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "SUSPENDED" => Ok(Self::Suspended),
            "DELETED" => Ok(Self::Deleted),
            other => Err(format!("unknown tenant status: {other}")),
        }
    }
}

/// A hotel account managed by the platform.
///
/// `tenant_id` and `email` are immutable after creation; `created_at` and
/// `updated_at` are server-assigned with `updated_at >= created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub tenant_id: String,
    pub hotel_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub subscription_plan: SubscriptionPlan,
    pub status: TenantStatus,
    /// Free-form blob (typically JSON), opaque to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One server-paginated result page.
///
/// `total_elements` counts every row matching the query, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
}

/// Body for `POST /api/tenants`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    pub hotel_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub subscription_plan: SubscriptionPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Body for `PUT /api/tenants/{id}` — partial update of the editable subset.
///
/// Email and subscription plan are deliberately absent: email is immutable
/// and plan changes go through [`UpdateSubscriptionRequest`]. Omitted fields
/// are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Body for `PATCH /api/tenants/{id}/subscription`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    pub subscription_plan: SubscriptionPlan,
}

/// Body for `PATCH /api/tenants/{id}/suspend`. Reason is mandatory and
/// non-empty; the list controller enforces this before any call is issued.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspendTenantRequest {
    pub reason: String,
}

/// Client-local list filter: everything, or a single lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TenantStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ALL") {
            Ok(Self::All)
        } else {
            s.parse::<TenantStatus>().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tenant_round_trips_camel_case_wire_names() {
        let body = json!({
            "tenantId": "t-1",
            "hotelName": "Grand Plaza",
            "email": "owner@grandplaza.example",
            "phoneNumber": "+1-555-0100",
            "address": "1 Plaza Way",
            "subscriptionPlan": "ENTERPRISE",
            "status": "ACTIVE",
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-06T09:30:00Z"
        });

        let tenant: Tenant = serde_json::from_value(body).unwrap();
        assert_eq!(tenant.tenant_id, "t-1");
        assert_eq!(tenant.subscription_plan, SubscriptionPlan::Enterprise);
        assert_eq!(tenant.status, TenantStatus::Active);
        assert!(tenant.metadata.is_none());
        assert!(tenant.updated_at >= tenant.created_at);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let req = UpdateTenantRequest {
            hotel_name: Some("Grand Plaza".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body, json!({ "hotelName": "Grand Plaza" }));
    }

    #[test]
    fn status_filter_parses_all_and_states() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "suspended".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(TenantStatus::Suspended)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
