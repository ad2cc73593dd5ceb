//! Tenant form state.

use hotelier_api::model::{CreateTenantRequest, SubscriptionPlan, Tenant, UpdateTenantRequest};

/// In-progress form state for create/edit views, kept distinct from any
/// fetched [`Tenant`] so a refetch never clobbers what the user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TenantDraft {
    pub hotel_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub subscription_plan: SubscriptionPlan,
    pub metadata: String,
}

impl TenantDraft {
    pub fn from_tenant(tenant: &Tenant) -> Self {
        Self {
            hotel_name: tenant.hotel_name.clone(),
            email: tenant.email.clone(),
            phone_number: tenant.phone_number.clone(),
            address: tenant.address.clone(),
            subscription_plan: tenant.subscription_plan,
            metadata: tenant.metadata.clone().unwrap_or_default(),
        }
    }

    /// Required-field check. Email only matters at creation time; edits
    /// cannot change it anyway.
    pub fn has_required_fields(&self, require_email: bool) -> bool {
        let base = !self.hotel_name.trim().is_empty()
            && !self.phone_number.trim().is_empty()
            && !self.address.trim().is_empty();
        base && (!require_email || !self.email.trim().is_empty())
    }

    pub fn create_request(&self) -> CreateTenantRequest {
        CreateTenantRequest {
            hotel_name: self.hotel_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            subscription_plan: self.subscription_plan,
            metadata: self.optional_metadata(),
        }
    }

    /// Editable subset only — email and plan are never part of this body.
    pub fn update_request(&self) -> UpdateTenantRequest {
        UpdateTenantRequest {
            hotel_name: Some(self.hotel_name.clone()),
            phone_number: Some(self.phone_number.clone()),
            address: Some(self.address.clone()),
            metadata: self.optional_metadata(),
        }
    }

    fn optional_metadata(&self) -> Option<String> {
        if self.metadata.is_empty() {
            None
        } else {
            Some(self.metadata.clone())
        }
    }
}
