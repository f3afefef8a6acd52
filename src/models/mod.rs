use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host details pulled from a single profile page load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostProfile {
    pub host_name: String,
    pub bio: String,
    pub city: String,
    pub profile_url: String,
}

/// Business contact details found for a host. Every field may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessInfo {
    pub business_url: String,
    pub linkedin: String,
    pub facebook: String,
    pub llc_info: String,
    pub email: String,
    pub phone: String,
}

/// Label written to the "Business Type" column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BusinessType {
    #[serde(rename = "Property Manager")]
    PropertyManager,
    #[serde(rename = "Owner-Operator")]
    OwnerOperator,
}

impl BusinessType {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::PropertyManager => "Property Manager",
            BusinessType::OwnerOperator => "Owner-Operator",
        }
    }
}

/// Keyword flags for a host. Both can be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_property_manager: bool,
    pub is_owner_operator: bool,
}

impl Classification {
    /// Property manager wins when both flags are set; `None` means the host is rejected.
    pub fn business_type(&self) -> Option<BusinessType> {
        if self.is_property_manager {
            Some(BusinessType::PropertyManager)
        } else if self.is_owner_operator {
            Some(BusinessType::OwnerOperator)
        } else {
            None
        }
    }
}

/// One output row: a single property tied to a qualifying host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyLead {
    pub host_name: String,
    pub city: String,
    pub profile_url: String,
    pub property_address: String,
    pub property_link: String,
    pub maps_link: String,
    pub business_type: BusinessType,
    pub business_url: String,
    pub linkedin: String,
    pub facebook: String,
    pub llc_info: String,
    pub email: String,
    pub phone: String,
    pub bio_excerpt: String,
    pub scraped_at: DateTime<Utc>,
}
