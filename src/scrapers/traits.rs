use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

/// A page loader that returns rendered HTML.
/// One instance drives a single page, so calls must not overlap.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Navigate to `url`, wait `settle` for client-side rendering, and return the page HTML
    async fn fetch(&self, url: &str, timeout: Duration, settle: Duration) -> Result<String>;
}

/// Structured address parts returned by a reverse lookup
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AddressParts {
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub road: Option<String>,
}

/// A successful reverse lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReverseLocation {
    pub formatted_address: String,
    pub parts: AddressParts,
}

/// Converts a coordinate pair into an address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// `Ok(None)` means the service had no address for the point
    async fn reverse(&self, lat: &str, lng: &str) -> Result<Option<ReverseLocation>>;
}
