use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for a lead scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Room pages visited per qualifying host
    pub max_properties_per_host: usize,
    /// Links inspected on the business search results page
    pub search_result_limit: usize,
    /// Bio characters kept in the report
    pub bio_excerpt_chars: usize,
    /// Address written when a property cannot be geocoded
    pub address_sentinel: String,
    /// User agent presented by the browser
    pub user_agent: String,
    /// User agent presented to the geocoding service
    pub geocoder_user_agent: String,
    /// Search engine endpoint, queried as `?q=...`
    pub search_base_url: String,
    /// Prefix joined with a room id to build a listing URL
    pub room_base_url: String,
    /// Reverse geocoding endpoint
    pub geocoder_base_url: String,
    pub profile_timeout: Duration,
    pub search_timeout: Duration,
    pub llc_search_timeout: Duration,
    pub business_site_timeout: Duration,
    pub room_timeout: Duration,
    /// Settle time after each page load so client-side rendering can finish
    pub profile_delay: Duration,
    pub search_delay: Duration,
    pub llc_search_delay: Duration,
    pub business_site_delay: Duration,
    pub room_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_properties_per_host: 2,
            search_result_limit: 12,
            bio_excerpt_chars: 200,
            address_sentinel: "Vicinity Only".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            geocoder_user_agent: "host-lead-scout/0.1".to_string(),
            search_base_url: "https://www.google.com/search".to_string(),
            room_base_url: "https://www.airbnb.com/rooms/".to_string(),
            geocoder_base_url: "https://nominatim.openstreetmap.org/reverse".to_string(),
            profile_timeout: Duration::from_secs(60),
            search_timeout: Duration::from_secs(30),
            llc_search_timeout: Duration::from_secs(20),
            business_site_timeout: Duration::from_secs(20),
            room_timeout: Duration::from_secs(20),
            profile_delay: Duration::from_secs(2),
            search_delay: Duration::from_millis(1500),
            llc_search_delay: Duration::from_secs(1),
            business_site_delay: Duration::from_secs(1),
            room_delay: Duration::from_secs(1),
        }
    }
}

impl ScanConfig {
    /// Same settings with every settle delay removed
    #[cfg(test)]
    pub fn without_delays(mut self) -> Self {
        self.profile_delay = Duration::ZERO;
        self.search_delay = Duration::ZERO;
        self.llc_search_delay = Duration::ZERO;
        self.business_site_delay = Duration::ZERO;
        self.room_delay = Duration::ZERO;
        self
    }

    pub fn room_url(&self, room_id: &str) -> String {
        format!("{}{}", self.room_base_url, room_id)
    }
}
