use crate::scrapers::traits::{AddressParts, ReverseGeocoder, ReverseLocation};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Nominatim reverse lookup response
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<AddressParts>,
    #[serde(default)]
    error: Option<String>,
}

/// Reverse geocoder backed by OpenStreetMap Nominatim
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .context("Failed to create geocoding HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, lat: &str, lng: &str) -> Result<Option<ReverseLocation>> {
        debug!("Reverse geocoding ({}, {})", lat, lng);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("format", "jsonv2"),
                ("lat", lat),
                ("lon", lng),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .context("Geocoding request failed")?
            .error_for_status()
            .context("Geocoding service returned an error status")?;

        let body: NominatimReverse = response
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        if let Some(error) = &body.error {
            debug!("No address for ({}, {}): {}", lat, lng, error);
        }
        Ok(body.into_location())
    }
}

impl NominatimReverse {
    /// An `error` body (e.g. "Unable to geocode") or a missing `display_name` means no address
    fn into_location(self) -> Option<ReverseLocation> {
        if self.error.is_some() {
            return None;
        }
        self.display_name.map(|formatted_address| ReverseLocation {
            formatted_address,
            parts: self.address.unwrap_or_default(),
        })
    }
}

/// Prefer "<house_number> <road>", else the full formatted address
pub fn format_address(location: &ReverseLocation) -> String {
    match (&location.parts.house_number, &location.parts.road) {
        (Some(number), Some(road)) if !number.is_empty() && !road.is_empty() => {
            format!("{} {}", number, road).trim().to_string()
        }
        _ => location.formatted_address.clone(),
    }
}

/// Turn optional coordinates into a report address. Never fails:
/// missing coordinates, lookup errors and empty results all become `sentinel`.
pub async fn resolve_address(
    geocoder: &dyn ReverseGeocoder,
    coordinates: Option<(&str, &str)>,
    sentinel: &str,
) -> String {
    let Some((lat, lng)) = coordinates else {
        return sentinel.to_string();
    };

    match geocoder.reverse(lat, lng).await {
        Ok(Some(location)) => {
            let address = format_address(&location);
            if address.is_empty() {
                sentinel.to_string()
            } else {
                address
            }
        }
        Ok(None) => sentinel.to_string(),
        Err(e) => {
            warn!("Geocoding ({}, {}) failed: {:#}", lat, lng, e);
            sentinel.to_string()
        }
    }
}

/// Google Maps link for a coordinate pair, or "N/A"
pub fn maps_link(coordinates: Option<(&str, &str)>) -> String {
    match coordinates {
        Some((lat, lng)) => format!("https://www.google.com/maps?q={},{}", lat, lng),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::traits::MockReverseGeocoder;
    use anyhow::anyhow;

    const SENTINEL: &str = "Vicinity Only";

    fn location(number: Option<&str>, road: Option<&str>) -> ReverseLocation {
        ReverseLocation {
            formatted_address: "12, Main Street, Springfield, USA".to_string(),
            parts: AddressParts {
                house_number: number.map(String::from),
                road: road.map(String::from),
            },
        }
    }

    #[test]
    fn test_format_prefers_street_address() {
        assert_eq!(format_address(&location(Some("12"), Some("Main Street"))), "12 Main Street");
        assert_eq!(
            format_address(&location(None, Some("Main Street"))),
            "12, Main Street, Springfield, USA"
        );
        assert_eq!(
            format_address(&location(Some(""), Some("Main Street"))),
            "12, Main Street, Springfield, USA"
        );
    }

    #[tokio::test]
    async fn test_geocoder_receives_exact_coordinates() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .withf(|lat, lng| lat == "34.05" && lng == "-118.25")
            .times(1)
            .returning(|_, _| Ok(Some(location(Some("200"), Some("Spring Street")))));

        let address = resolve_address(&geocoder, Some(("34.05", "-118.25")), SENTINEL).await;
        assert_eq!(address, "200 Spring Street");
    }

    #[tokio::test]
    async fn test_geocoder_failure_yields_sentinel() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .returning(|_, _| Err(anyhow!("connection reset")));

        let address = resolve_address(&geocoder, Some(("1.0", "2.0")), SENTINEL).await;
        assert_eq!(address, SENTINEL);
    }

    #[tokio::test]
    async fn test_missing_coordinates_skip_lookup() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder.expect_reverse().times(0);

        assert_eq!(resolve_address(&geocoder, None, "N/A").await, "N/A");
    }

    #[tokio::test]
    async fn test_empty_lookup_yields_sentinel() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder.expect_reverse().returning(|_, _| Ok(None));

        let address = resolve_address(&geocoder, Some(("1.0", "2.0")), SENTINEL).await;
        assert_eq!(address, SENTINEL);
    }

    #[test]
    fn test_parses_reverse_lookup_body() {
        let body: NominatimReverse = serde_json::from_str(
            r#"{
                "place_id": 297416543,
                "lat": "34.0500",
                "lon": "-118.2500",
                "category": "building",
                "display_name": "200, Spring Street, Civic Center, Los Angeles, California, 90012, United States",
                "address": {
                    "house_number": "200",
                    "road": "Spring Street",
                    "city": "Los Angeles",
                    "postcode": "90012",
                    "country_code": "us"
                }
            }"#,
        )
        .unwrap();

        let location = body.into_location().unwrap();
        assert_eq!(
            location.formatted_address,
            "200, Spring Street, Civic Center, Los Angeles, California, 90012, United States"
        );
        assert_eq!(location.parts.house_number.as_deref(), Some("200"));
        assert_eq!(location.parts.road.as_deref(), Some("Spring Street"));
        assert_eq!(format_address(&location), "200 Spring Street");
    }

    #[test]
    fn test_parses_body_without_street_parts() {
        let body: NominatimReverse = serde_json::from_str(
            r#"{"display_name": "Lake Tahoe, California, United States", "address": {"state": "California"}}"#,
        )
        .unwrap();

        let location = body.into_location().unwrap();
        assert_eq!(location.parts, AddressParts::default());
        assert_eq!(format_address(&location), "Lake Tahoe, California, United States");
    }

    #[test]
    fn test_error_body_means_no_address() {
        let body: NominatimReverse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();

        assert_eq!(body.into_location(), None);
    }

    #[test]
    fn test_maps_link() {
        assert_eq!(
            maps_link(Some(("34.05", "-118.25"))),
            "https://www.google.com/maps?q=34.05,-118.25"
        );
        assert_eq!(maps_link(None), "N/A");
    }
}
