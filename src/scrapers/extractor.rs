use crate::models::HostProfile;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

static DISPLAY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""displayName":"((?:[^"\\]|\\.)+)""#).unwrap());
static BIO: Lazy<Regex> = Lazy::new(|| Regex::new(r#""bio":"((?:[^"\\]|\\.)*)""#).unwrap());
static CITY: Lazy<Regex> = Lazy::new(|| Regex::new(r#""city":"((?:[^"\\]|\\.)+)""#).unwrap());
static ROOM_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/rooms/(\d+)").unwrap());
static LATITUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""lat":([-+]?\d*\.\d+|\d+)"#).unwrap());
static LONGITUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""lng":([-+]?\d*\.\d+|\d+)"#).unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?1?\s*[\(\-\s]?\d{3}\)?[\-\s]?\d{3}[\-\s]?\d{4}").unwrap());

/// Build a host profile from profile page HTML.
/// Missing fields are empty; a missing display name falls back to the last URL path segment.
pub fn extract_host_profile(html: &str, profile_url: &str) -> HostProfile {
    let profile_url = profile_url.trim();
    let host_name = json_string_field(&DISPLAY_NAME, html)
        .unwrap_or_else(|| last_path_segment(profile_url).to_string());
    let bio = json_string_field(&BIO, html).unwrap_or_default();
    let city = json_string_field(&CITY, html).unwrap_or_default();

    debug!("Extracted host '{}' (city: '{}', bio: {} chars)", host_name, city, bio.len());

    HostProfile {
        host_name,
        bio,
        city,
        profile_url: profile_url.to_string(),
    }
}

/// Room ids referenced by `/rooms/<id>` links, deduplicated in first-seen order
pub fn extract_room_ids(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    ROOM_ID
        .captures_iter(html)
        .map(|cap| cap[1].to_string())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Latitude and longitude exactly as written on the page. Both must be present.
pub fn extract_coordinates(html: &str) -> Option<(String, String)> {
    let lat = LATITUDE.captures(html)?.get(1)?.as_str().to_string();
    let lng = LONGITUDE.captures(html)?.get(1)?.as_str().to_string();
    Some((lat, lng))
}

pub fn extract_email(html: &str) -> Option<String> {
    EMAIL.find(html).map(|m| m.as_str().to_string())
}

/// First US-style phone number
pub fn extract_phone(html: &str) -> Option<String> {
    PHONE.find(html).map(|m| m.as_str().trim().to_string())
}

fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Capture group 1 of `pattern`, with JSON string escapes decoded when they are valid
fn json_string_field(pattern: &Regex, html: &str) -> Option<String> {
    let raw = pattern.captures(html)?.get(1)?.as_str();
    let decoded = serde_json::from_str::<String>(&format!("\"{}\"", raw))
        .unwrap_or_else(|_| raw.to_string());
    Some(decoded)
}
