use crate::models::PropertyLead;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Report columns, in order
pub const CSV_HEADERS: [&str; 13] = [
    "Host Name",
    "City",
    "Profile URL",
    "Property Address",
    "Property Link",
    "Business Type",
    "Business Website",
    "LinkedIn",
    "Facebook",
    "LLC Info",
    "Email",
    "Phone",
    "Bio",
];

/// Split pasted input into URLs: one per line, trimmed, blanks dropped
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Write leads as CSV with a header row. Quoting follows standard CSV rules.
pub fn write_csv<W: Write>(leads: &[PropertyLead], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for lead in leads {
        csv_writer.write_record([
            lead.host_name.as_str(),
            lead.city.as_str(),
            lead.profile_url.as_str(),
            lead.property_address.as_str(),
            lead.property_link.as_str(),
            lead.business_type.label(),
            lead.business_url.as_str(),
            lead.linkedin.as_str(),
            lead.facebook.as_str(),
            lead.llc_info.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            lead.bio_excerpt.as_str(),
        ])?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub async fn save_csv(leads: &[PropertyLead], path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_csv(leads, &mut buffer)?;
    tokio::fs::write(path, buffer)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub async fn save_json(leads: &[PropertyLead], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(leads)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
