mod export;
mod models;
mod scrapers;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use scrapers::{ChromePageSource, LeadScanner, NominatimGeocoder, ScanConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "host-lead-scout")]
#[command(about = "Scan Airbnb host profiles for owner-operator and property manager leads")]
struct Cli {
    #[arg(help = "Host profile URLs (https://www.airbnb.com/users/show/...)")]
    urls: Vec<String>,

    #[arg(short, long, help = "File with one profile URL per line")]
    input: Option<PathBuf>,

    #[arg(short, long, help = "CSV report path (default: airbnb_leads_<timestamp>.csv)")]
    output: Option<PathBuf>,

    #[arg(long, help = "Also write the leads as JSON")]
    json: Option<PathBuf>,

    #[arg(long, default_value_t = 2, help = "Properties visited per host")]
    max_properties: usize,

    #[arg(long, default_value_t = 12, help = "Search result links inspected per host")]
    search_results: usize,

    #[arg(long, default_value_t = 200, help = "Bio characters kept in the report")]
    bio_chars: usize,

    #[arg(long, default_value = "Vicinity Only", help = "Address used when geocoding fails")]
    sentinel: String,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("🏠 Host Lead Scout - Airbnb Cohost Research");
    info!("============================================");

    let urls = collect_urls(&cli).await?;
    if urls.is_empty() {
        warn!("Please enter at least one URL.");
        return Ok(());
    }
    info!("Scanning {} host profiles", urls.len());

    let config = cli.scan_config();

    let pages = ChromePageSource::launch(&config.user_agent)?;
    let geocoder = NominatimGeocoder::new(&config.geocoder_base_url, &config.geocoder_user_agent)?;

    let leads = LeadScanner::new(&pages, &geocoder, &config).scan(&urls).await;

    if leads.is_empty() {
        info!("No owner-operated listings found in the scanned profiles.");
        return Ok(());
    }
    info!("✅ Found {} listings!", leads.len());

    for (i, lead) in leads.iter().enumerate() {
        println!("{}. {} ({})", i + 1, lead.host_name, lead.business_type.label());
        println!("   Address: {}", lead.property_address);
        println!("   Listing: {}", lead.property_link);
        if !lead.business_url.is_empty() {
            println!("   Website: {}", lead.business_url);
        }
        if !lead.email.is_empty() || !lead.phone.is_empty() {
            println!("   Contact: {} {}", lead.email, lead.phone);
        }
        println!();
    }

    let output = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "airbnb_leads_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        ))
    });
    export::save_csv(&leads, &output).await?;
    info!("💾 Saved {} rows to {}", leads.len(), output.display());

    if let Some(json_path) = &cli.json {
        export::save_json(&leads, json_path).await?;
        info!("💾 Saved leads to {}", json_path.display());
    }

    Ok(())
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_properties_per_host: self.max_properties,
            search_result_limit: self.search_results,
            bio_excerpt_chars: self.bio_chars,
            address_sentinel: self.sentinel.clone(),
            ..ScanConfig::default()
        }
    }
}

/// URLs from `--input` first, then positional arguments
async fn collect_urls(cli: &Cli) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    if let Some(path) = &cli.input {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        urls.extend(export::parse_url_list(&text));
    }
    urls.extend(export::parse_url_list(&cli.urls.join("\n")));

    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scan_config() {
        let cli = Cli::try_parse_from(["host-lead-scout", "https://www.airbnb.com/users/show/1"]).unwrap();
        let config = cli.scan_config();
        let defaults = ScanConfig::default();

        assert_eq!(cli.urls, vec!["https://www.airbnb.com/users/show/1"]);
        assert_eq!(config.max_properties_per_host, defaults.max_properties_per_host);
        assert_eq!(config.search_result_limit, defaults.search_result_limit);
        assert_eq!(config.bio_excerpt_chars, defaults.bio_excerpt_chars);
        assert_eq!(config.address_sentinel, defaults.address_sentinel);
    }

    #[test]
    fn test_flags_override_scan_config() {
        let cli = Cli::try_parse_from([
            "host-lead-scout",
            "--max-properties",
            "3",
            "--search-results",
            "10",
            "--bio-chars",
            "100",
            "--sentinel",
            "N/A",
        ])
        .unwrap();
        let config = cli.scan_config();

        assert!(cli.urls.is_empty());
        assert_eq!(config.max_properties_per_host, 3);
        assert_eq!(config.search_result_limit, 10);
        assert_eq!(config.bio_excerpt_chars, 100);
        assert_eq!(config.address_sentinel, "N/A");
    }
}
