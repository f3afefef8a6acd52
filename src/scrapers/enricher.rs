use crate::models::BusinessInfo;
use crate::scrapers::extractor;
use crate::scrapers::traits::PageSource;
use crate::scrapers::types::ScanConfig;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Domains never taken as the host's own website
const NON_BUSINESS_DOMAINS: &[&str] = &["google.com", "facebook.com", "linkedin.com"];

/// Looks up a host's business presence through search-engine result pages
pub struct BusinessEnricher<'a> {
    pages: &'a dyn PageSource,
    config: &'a ScanConfig,
}

impl<'a> BusinessEnricher<'a> {
    pub fn new(pages: &'a dyn PageSource, config: &'a ScanConfig) -> Self {
        Self { pages, config }
    }

    /// Collect website, social profiles, LLC evidence and contact details.
    /// Each step that fails leaves its fields empty.
    pub async fn enrich(&self, host_name: &str, city: &str) -> BusinessInfo {
        let mut info = BusinessInfo::default();

        match self.search_links(host_name, city).await {
            Ok(links) => sort_links(&links, &mut info),
            Err(e) => warn!("Business search for '{}' failed: {:#}", host_name, e),
        }

        match self.has_llc_references(host_name, city).await {
            Ok(true) => info.llc_info = "LLC references found".to_string(),
            Ok(false) => {}
            Err(e) => warn!("LLC search for '{}' failed: {:#}", host_name, e),
        }

        if !info.business_url.is_empty() {
            if let Err(e) = self.scrape_contacts(&mut info).await {
                warn!("Could not read {}: {:#}", info.business_url, e);
            }
        }

        info!(
            "Enriched '{}': website={} linkedin={} facebook={} llc={}",
            host_name,
            !info.business_url.is_empty(),
            !info.linkedin.is_empty(),
            !info.facebook.is_empty(),
            !info.llc_info.is_empty()
        );
        info
    }

    /// Absolute links from the first results page, capped at `search_result_limit`
    async fn search_links(&self, host_name: &str, city: &str) -> Result<Vec<String>> {
        let query = format!("{} {} property management business", host_name, city);
        let html = self
            .pages
            .fetch(
                self.search_url(&query)?.as_str(),
                self.config.search_timeout,
                self.config.search_delay,
            )
            .await?;

        let links = result_links(&html, self.config.search_result_limit);
        debug!("Search for '{}' returned {} links", query, links.len());
        Ok(links)
    }

    /// True when "llc" appears anywhere in the results page. Not tied to the host's own entity.
    async fn has_llc_references(&self, host_name: &str, city: &str) -> Result<bool> {
        let query = format!("{} llc {}", host_name, city);
        let html = self
            .pages
            .fetch(
                self.search_url(&query)?.as_str(),
                self.config.llc_search_timeout,
                self.config.llc_search_delay,
            )
            .await?;

        Ok(html.to_lowercase().contains("llc"))
    }

    async fn scrape_contacts(&self, info: &mut BusinessInfo) -> Result<()> {
        let html = self
            .pages
            .fetch(
                &info.business_url,
                self.config.business_site_timeout,
                self.config.business_site_delay,
            )
            .await?;

        if let Some(email) = extractor::extract_email(&html) {
            info.email = email;
        }
        if let Some(phone) = extractor::extract_phone(&html) {
            info.phone = phone;
        }
        Ok(())
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&self.config.search_base_url, &[("q", query)])
            .with_context(|| format!("Invalid search URL {}", self.config.search_base_url))
    }
}

/// `http(s)` anchor targets in document order
fn result_links(html: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
        .take(limit)
        .map(String::from)
        .collect()
}

/// First LinkedIn, first Facebook and first other non-search link win their bucket
fn sort_links(links: &[String], info: &mut BusinessInfo) {
    for link in links {
        let lower = link.to_lowercase();
        if lower.contains("linkedin.com") {
            if info.linkedin.is_empty() {
                info.linkedin = link.clone();
            }
        } else if lower.contains("facebook.com") {
            if info.facebook.is_empty() {
                info.facebook = link.clone();
            }
        } else if !NON_BUSINESS_DOMAINS.iter().any(|d| lower.contains(d))
            && info.business_url.is_empty()
        {
            info.business_url = link.clone();
        }
    }
}
