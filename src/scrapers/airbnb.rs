use crate::models::{BusinessInfo, BusinessType, HostProfile, PropertyLead};
use crate::scrapers::classifier::classify_host;
use crate::scrapers::enricher::BusinessEnricher;
use crate::scrapers::extractor;
use crate::scrapers::geocoder::{maps_link, resolve_address};
use crate::scrapers::traits::{PageSource, ReverseGeocoder};
use crate::scrapers::types::ScanConfig;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Outcome of scanning one profile URL
#[derive(Debug)]
pub enum HostOutcome {
    /// Profile could not be loaded
    Skipped(anyhow::Error),
    /// No keyword matched; the host yields no rows
    Rejected,
    /// Qualifying host with the rows it produced (possibly none)
    Emitted(Vec<PropertyLead>),
}

/// Drives the whole scan over one page source, one URL at a time
pub struct LeadScanner<'a> {
    pages: &'a dyn PageSource,
    geocoder: &'a dyn ReverseGeocoder,
    config: &'a ScanConfig,
}

impl<'a> LeadScanner<'a> {
    pub fn new(
        pages: &'a dyn PageSource,
        geocoder: &'a dyn ReverseGeocoder,
        config: &'a ScanConfig,
    ) -> Self {
        Self {
            pages,
            geocoder,
            config,
        }
    }

    /// Scan every non-blank URL in order. Failures are logged and never abort the batch.
    pub async fn scan(&self, urls: &[String]) -> Vec<PropertyLead> {
        let mut leads = Vec::new();

        for url in urls {
            let url = url.trim();
            if url.is_empty() {
                continue;
            }

            info!("👤 Checking: {}", url);
            match self.scan_host(url).await {
                HostOutcome::Skipped(e) => warn!("  ⚠️ Skipping {}: {:#}", url, e),
                HostOutcome::Rejected => info!("  ⏩ Skipping: no owner or manager keywords in bio"),
                HostOutcome::Emitted(rows) => {
                    info!("  ✅ {} properties from {}", rows.len(), url);
                    leads.extend(rows);
                }
            }
        }

        info!("Scan finished with {} leads", leads.len());
        leads
    }

    /// Extract, classify, enrich and expand a single host
    pub async fn scan_host(&self, url: &str) -> HostOutcome {
        let host = match self.load_host(url).await {
            Ok(host) => host,
            Err(e) => return HostOutcome::Skipped(e),
        };

        let Some(business_type) = classify_host(&host.bio, &host.host_name).business_type() else {
            return HostOutcome::Rejected;
        };
        info!("  {} classified as {}", host.host_name, business_type.label());

        let business = BusinessEnricher::new(self.pages, self.config)
            .enrich(&host.host_name, &host.city)
            .await;

        let room_ids = match self.list_room_ids(url).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!("  ⚠️ Could not reload {}: {:#}", url, e);
                return HostOutcome::Emitted(Vec::new());
            }
        };

        let mut rows = Vec::new();
        for room_id in room_ids.iter().take(self.config.max_properties_per_host) {
            match self
                .build_lead(&host, business_type, &business, room_id)
                .await
            {
                Ok(lead) => rows.push(lead),
                Err(e) => warn!("  ⚠️ Skipping room {}: {:#}", room_id, e),
            }
        }

        HostOutcome::Emitted(rows)
    }

    async fn load_host(&self, url: &str) -> Result<HostProfile> {
        let html = self
            .pages
            .fetch(url, self.config.profile_timeout, self.config.profile_delay)
            .await
            .context("Failed to load host profile")?;
        Ok(extractor::extract_host_profile(&html, url))
    }

    /// Reload the profile (enrichment navigated away) and collect its room ids
    async fn list_room_ids(&self, url: &str) -> Result<Vec<String>> {
        let html = self
            .pages
            .fetch(url, self.config.profile_timeout, self.config.profile_delay)
            .await?;
        let ids = extractor::extract_room_ids(&html);
        debug!("Found {} rooms on {}", ids.len(), url);
        Ok(ids)
    }

    async fn build_lead(
        &self,
        host: &HostProfile,
        business_type: BusinessType,
        business: &BusinessInfo,
        room_id: &str,
    ) -> Result<PropertyLead> {
        let room_url = self.config.room_url(room_id);
        let html = self
            .pages
            .fetch(&room_url, self.config.room_timeout, self.config.room_delay)
            .await?;

        let coordinates = extractor::extract_coordinates(&html);
        let coordinates = coordinates
            .as_ref()
            .map(|(lat, lng)| (lat.as_str(), lng.as_str()));

        let property_address =
            resolve_address(self.geocoder, coordinates, &self.config.address_sentinel).await;
        debug!("Room {} resolved to '{}'", room_id, property_address);

        Ok(PropertyLead {
            host_name: host.host_name.clone(),
            city: host.city.clone(),
            profile_url: host.profile_url.clone(),
            property_address,
            property_link: room_url,
            maps_link: maps_link(coordinates),
            business_type,
            business_url: business.business_url.clone(),
            linkedin: business.linkedin.clone(),
            facebook: business.facebook.clone(),
            llc_info: business.llc_info.clone(),
            email: business.email.clone(),
            phone: business.phone.clone(),
            bio_excerpt: host.bio.chars().take(self.config.bio_excerpt_chars).collect(),
            scraped_at: Utc::now(),
        })
    }
}
