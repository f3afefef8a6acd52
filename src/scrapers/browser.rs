use crate::scrapers::traits::PageSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Headless Chrome session with a single reusable tab
pub struct ChromePageSource {
    // Dropping the browser closes Chrome, so it lives as long as the tab
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromePageSource {
    /// Launch Chrome (no sandbox) and open the tab used for the whole scan
    pub fn launch(user_agent: &str) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .idle_browser_timeout(Duration::from_secs(300))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        let tab = browser.new_tab().context("Failed to open browser tab")?;
        tab.set_user_agent(user_agent, None, None)
            .context("Failed to set user agent")?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

#[async_trait]
impl PageSource for ChromePageSource {
    async fn fetch(&self, url: &str, timeout: Duration, settle: Duration) -> Result<String> {
        debug!("Navigating to {}", url);

        let tab = Arc::clone(&self.tab);
        let target = url.to_string();
        tokio::task::spawn_blocking(move || -> Result<()> {
            tab.set_default_timeout(timeout);
            tab.navigate_to(&target)?;
            tab.wait_until_navigated()?;
            Ok(())
        })
        .await
        .context("Navigation task panicked")?
        .with_context(|| format!("Failed to load {}", url))?;

        // Give client-side rendering time to finish
        tokio::time::sleep(settle).await;

        let tab = Arc::clone(&self.tab);
        let html = tokio::task::spawn_blocking(move || tab.get_content())
            .await
            .context("Content task panicked")?
            .with_context(|| format!("Failed to read HTML from {}", url))?;

        debug!("Downloaded {} bytes of HTML from {}", html.len(), url);
        Ok(html)
    }
}
