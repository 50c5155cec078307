//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::{CheckError, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use navcheck_core::CheckConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Active browser session with Chrome DevTools Protocol
///
/// One session per scenario: every scenario starts from a fresh tab so no
/// scenario can observe side effects of another (theme toggles included).
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: CheckConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(CheckConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: CheckConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| CheckError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| CheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| CheckError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and wait for the load to complete
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab.navigate_to(url).map_err(|e| CheckError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| CheckError::Navigation {
                url: url.to_string(),
                reason: format!("load did not complete: {}", e),
            })?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| CheckError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Evaluate a probe expression that returns a JSON string and hand the
    /// raw string back for parsing
    pub async fn evaluate_probe(&self, script: &str) -> Result<String> {
        let value = self.evaluate(script).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| CheckError::Browser(format!("Probe returned non-string: {}", value)))
    }

    /// Get the current page title
    pub async fn title(&self) -> Result<String> {
        let result = self.evaluate("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Session configuration (timeouts, poll interval)
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
