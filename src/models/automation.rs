//! Automation launch type definitions

use serde::{Deserialize, Serialize};

/// Request body for launching a remote browser with custom arguments
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPuppeteerRequest {
    /// Identifier of the profile to launch
    #[serde(rename = "profileID")]
    pub profile_id: String,
    /// Custom command-line arguments for the browser
    #[serde(rename = "customArgs")]
    pub custom_args: String,
}

/// Request body for launching a Selenium-driven session with custom arguments
#[derive(Debug, Clone, Serialize)]
pub struct LaunchSeleniumRequest {
    /// Custom command-line arguments for the browser
    #[serde(rename = "customArgs")]
    pub custom_args: String,
}

/// Response for a Puppeteer-style launch: carries the remote-debugging URL
#[derive(Debug, Clone, Deserialize)]
pub struct PuppeteerLaunchResponse {
    /// HTTP URL of the browser's remote-debugging endpoint
    #[serde(rename = "puppeteerUrl", default)]
    pub puppeteer_url: Option<String>,
    /// Operation status
    pub status: String,
}

/// Response for a Selenium-style launch
#[derive(Debug, Clone, Deserialize)]
pub struct SeleniumLaunchResponse {
    /// Operation status
    pub status: String,
}
