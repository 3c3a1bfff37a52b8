//! Automation launch operations
//!
//! These endpoints start a managed browser for a profile and, for the
//! Puppeteer-style launch, return the remote-debugging URL an automation
//! library connects to. Attaching to that URL is the caller's concern.

use crate::models::{
    LaunchPuppeteerRequest, LaunchSeleniumRequest, ProfileId, PuppeteerLaunchResponse,
    SeleniumLaunchResponse,
};
use crate::Result;

use super::client::ProfileServiceClient;

/// Automation operations, scoped to one client
pub struct AutomationApi<'a> {
    client: &'a ProfileServiceClient,
}

impl<'a> AutomationApi<'a> {
    pub(crate) fn new(client: &'a ProfileServiceClient) -> Self {
        Self { client }
    }

    /// Launch a profile for Puppeteer-style automation.
    ///
    /// Route: `GET /automation/launch/puppeteer/{profile_id}`
    pub async fn launch_puppeteer(&self, profile_id: &ProfileId) -> Result<PuppeteerLaunchResponse> {
        self.client
            .agent()
            .get(&format!("/automation/launch/puppeteer/{}", profile_id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Launch a profile for Puppeteer-style automation with custom browser
    /// arguments.
    ///
    /// Route: `POST /automation/launch/puppeteer`
    pub async fn launch_puppeteer_custom(
        &self,
        profile_id: &ProfileId,
        custom_args: &str,
    ) -> Result<PuppeteerLaunchResponse> {
        let request = LaunchPuppeteerRequest {
            profile_id: profile_id.clone(),
            custom_args: custom_args.to_string(),
        };

        self.client
            .agent()
            .post("/automation/launch/puppeteer")
            .header("Content-Type", "application/json")
            .body(&request)
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Launch a profile for Selenium-style automation.
    ///
    /// Route: `GET /automation/launch/python/{profile_id}`
    pub async fn launch_selenium(&self, profile_id: &ProfileId) -> Result<SeleniumLaunchResponse> {
        self.client
            .agent()
            .get(&format!("/automation/launch/python/{}", profile_id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Launch a profile for Selenium-style automation with custom browser
    /// arguments.
    ///
    /// Route: `POST /automation/launch/python/{profile_id}/`
    pub async fn launch_selenium_custom(
        &self,
        profile_id: &ProfileId,
        custom_args: &str,
    ) -> Result<SeleniumLaunchResponse> {
        let request = LaunchSeleniumRequest {
            custom_args: custom_args.to_string(),
        };

        self.client
            .agent()
            .post(&format!("/automation/launch/python/{}/", profile_id))
            .header("Content-Type", "application/json")
            .body(&request)
            .send_as(Some(self.client.timeout()))
            .await
    }
}
