//! Profile service client entry point

use std::time::Duration;

use crate::config::{self, Config};
use crate::http::{init_agent, ApiAgent};

use super::automation::AutomationApi;
use super::cookies::CookiesApi;
use super::profiles::ProfilesApi;

/// Service name reported in the `X-Origin-Service` tracing header
const SERVICE_NAME: &str = "cloakbrowse-client";

/// Client for the remote browser-profile management service.
///
/// Resource operations are grouped behind [`profiles`](Self::profiles),
/// [`cookies`](Self::cookies) and [`automation`](Self::automation) handles,
/// all thin pass-throughs over the request layer.
#[derive(Debug, Clone)]
pub struct ProfileServiceClient {
    agent: ApiAgent,
    timeout: Duration,
}

impl ProfileServiceClient {
    /// Create a new client.
    ///
    /// The base URL falls back to the `CLOAK_BASE_URL` environment variable
    /// and then to the built-in default when not given.
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            agent: init_agent(SERVICE_NAME, base_url),
            timeout: Duration::from_millis(config::DEFAULT_TIMEOUT_MS),
        }
    }

    /// Create a new client from a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        Self {
            agent: init_agent(SERVICE_NAME, Some(&config.base_url)),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Profile-related operations
    pub fn profiles(&self) -> ProfilesApi<'_> {
        ProfilesApi::new(self)
    }

    /// Cookie-related operations
    pub fn cookies(&self) -> CookiesApi<'_> {
        CookiesApi::new(self)
    }

    /// Automation-related operations
    pub fn automation(&self) -> AutomationApi<'_> {
        AutomationApi::new(self)
    }

    pub(crate) fn agent(&self) -> &ApiAgent {
        &self.agent
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}
