//! Managed browser session lifecycle

use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::api::ProfileServiceClient;
use crate::cdp;
use crate::config;
use crate::models::{GeneralProfileInformation, ProfileData, ProfileId};
use crate::{Error, Result};

/// Configuration for launching a managed browser
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Profile to launch; filled in automatically by
    /// [`CloakBrowser::quickstart`]
    pub profile_id: Option<ProfileId>,
    /// Run the browser without a GUI
    pub headless: bool,
    /// Custom command-line arguments for the browser
    pub custom_args: String,
    /// Port the local profile service listens on
    pub port: u16,
    /// Overall budget for launch plus CDP readiness, in milliseconds
    pub launch_timeout_ms: u64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            profile_id: None,
            headless: false,
            custom_args: String::new(),
            port: 35000,
            launch_timeout_ms: config::DEFAULT_LAUNCH_TIMEOUT_MS,
        }
    }
}

/// Launches managed, antidetect-configured browser instances.
///
/// A successful [`start`](Self::start) hands back a [`BrowserHandle`] whose
/// remote-debugging URL has already passed the CDP readiness poll, so an
/// automation library can connect to it immediately.
pub struct CloakBrowser {
    client: ProfileServiceClient,
    config: LaunchConfig,
}

impl CloakBrowser {
    /// Create a new browser manager talking to the local profile service
    pub fn new(config: LaunchConfig) -> Self {
        let base_url = format!("http://localhost:{}", config.port);
        Self {
            client: ProfileServiceClient::new(Some(&base_url)),
            config,
        }
    }

    /// Create a browser manager with an explicit service client
    pub fn with_client(client: ProfileServiceClient, config: LaunchConfig) -> Self {
        Self { client, config }
    }

    /// Create a fresh profile and launch a browser for it.
    ///
    /// The profile gets a generated name unless one is given.
    pub async fn quickstart(&mut self, name: Option<&str>) -> Result<BrowserHandle> {
        let profile_name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("QProfile_{}", Utc::now().timestamp_millis()));

        let profile = ProfileData {
            general_profile_information: Some(GeneralProfileInformation {
                profile_name,
                profile_notes: Some("Created via quickstart".to_string()),
                ..GeneralProfileInformation::default()
            }),
            ..ProfileData::default()
        };

        let created = self.client.profiles().add(&profile).await?;
        info!("Created new profile: {}", created.profile_browser_id);

        self.config.profile_id = Some(created.profile_browser_id);
        self.start().await
    }

    /// Launch a browser for the configured profile.
    ///
    /// Returns once the browser's CDP endpoint answers the readiness poll;
    /// fails with [`Error::MissingConnectUrl`] when the launch response
    /// carries no remote-debugging URL.
    pub async fn start(&self) -> Result<BrowserHandle> {
        let profile_id = self
            .config
            .profile_id
            .clone()
            .ok_or_else(|| Error::configuration("No profile id configured for launch"))?;

        let custom_args = if self.config.headless {
            "--headless=new".to_string()
        } else {
            self.config.custom_args.clone()
        };

        let response = self
            .client
            .automation()
            .launch_puppeteer_custom(&profile_id, &custom_args)
            .await?;

        let debugger_url = response.puppeteer_url.ok_or(Error::MissingConnectUrl)?;

        info!("Browser launching, waiting for {} to become ready", debugger_url);
        cdp::wait_for_ready(
            &debugger_url,
            Duration::from_millis(self.config.launch_timeout_ms),
            cdp::DEFAULT_INITIAL_INTERVAL,
        )
        .await?;

        info!("Browser for profile {} is ready", profile_id);

        Ok(BrowserHandle {
            client: self.client.clone(),
            profile_id,
            debugger_url,
            closed: false,
        })
    }
}

/// Handle to a running managed browser.
///
/// Exposes the ready remote-debugging URL and owns the shutdown of its
/// profile. Dropping the handle does not stop the browser; call
/// [`close`](Self::close) explicitly.
pub struct BrowserHandle {
    client: ProfileServiceClient,
    profile_id: ProfileId,
    debugger_url: String,
    closed: bool,
}

impl BrowserHandle {
    /// Remote-debugging URL an automation library connects to
    pub fn debugger_url(&self) -> &str {
        &self.debugger_url
    }

    /// Profile this browser was launched from
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Whether the handle has already been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Stop the profile's browser instance. Idempotent: closing an already
    /// closed handle is a no-op.
    pub async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.client.profiles().stop(&self.profile_id).await?;
        self.closed = true;

        info!("Browser for profile {} stopped", self.profile_id);
        Ok(())
    }
}

/// Close several browser handles, keeping going past individual failures.
///
/// Returns the first error encountered after all handles were attempted.
pub async fn close_all(handles: &mut [BrowserHandle]) -> Result<()> {
    let mut first_error = None;

    for handle in handles.iter_mut() {
        if let Err(err) = handle.close().await {
            warn!("Failed to close browser for profile {}: {}", handle.profile_id, err);
            if first_error.is_none() {
                first_error = Some(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
