//! Browser profile type definitions
//!
//! These structures match the profile service wire format: snake_case leaf
//! fields and capitalized configuration section keys.

use serde::{Deserialize, Serialize};

/// General information about a browser profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralProfileInformation {
    /// Human-readable name for the profile
    pub profile_name: String,
    /// Notes or comments about the profile's purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_notes: Option<String>,
    /// Category or group identifier for organizing profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_group: Option<String>,
    /// ISO 8601 timestamp of the last profile modification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_last_edited: Option<String>,
    /// Operating system to emulate (e.g., Windows, macOS, Linux)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_operating_system: Option<String>,
    /// Browser version to simulate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_browser_version: Option<String>,
    /// Unique identifier assigned by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_id: Option<String>,
}

/// Proxy configuration for a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Proxy {
    /// Type of proxy connection (e.g., HTTP, SOCKS5)
    pub connection_type: String,
    /// URL or IP address with port of the proxy server
    pub proxy_url: String,
    /// Username for proxy authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    /// Password for proxy authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
    /// Proxy rotation setting (1 enabled, 0 disabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_rotating: Option<u8>,
    /// Name of the proxy provider service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_provider: Option<String>,
}

/// Timezone configuration for a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timezone {
    /// Whether to detect the timezone from the exit IP
    pub fill_timezone_based_on_ip: bool,
    /// Standard timezone name (e.g., America/New_York)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_name: Option<String>,
    /// Offset from UTC in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,
}

/// WebRTC configuration for a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebRtc {
    /// Whether to advertise a custom external IP address
    pub set_external_ip: bool,
    /// WebRTC behavior mode (Altered, Masked or Real)
    pub behavior: String,
    /// Public IP address advertised via WebRTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// Local IP address used in WebRTC sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
}

/// Navigator spoofing settings for fingerprint consistency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navigator {
    /// User-Agent string to report
    pub user_agent: String,
    /// Screen resolution in WIDTHxHEIGHT format
    pub screen_resolution: String,
    /// Whether to match the User-Agent with the Chrome core version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator_useragent_match_chrome_core: Option<bool>,
    /// Comma-separated list of language codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Toggle for IP-based language selection
    #[serde(rename = "navigator_languageIPToggle", skip_serializing_if = "Option::is_none")]
    pub navigator_language_ip_toggle: Option<u8>,
    /// Platform to report (e.g., Win32, MacIntel)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Whether to enable the Do Not Track setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_track: Option<bool>,
    /// Number of logical processor cores to simulate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,
    /// Whether to always use the latest User-Agent version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator_useragent_always_latest: Option<bool>,
}

/// Miscellaneous browser settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Other {
    /// Whether to prevent changes during an active session
    pub active_session_lock: bool,
    /// Whether to display the profile name in the UI
    #[serde(rename = "other_ShowProfileName")]
    pub other_show_profile_name: bool,
    /// Whether to allow real media devices
    #[serde(rename = "browser_allowRealMediaDevices")]
    pub browser_allow_real_media_devices: bool,
    /// Whether custom browser arguments are enabled
    pub custom_browser_args_enabled: bool,
    /// Custom browser arguments string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_browser_args_string: Option<String>,
    /// Whether to lock the browser language
    pub browser_language_lock: bool,
    /// Custom browser language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_browser_language: Option<String>,
}

/// A complete browser profile as stored by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserProfile {
    /// General profile information
    pub general_profile_information: GeneralProfileInformation,
    /// Proxy configuration section
    #[serde(rename = "Proxy", skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Proxy>,
    /// Timezone configuration section
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    /// WebRTC configuration section
    #[serde(rename = "WebRTC", skip_serializing_if = "Option::is_none")]
    pub webrtc: Option<WebRtc>,
    /// Navigator configuration section
    #[serde(rename = "Navigator", skip_serializing_if = "Option::is_none")]
    pub navigator: Option<Navigator>,
    /// Additional configuration section
    #[serde(rename = "Other", skip_serializing_if = "Option::is_none")]
    pub other: Option<Other>,
}

/// Profile configuration payload used by create and update requests.
///
/// Unlike [`BrowserProfile`], every section is optional so partial updates
/// only carry changed fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    /// General profile information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_profile_information: Option<GeneralProfileInformation>,
    /// Proxy configuration section
    #[serde(rename = "Proxy", skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Proxy>,
    /// Timezone configuration section
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    /// WebRTC configuration section
    #[serde(rename = "WebRTC", skip_serializing_if = "Option::is_none")]
    pub webrtc: Option<WebRtc>,
    /// Navigator configuration section
    #[serde(rename = "Navigator", skip_serializing_if = "Option::is_none")]
    pub navigator: Option<Navigator>,
    /// Additional configuration section
    #[serde(rename = "Other", skip_serializing_if = "Option::is_none")]
    pub other: Option<Other>,
}

/// Request body for updating a browser profile
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    /// Profile configuration data holding only changed fields
    #[serde(rename = "profileData", skip_serializing_if = "Option::is_none")]
    pub profile_data: Option<ProfileData>,
    /// Identifier of the profile being updated, injected by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_browser_id: Option<String>,
}

/// Response for listing all profiles
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileListResponse {
    /// All profiles known to the service
    pub profiles: Vec<BrowserProfile>,
    /// Operation status
    pub status: String,
}

/// Response for fetching a single profile
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileGetResponse {
    /// Profile details
    #[serde(rename = "profileData")]
    pub profile_data: BrowserProfile,
    /// Operation status
    pub status: String,
}

/// Response for creating a profile
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileResponse {
    /// Identifier assigned to the new profile
    pub profile_browser_id: String,
    /// Operation status
    pub status: String,
}

/// Generic confirmation response carrying a message
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessageResponse {
    /// Human-readable confirmation
    #[serde(default)]
    pub message: Option<String>,
    /// Operation status
    pub status: String,
}

/// Response for querying a profile's run state
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStatusResponse {
    /// Current run state reported by the service
    pub status: String,
}
