//! Cookie type definitions
//!
//! The profile service imports cookies in the `base64json` format: a
//! base64-encoded JSON array of cookie objects.

use serde::{Deserialize, Serialize};

/// A single cookie as stored in a browser profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie applies to
    pub domain: String,
    /// Path the cookie applies to
    #[serde(default)]
    pub path: String,
    /// Whether the cookie is only sent over HTTPS
    #[serde(default)]
    pub secure: bool,
    /// Whether the cookie is inaccessible to scripts
    #[serde(rename = "httpOnly", default)]
    pub http_only: bool,
    /// Whether the cookie is scoped to the exact host
    #[serde(rename = "hostOnly", default)]
    pub host_only: bool,
    /// Whether the cookie expires with the session
    #[serde(default)]
    pub session: bool,
    /// SameSite policy
    #[serde(rename = "sameSite", default)]
    pub same_site: String,
    /// Expiration as a Unix timestamp
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<f64>,
}

/// Request body for importing cookies into a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCookieRequest {
    /// Identifier of the target profile
    pub profile_browser_id: String,
    /// Payload format, always `base64json`
    pub format: String,
    /// Base64-encoded JSON array of [`Cookie`] objects
    pub cookie: String,
}

/// Response for reading a profile's cookies
#[derive(Debug, Clone, Deserialize)]
pub struct CookiesResponse {
    /// Cookies stored in the profile
    #[serde(rename = "CookieData", default)]
    pub cookie_data: Vec<Cookie>,
    /// Human-readable confirmation
    #[serde(default)]
    pub message: Option<String>,
    /// Operation status
    pub status: String,
}

/// Response for deleting a profile's cookies
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCookiesResponse {
    /// Human-readable confirmation
    #[serde(default)]
    pub message: Option<String>,
    /// Operation status
    pub status: String,
}
