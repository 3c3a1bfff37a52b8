//! Cookie operations

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::models::{AddCookieRequest, Cookie, CookiesResponse, DeleteCookiesResponse, ProfileId};
use crate::Result;

use super::client::ProfileServiceClient;

/// Payload format accepted by the cookie import route
const COOKIE_FORMAT: &str = "base64json";

/// Cookie operations, scoped to one client
pub struct CookiesApi<'a> {
    client: &'a ProfileServiceClient,
}

impl<'a> CookiesApi<'a> {
    pub(crate) fn new(client: &'a ProfileServiceClient) -> Self {
        Self { client }
    }

    /// Read all cookies stored in a profile.
    ///
    /// Route: `GET /profile/cookie/{profile_id}`
    pub async fn get(&self, profile_id: &ProfileId) -> Result<CookiesResponse> {
        self.client
            .agent()
            .get(&format!("/profile/cookie/{}", profile_id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Import cookies into a profile.
    ///
    /// Route: `POST /profile/addCookie`. The cookie list travels as a
    /// base64-encoded JSON array (`base64json` format).
    pub async fn add(
        &self,
        profile_id: &ProfileId,
        cookies: &[Cookie],
    ) -> Result<AddCookieRequest> {
        let encoded = BASE64.encode(serde_json::to_string(cookies)?);
        let request = AddCookieRequest {
            profile_browser_id: profile_id.clone(),
            format: COOKIE_FORMAT.to_string(),
            cookie: encoded,
        };

        // The service echoes the import payload back as confirmation
        self.client
            .agent()
            .post("/profile/addCookie")
            .header("Content-Type", "application/json")
            .body(&request)
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Delete all cookies from a profile.
    ///
    /// Route: `GET /profile/deleteCookie/{profile_id}`
    pub async fn delete(&self, profile_id: &ProfileId) -> Result<DeleteCookiesResponse> {
        self.client
            .agent()
            .get(&format!("/profile/deleteCookie/{}", profile_id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }
}
