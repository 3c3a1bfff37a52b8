//! Profile CRUD and lifecycle operations

use crate::models::{
    CreateProfileResponse, ProfileData, ProfileGetResponse, ProfileId, ProfileListResponse,
    ProfileStatusResponse, Proxy, StatusMessageResponse, UpdateProfileRequest,
};
use crate::Result;

use super::client::ProfileServiceClient;

/// Profile operations, scoped to one client
pub struct ProfilesApi<'a> {
    client: &'a ProfileServiceClient,
}

impl<'a> ProfilesApi<'a> {
    pub(crate) fn new(client: &'a ProfileServiceClient) -> Self {
        Self { client }
    }

    /// List all browser profiles.
    ///
    /// Route: `GET /profile/all`
    pub async fn list(&self) -> Result<ProfileListResponse> {
        self.client
            .agent()
            .get("/profile/all")
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Fetch a single profile by its identifier.
    ///
    /// Route: `GET /profile/get/{profile_id}`
    pub async fn get(&self, id: &ProfileId) -> Result<ProfileGetResponse> {
        self.client
            .agent()
            .get(&format!("/profile/get/{}", id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Create a new browser profile.
    ///
    /// Route: `POST /profile/add`. The service expects this one route in the
    /// `profileData` envelope form encoding.
    pub async fn add(&self, profile: &ProfileData) -> Result<CreateProfileResponse> {
        self.client
            .agent()
            .post("/profile/add")
            .body(profile)
            .form_envelope()
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Update an existing browser profile with changed fields only.
    ///
    /// Route: `POST /profile/update`
    pub async fn update(
        &self,
        id: &ProfileId,
        profile: ProfileData,
    ) -> Result<StatusMessageResponse> {
        let request = UpdateProfileRequest {
            profile_data: Some(profile),
            profile_browser_id: Some(id.clone()),
        };

        self.client
            .agent()
            .post("/profile/update")
            .header("Content-Type", "application/json")
            .body(&request)
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Update only a profile's proxy configuration
    pub async fn switch_proxy(&self, id: &ProfileId, proxy: Proxy) -> Result<StatusMessageResponse> {
        self.update(
            id,
            ProfileData {
                proxy: Some(proxy),
                ..ProfileData::default()
            },
        )
        .await
    }

    /// Launch a profile in its default launch mode.
    ///
    /// Route: `GET /profile/launch/{profile_id}`
    pub async fn launch(&self, id: &ProfileId) -> Result<StatusMessageResponse> {
        self.launch_route(&format!("/profile/launch/{}", id)).await
    }

    /// Force a profile to launch in local mode.
    ///
    /// Route: `GET /profile/launch/{profile_id}/force/local`
    pub async fn launch_force_local(&self, id: &ProfileId) -> Result<StatusMessageResponse> {
        self.launch_route(&format!("/profile/launch/{}/force/local", id))
            .await
    }

    /// Force a profile to launch in cloud mode.
    ///
    /// Route: `GET /profile/launch/{profile_id}/force/cloud`
    pub async fn launch_force_cloud(&self, id: &ProfileId) -> Result<StatusMessageResponse> {
        self.launch_route(&format!("/profile/launch/{}/force/cloud", id))
            .await
    }

    async fn launch_route(&self, endpoint: &str) -> Result<StatusMessageResponse> {
        self.client
            .agent()
            .get(endpoint)
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Query a profile's current run state.
    ///
    /// Route: `GET /profile/status/{profile_id}`
    pub async fn status(&self, id: &ProfileId) -> Result<ProfileStatusResponse> {
        self.client
            .agent()
            .get(&format!("/profile/status/{}", id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Stop a running profile.
    ///
    /// Route: `GET /profile/stop/{profile_id}`
    pub async fn stop(&self, id: &ProfileId) -> Result<StatusMessageResponse> {
        self.client
            .agent()
            .get(&format!("/profile/stop/{}", id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }

    /// Delete a profile.
    ///
    /// Route: `GET /profile/delete/{profile_id}`
    pub async fn delete(&self, id: &ProfileId) -> Result<StatusMessageResponse> {
        self.client
            .agent()
            .get(&format!("/profile/delete/{}", id))
            .header("Content-Type", "application/json")
            .send_as(Some(self.client.timeout()))
            .await
    }
}
