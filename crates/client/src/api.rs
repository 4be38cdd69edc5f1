//! PortalApi - fetching the dashboard's JSON resources

use crate::http::{build_client, HttpConfig};
use async_trait::async_trait;
use identity::{UserDirectory, UserProfile};
use shared::{AccessMap, ButtonEntry, PortalConfig, PortalError, Result, RoleEntry};

/// The five JSON resources the dashboard consumes.
///
/// Bodies deserialize straight into the typed model, so a malformed shape
/// becomes a typed error here at the boundary instead of reaching the core.
#[async_trait]
pub trait PortalApi {
    /// The logged-in user's profile, via the bearer-authorized identity endpoint
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile>;

    /// The user→roles directory
    async fn fetch_user_directory(&self) -> Result<UserDirectory>;

    /// The ordered role catalog
    async fn fetch_role_catalog(&self) -> Result<Vec<RoleEntry>>;

    /// The ordered dashboard button catalog
    async fn fetch_button_catalog(&self) -> Result<Vec<ButtonEntry>>;

    /// The button access map
    async fn fetch_access_map(&self) -> Result<AccessMap>;
}

/// Everything the dashboard needs, fully materialized
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub directory: UserDirectory,
    pub roles: Vec<RoleEntry>,
    pub buttons: Vec<ButtonEntry>,
    pub access: AccessMap,
}

/// HTTP implementation of [`PortalApi`] over the configured endpoints
pub struct PortalClient {
    http: reqwest::Client,
    config: PortalConfig,
}

impl PortalClient {
    /// Create a client with default HTTP settings
    pub fn new(config: PortalConfig) -> Result<Self> {
        let http = build_client(&HttpConfig::default())?;
        Ok(Self { http, config })
    }

    /// Create a client over an existing reqwest client
    pub fn with_http(http: reqwest::Client, config: PortalConfig) -> Self {
        Self { http, config }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PortalError::Fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Fetch(format!("GET {url} returned {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PortalError::Fetch(format!("decoding {url}: {e}")))
    }

    /// Fetch all five resources.
    ///
    /// The fetches are independent, so they go out concurrently and the
    /// resolution core only runs once every input has arrived. Any failure
    /// fails the whole pass; there is no partial dashboard.
    pub async fn fetch_dashboard_data(&self, access_token: &str) -> Result<DashboardData> {
        let (profile, directory, roles, buttons, access) = tokio::try_join!(
            self.fetch_profile(access_token),
            self.fetch_user_directory(),
            self.fetch_role_catalog(),
            self.fetch_button_catalog(),
            self.fetch_access_map(),
        )?;

        Ok(DashboardData {
            profile,
            directory,
            roles,
            buttons,
            access,
        })
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        let url = &self.config.identity_url;
        tracing::debug!("GET {url} (authorized)");

        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| PortalError::Fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::Fetch(format!(
                "identity endpoint returned {status}"
            )));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| PortalError::Fetch(format!("decoding profile: {e}")))
    }

    async fn fetch_user_directory(&self) -> Result<UserDirectory> {
        self.get_json(&self.config.user_info_url()).await
    }

    async fn fetch_role_catalog(&self) -> Result<Vec<RoleEntry>> {
        self.get_json(&self.config.roles_url()).await
    }

    async fn fetch_button_catalog(&self) -> Result<Vec<ButtonEntry>> {
        self.get_json(&self.config.buttons_url()).await
    }

    async fn fetch_access_map(&self) -> Result<AccessMap> {
        self.get_json(&self.config.button_access_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        assert!(PortalClient::new(PortalConfig::default()).is_ok());
    }

    #[test]
    fn test_dashboard_data_is_cloneable() {
        let data = DashboardData {
            profile: UserProfile {
                id: "u1".to_string(),
                username: "kestrel".to_string(),
                avatar: None,
            },
            directory: UserDirectory::new(),
            roles: Vec::new(),
            buttons: Vec::new(),
            access: AccessMap::new(),
        };

        let copy = data.clone();
        assert_eq!(copy.profile.id, "u1");
    }
}
