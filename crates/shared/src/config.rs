//! Configuration types for the staff portal

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Endpoint configuration (portal.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    /// Base URL under which the portal JSON resources live
    pub base_url: String,

    /// Identity endpoint returning the logged-in user's profile
    pub identity_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.scyted.tv/website/staff-portal".to_string(),
            identity_url: "https://discord.com/api/v9/users/@me".to_string(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// URL of the role catalog resource
    pub fn roles_url(&self) -> String {
        format!("{}/roles.json", self.base_url)
    }

    /// URL of the user→roles directory resource
    pub fn user_info_url(&self) -> String {
        format!("{}/user-info.json", self.base_url)
    }

    /// URL of the dashboard button catalog resource
    pub fn buttons_url(&self) -> String {
        format!("{}/dashboard-buttons.json", self.base_url)
    }

    /// URL of the button access map resource
    pub fn button_access_url(&self) -> String {
        format!("{}/button-access.json", self.base_url)
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Logger implementation backed by the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        tracing::error!("{message}");
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}
