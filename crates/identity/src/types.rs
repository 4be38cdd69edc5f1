//! Identity types

use serde::{Deserialize, Serialize};
use shared::UserRoleSet;

/// Profile of the logged-in user, as returned by the identity endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// External user ID; this is the key into the user directory
    pub id: String,

    /// Display name shown in the dashboard header
    pub username: String,

    /// Avatar asset hash, when the user has one set
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Result of resolving a user's role membership
#[derive(Debug, Clone)]
pub struct MembershipResolution {
    pub user_id: String,

    /// The role IDs the user holds; empty when the user is unknown
    pub roles: UserRoleSet,

    /// Whether the user appeared in the directory at all
    pub known_user: bool,

    pub resolved_at: chrono::DateTime<chrono::Utc>,
}
