//! MembershipResolver - user directory lookup with an explicit empty default

use crate::types::MembershipResolution;
use serde::{Deserialize, Serialize};
use shared::{Logger, UserRoleSet};
use std::collections::HashMap;
use std::sync::Arc;

/// The external user→roles directory (user-info.json shape):
/// an object mapping user IDs to arrays of role IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory(HashMap<String, Vec<String>>);

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the role IDs a user holds
    pub fn assign(&mut self, user_id: impl Into<String>, role_ids: Vec<String>) {
        self.0.insert(user_id.into(), role_ids);
    }

    /// The raw role-ID list for a user, if the user is present
    pub fn roles_for(&self, user_id: &str) -> Option<&[String]> {
        self.0.get(user_id).map(|roles| roles.as_slice())
    }

    /// Whether the directory knows this user at all
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.0.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, roles)| (id.into(), roles))
                .collect(),
        )
    }
}

/// Resolves an external user ID into the role set the dashboard runs against.
///
/// A user missing from the directory is not an error: they resolve to an
/// empty role set, deliberately, and the dashboard then shows them nothing.
pub struct MembershipResolver {
    directory: UserDirectory,
    logger: Arc<dyn Logger>,
}

impl MembershipResolver {
    /// Create a resolver over a materialized directory
    pub fn new(logger: Arc<dyn Logger>, directory: UserDirectory) -> Self {
        Self { directory, logger }
    }

    /// Resolve a user's role membership
    pub fn resolve(&self, user_id: &str) -> MembershipResolution {
        let known_user = self.directory.contains_user(user_id);

        let roles: UserRoleSet = self
            .directory
            .roles_for(user_id)
            .unwrap_or(&[])
            .iter()
            .cloned()
            .collect();

        if known_user {
            self.logger.info(
                &format!("User '{}' holds {} role(s)", user_id, roles.len()),
                None,
            );
        } else {
            self.logger.info(
                &format!("User '{}' not in directory, resolving to empty role set", user_id),
                None,
            );
        }

        MembershipResolution {
            user_id: user_id.to_string(),
            roles,
            known_user,
            resolved_at: chrono::Utc::now(),
        }
    }
}
