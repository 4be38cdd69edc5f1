//! User role membership types

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of role IDs the current user holds.
///
/// Membership test only; catalog order is what drives display order, so the
/// set carries no ordering of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRoleSet(HashSet<String>);

impl UserRoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user holds the given role
    pub fn contains(&self, role_id: &str) -> bool {
        self.0.contains(role_id)
    }

    /// Add a role to the set; returns false if it was already present
    pub fn insert(&mut self, role_id: impl Into<String>) -> bool {
        self.0.insert(role_id.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the held role IDs (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|id| id.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for UserRoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
