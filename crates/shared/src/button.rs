//! Dashboard button types

use crate::user::UserRoleSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the dashboard button catalog, ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEntry {
    /// Unique button identifier; the wire key is spelled "buttonID"
    #[serde(rename = "buttonID")]
    pub button_id: String,

    /// Target the button links to
    pub link: String,

    /// Label shown on the button
    pub text: String,
}

impl ButtonEntry {
    /// Create a new button entry
    pub fn new(
        button_id: impl Into<String>,
        link: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            button_id: button_id.into(),
            link: link.into(),
            text: text.into(),
        }
    }
}

/// Mapping from button ID to the role IDs granted visibility of that button.
///
/// A button absent from the map is never visible (fail-closed), and an empty
/// grant list makes a button invisible to everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessMap(HashMap<String, Vec<String>>);

impl AccessMap {
    /// Create an empty access map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the role IDs that may see a button
    pub fn grant(&mut self, button_id: impl Into<String>, role_ids: Vec<String>) {
        self.0.insert(button_id.into(), role_ids);
    }

    /// The granted role IDs for a button, if the button is known at all
    pub fn grants_for(&self, button_id: &str) -> Option<&[String]> {
        self.0.get(button_id).map(|roles| roles.as_slice())
    }

    /// Whether a user holding `user_roles` may see `button_id`.
    ///
    /// Any-match semantics: one granted role held by the user is enough.
    /// Unknown buttons fail closed.
    pub fn allows(&self, button_id: &str, user_roles: &UserRoleSet) -> bool {
        self.0
            .get(button_id)
            .map(|granted| granted.iter().any(|role_id| user_roles.contains(role_id)))
            .unwrap_or(false)
    }

    /// All button IDs present in the map
    pub fn button_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|id| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for AccessMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, roles)| (id.into(), roles))
                .collect(),
        )
    }
}
