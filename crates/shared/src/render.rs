//! Render items produced by role resolution

use serde::{Deserialize, Serialize};

/// One item of the resolved role list, in display order.
///
/// The rendering collaborator receives these as an ordered sequence and
/// materializes them however it likes; the variants carry everything needed
/// to paint a badge without consulting the catalog again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderItem {
    /// A category header introducing the badges that follow it
    Category { name: String },

    /// A visible role badge with contrast-safe text color
    #[serde(rename_all = "camelCase")]
    RoleBadge {
        name: String,
        /// Badge background as "#RRGGBB", sentinel-substituted where needed
        background_color: String,
        /// Either "#000000" or "#FFFFFF", chosen against the background
        text_color: String,
    },
}

impl RenderItem {
    /// Create a category header item
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category { name: name.into() }
    }

    /// Create a role badge item
    pub fn badge(
        name: impl Into<String>,
        background_color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self::RoleBadge {
            name: name.into(),
            background_color: background_color.into(),
            text_color: text_color.into(),
        }
    }

    /// Whether this item is a category header
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }
}
