//! Role catalog types

use serde::{Deserialize, Serialize};

/// Marker character that turns a catalog entry into a category header
pub const CATEGORY_MARKER: char = '•';

/// One entry of the role catalog.
///
/// The catalog is an ordered sequence: order defines category grouping and
/// display order, and must be preserved by every consumer. An entry whose
/// `role_name` starts with [`CATEGORY_MARKER`] is a header for the roles that
/// follow it, not a displayable role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    /// Unique role identifier
    pub role_id: String,

    /// Display name; marker-prefixed names denote category headers
    pub role_name: String,

    /// Badge background color as "#RRGGBB"
    pub role_color: String,
}

impl RoleEntry {
    /// Create a new catalog entry
    pub fn new(
        role_id: impl Into<String>,
        role_name: impl Into<String>,
        role_color: impl Into<String>,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            role_name: role_name.into(),
            role_color: role_color.into(),
        }
    }

    /// Create a category header entry (id and color carry no meaning)
    pub fn category(name: impl Into<String>) -> Self {
        Self::new("", format!("{} {}", CATEGORY_MARKER, name.into()), "")
    }

    /// Whether this entry is a category header rather than a displayable role
    pub fn is_category(&self) -> bool {
        self.role_name.starts_with(CATEGORY_MARKER)
    }

    /// The raw header text with the marker stripped (untrimmed, unsanitized)
    pub fn marker_stripped_name(&self) -> &str {
        self.role_name
            .strip_prefix(CATEGORY_MARKER)
            .unwrap_or(&self.role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_entry_creation() {
        let entry = RoleEntry::new("r1", "Admin", "#FF0000");

        assert_eq!(entry.role_id, "r1");
        assert_eq!(entry.role_name, "Admin");
        assert_eq!(entry.role_color, "#FF0000");
        assert!(!entry.is_category());
    }

    #[test]
    fn test_category_detection() {
        let header = RoleEntry::new("", "• General", "");
        assert!(header.is_category());

        let role = RoleEntry::new("r1", "General Staff", "#00FF00");
        assert!(!role.is_category());
    }

    #[test]
    fn test_category_builder() {
        let header = RoleEntry::category("Moderation");
        assert!(header.is_category());
        assert!(header.role_name.contains("Moderation"));
    }

    #[test]
    fn test_marker_only_in_leading_position() {
        // A marker in the middle of the name does not make a header
        let role = RoleEntry::new("r1", "Night • Shift", "#112233");
        assert!(!role.is_category());
    }

    #[test]
    fn test_marker_stripped_name() {
        let header = RoleEntry::new("", "•  General ", "");
        assert_eq!(header.marker_stripped_name(), "  General ");

        let role = RoleEntry::new("r1", "Admin", "#FF0000");
        assert_eq!(role.marker_stripped_name(), "Admin");
    }

    #[test]
    fn test_serialization_uses_camel_case_keys() {
        let entry = RoleEntry::new("r1", "Admin", "#FF0000");
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"roleId\":\"r1\""));
        assert!(json.contains("\"roleName\":\"Admin\""));
        assert!(json.contains("\"roleColor\":\"#FF0000\""));
    }

    #[test]
    fn test_deserialization_from_wire_shape() {
        let json = r##"{
            "roleId": "851234",
            "roleName": "• Management",
            "roleColor": "#000000"
        }"##;

        let entry: RoleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.role_id, "851234");
        assert!(entry.is_category());
    }

    #[test]
    fn test_catalog_order_round_trip() {
        let catalog = vec![
            RoleEntry::category("General"),
            RoleEntry::new("r1", "Admin", "#FF0000"),
            RoleEntry::new("r2", "Mod", "#00FF00"),
        ];

        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Vec<RoleEntry> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, catalog);
    }
}
