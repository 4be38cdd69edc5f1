//! Role badge resolution over the ordered role catalog

use crate::contrast::{effective_badge_color, text_color_for};
use regex::Regex;
use shared::{RenderItem, Result, RoleEntry, UserRoleSet};
use std::collections::HashSet;
use std::sync::OnceLock;

static CATEGORY_SANITIZER: OnceLock<Regex> = OnceLock::new();

/// Resolve the role catalog into the ordered render sequence for one user.
///
/// Single pass in catalog order. Category headers are emitted
/// unconditionally; a role is emitted once, at its first catalog occurrence,
/// when the user holds it. Colors of suppressed roles are never evaluated,
/// so a malformed color only fails the pass when the role would actually
/// render - and then the whole pass fails, no partial output.
pub fn resolve(catalog: &[RoleEntry], user_roles: &UserRoleSet) -> Result<Vec<RenderItem>> {
    let mut items = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in catalog {
        if entry.is_category() {
            items.push(RenderItem::category(sanitize_category_name(
                entry.marker_stripped_name(),
            )));
        } else if user_roles.contains(&entry.role_id) && !seen.contains(entry.role_id.as_str()) {
            seen.insert(&entry.role_id);

            let background = effective_badge_color(&entry.role_color);
            let text = text_color_for(background)?;
            items.push(RenderItem::badge(&entry.role_name, background, text.as_hex()));
        }
    }

    Ok(items)
}

/// Clean a category header: trim, drop everything outside `[A-Za-z0-9 ]`, trim again
fn sanitize_category_name(raw: &str) -> String {
    let pattern = CATEGORY_SANITIZER
        .get_or_init(|| Regex::new("[^A-Za-z0-9 ]").expect("literal character class"));

    pattern.replace_all(raw.trim(), "").trim().to_string()
}
