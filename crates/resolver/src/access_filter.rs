//! Button visibility filtering

use shared::{AccessMap, ButtonEntry, UserRoleSet};
use std::collections::HashSet;

/// Filter the button catalog down to the buttons the user may see.
///
/// Visibility comes solely from the access map: a button is visible iff at
/// least one of its granted role IDs is held by the user. The result keeps
/// the catalog's order; buttons without an access entry fail closed.
pub fn filter(
    buttons: &[ButtonEntry],
    access: &AccessMap,
    user_roles: &UserRoleSet,
) -> Vec<ButtonEntry> {
    let visible: HashSet<&str> = access
        .button_ids()
        .filter(|button_id| access.allows(button_id, user_roles))
        .collect();

    buttons
        .iter()
        .filter(|button| visible.contains(button.button_id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(ids: &[&str]) -> UserRoleSet {
        ids.iter().copied().collect()
    }

    fn grants(pairs: &[(&str, &[&str])]) -> AccessMap {
        pairs
            .iter()
            .map(|(id, roles)| (*id, roles.iter().map(|r| r.to_string()).collect()))
            .collect()
    }

    // ============== Visibility Tests ==============

    #[test]
    fn test_only_granted_buttons_kept() {
        let buttons = vec![
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("b2", "/b", "B"),
        ];
        let access = grants(&[("b1", &["r1"]), ("b2", &["r2"])]);

        let kept = filter(&buttons, &access, &user(&["r2"]));
        assert_eq!(kept, vec![ButtonEntry::new("b2", "/b", "B")]);
    }

    #[test]
    fn test_empty_role_set_sees_nothing() {
        let buttons = vec![
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("b2", "/b", "B"),
        ];
        let access = grants(&[("b1", &["r1"]), ("b2", &["r2"])]);

        assert!(filter(&buttons, &access, &user(&[])).is_empty());
    }

    #[test]
    fn test_any_match_is_sufficient() {
        let buttons = vec![ButtonEntry::new("b1", "/a", "A")];
        let access = grants(&[("b1", &["r1", "r2", "r3"])]);

        // Holding just one of the three granted roles shows the button
        let kept = filter(&buttons, &access, &user(&["r3"]));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_all_roles_not_required() {
        let buttons = vec![ButtonEntry::new("b1", "/a", "A")];
        let access = grants(&[("b1", &["r1", "r2"])]);

        // r1 alone is enough even though r2 is also granted
        assert_eq!(filter(&buttons, &access, &user(&["r1"])).len(), 1);
    }

    // ============== Fail-Closed Tests ==============

    #[test]
    fn test_button_absent_from_map_is_hidden() {
        let buttons = vec![
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("unmapped", "/x", "X"),
        ];
        let access = grants(&[("b1", &["r1"])]);

        let kept = filter(&buttons, &access, &user(&["r1"]));
        assert_eq!(kept, vec![ButtonEntry::new("b1", "/a", "A")]);
    }

    #[test]
    fn test_empty_grant_list_hides_button() {
        let buttons = vec![ButtonEntry::new("b1", "/a", "A")];
        let access = grants(&[("b1", &[])]);

        assert!(filter(&buttons, &access, &user(&["r1"])).is_empty());
    }

    #[test]
    fn test_grants_for_uncataloged_buttons_are_inert() {
        // An access entry without a matching catalog button adds nothing
        let buttons = vec![ButtonEntry::new("b1", "/a", "A")];
        let access = grants(&[("b1", &["r1"]), ("ghost", &["r1"])]);

        let kept = filter(&buttons, &access, &user(&["r1"]));
        assert_eq!(kept.len(), 1);
    }

    // ============== Ordering Tests ==============

    #[test]
    fn test_catalog_order_preserved() {
        let buttons = vec![
            ButtonEntry::new("b3", "/c", "C"),
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("b2", "/b", "B"),
        ];
        let access = grants(&[("b1", &["r1"]), ("b2", &["r1"]), ("b3", &["r1"])]);

        let kept = filter(&buttons, &access, &user(&["r1"]));
        let ids: Vec<&str> = kept.iter().map(|b| b.button_id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b1", "b2"]);
    }

    #[test]
    fn test_duplicate_catalog_entries_each_kept() {
        // The catalog, not this filter, owns de-duplication of buttons
        let buttons = vec![
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("b1", "/a", "A"),
        ];
        let access = grants(&[("b1", &["r1"])]);

        assert_eq!(filter(&buttons, &access, &user(&["r1"])).len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let access = grants(&[("b1", &["r1"])]);
        assert!(filter(&[], &access, &user(&["r1"])).is_empty());
    }

    #[test]
    fn test_idempotence() {
        let buttons = vec![
            ButtonEntry::new("b1", "/a", "A"),
            ButtonEntry::new("b2", "/b", "B"),
        ];
        let access = grants(&[("b1", &["r1"])]);
        let held = user(&["r1"]);

        assert_eq!(
            filter(&buttons, &access, &held),
            filter(&buttons, &access, &held)
        );
    }

    #[test]
    fn test_inputs_left_untouched() {
        let buttons = vec![ButtonEntry::new("b1", "/a", "A")];
        let access = grants(&[("b1", &["r1"])]);

        let _ = filter(&buttons, &access, &user(&["r1"]));

        // Filtering clones; the catalog is immutable input
        assert_eq!(buttons[0], ButtonEntry::new("b1", "/a", "A"));
        assert_eq!(access.grants_for("b1").map(|g| g.len()), Some(1));
    }
}
