use crate::models::Role;
use serde::Serialize;

/// Icon reference for a navigation entry. The UI layer maps each variant to
/// a concrete icon component.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Building,
    Chart,
    Settings,
    Folder,
    Handshake,
    CreditCard,
    FileText,
    Wallet,
    User,
    CheckSquare,
    Calendar,
    Team,
}

/// A single sidebar link.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavigationEntry {
    pub path: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
}

const fn entry(path: &'static str, icon: NavIcon, label: &'static str) -> NavigationEntry {
    NavigationEntry { path, icon, label }
}

const ADMIN: &[NavigationEntry] = &[
    entry("/admin", NavIcon::Dashboard, "Overview"),
    entry("/admin/users", NavIcon::Users, "Users"),
    entry("/admin/businesses", NavIcon::Building, "Businesses"),
    entry("/admin/reports", NavIcon::Chart, "Reports"),
    entry("/admin/settings", NavIcon::Settings, "Settings"),
];

const BUSINESS: &[NavigationEntry] = &[
    entry("/business", NavIcon::Dashboard, "Overview"),
    entry("/business/projects", NavIcon::Folder, "Projects"),
    entry("/business/freelancers", NavIcon::Handshake, "Freelancers"),
    entry("/business/payments", NavIcon::CreditCard, "Payments"),
    entry("/business/settings", NavIcon::Settings, "Settings"),
];

const FREELANCER: &[NavigationEntry] = &[
    entry("/freelancer", NavIcon::Dashboard, "Overview"),
    entry("/freelancer/projects", NavIcon::Folder, "Projects"),
    entry("/freelancer/proposals", NavIcon::FileText, "Proposals"),
    entry("/freelancer/earnings", NavIcon::Wallet, "Earnings"),
    entry("/freelancer/profile", NavIcon::User, "Profile"),
];

const EMPLOYEE: &[NavigationEntry] = &[
    entry("/employee", NavIcon::Dashboard, "Overview"),
    entry("/employee/tasks", NavIcon::CheckSquare, "Tasks"),
    entry("/employee/schedule", NavIcon::Calendar, "Schedule"),
    entry("/employee/team", NavIcon::Team, "Team"),
    entry("/employee/profile", NavIcon::User, "Profile"),
];

/// Ordered sidebar entries for a role.
pub fn entries_for(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Admin => ADMIN,
        Role::Business => BUSINESS,
        Role::Freelancer => FREELANCER,
        Role::Employee => EMPLOYEE,
    }
}

/// Entries for a raw role key. Unknown keys get an empty list.
pub fn entries_for_key(key: &str) -> &'static [NavigationEntry] {
    key.parse::<Role>().map(entries_for).unwrap_or(&[])
}

/// Section path segment of the entry that edits the current profile.
pub fn profile_section(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Business => "settings",
        Role::Freelancer | Role::Employee => "profile",
    }
}

impl NavigationEntry {
    /// Whether this entry should be highlighted for `current_path`.
    ///
    /// A role root (`/admin`) only matches exactly. Deeper entries also
    /// match descendants on a segment boundary.
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = normalize(current_path);
        if current == self.path {
            return true;
        }
        if is_role_root(self.path) {
            return false;
        }
        current
            .strip_prefix(self.path)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// The entry that owns `current_path`, if any.
pub fn active_entry(role: Role, current_path: &str) -> Option<&'static NavigationEntry> {
    entries_for(role).iter().find(|e| e.is_active(current_path))
}

fn is_role_root(path: &str) -> bool {
    path.len() > 1 && !path[1..].contains('/')
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_role_has_entries_under_its_root() {
        for role in Role::ALL {
            let entries = entries_for(role);
            assert!(!entries.is_empty(), "{role} has no entries");
            let root = role.home_path();
            for e in entries {
                assert!(e.path.starts_with(&root), "{} not under {root}", e.path);
            }
            assert_eq!(entries[0].path, root);
        }
    }

    #[test]
    fn order_is_fixed() {
        let labels: Vec<_> = entries_for(Role::Freelancer).iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Projects", "Proposals", "Earnings", "Profile"]
        );
        assert_eq!(entries_for(Role::Freelancer), entries_for(Role::Freelancer));
    }

    #[test]
    fn unknown_key_yields_empty_list() {
        assert!(entries_for_key("manager").is_empty());
        assert!(entries_for_key("").is_empty());
        assert_eq!(entries_for_key("employee"), entries_for(Role::Employee));
    }

    #[test]
    fn profile_section_is_a_nav_entry() {
        for role in Role::ALL {
            let path = format!("{}/{}", role.home_path(), profile_section(role));
            assert!(entries_for(role).iter().any(|e| e.path == path));
        }
    }

    #[test]
    fn root_entry_matches_exactly() {
        let home = &entries_for(Role::Admin)[0];
        assert!(home.is_active("/admin"));
        assert!(home.is_active("/admin/"));
        assert!(!home.is_active("/admin/users"));
    }

    #[test]
    fn deeper_entries_match_by_prefix() {
        let users = &entries_for(Role::Admin)[1];
        assert!(users.is_active("/admin/users"));
        assert!(users.is_active("/admin/users/42"));
        assert!(users.is_active("/admin/users?page=2"));
        assert!(!users.is_active("/admin/usersx"));
        assert!(!users.is_active("/admin"));
    }

    #[test]
    fn active_entry_resolves_nested_paths() {
        let entry = active_entry(Role::Business, "/business/projects/alpha").unwrap();
        assert_eq!(entry.label, "Projects");
        assert!(active_entry(Role::Business, "/business/unknown").is_none());
    }
}
