use crate::routes::not_found::NotFound;
use crate::routes::profile::ProfilePage;
use dioxus::prelude::*;
use shared_types::{active_entry, profile_section, Role};
use shared_ui::{Card, CardContent, Skeleton};

/// Any page below `/{role}/`. Sections without a navigation entry render
/// the not-found page inside the shell.
#[component]
pub fn RoleSection(role: Role, segments: Vec<String>) -> Element {
    let parts = non_empty(&segments);
    let path = format!("{}/{}", role.home_path(), parts.join("/"));

    let Some(entry) = active_entry(role, &path) else {
        let mut route = vec![role.as_str().to_string()];
        route.extend(segments.iter().cloned());
        return rsx! { NotFound { route } };
    };

    if is_profile_section(role, &parts) {
        return rsx! { ProfilePage {} };
    }

    rsx! {
        div { class: "section-page",
            h2 { class: "section-title", "{entry.label}" }
            Card {
                description: format!("{} for your {} workspace will appear here.", entry.label, role.display_name()),
                CardContent {
                    div { class: "section-placeholder",
                        Skeleton { width: "70%" }
                        Skeleton { width: "90%" }
                        Skeleton { width: "50%" }
                    }
                }
            }
        }
    }
}

/// Path segments with the empty ones left by doubled or trailing slashes
/// removed.
fn non_empty(segments: &[String]) -> Vec<&str> {
    segments
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_profile_section(role: Role, parts: &[&str]) -> bool {
    matches!(parts, [only] if *only == profile_section(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trailing_slash_still_opens_profile() {
        let parts = segments(&["settings", ""]);
        assert_eq!(non_empty(&parts), vec!["settings"]);
        assert!(is_profile_section(Role::Admin, &non_empty(&parts)));
    }

    #[test]
    fn profile_section_depends_on_role() {
        let parts = segments(&["profile"]);
        assert!(is_profile_section(Role::Employee, &non_empty(&parts)));
        assert!(!is_profile_section(Role::Business, &non_empty(&parts)));
    }

    #[test]
    fn nested_path_under_profile_is_not_the_profile_page() {
        let parts = segments(&["settings", "billing"]);
        assert!(!is_profile_section(Role::Admin, &non_empty(&parts)));
    }
}
