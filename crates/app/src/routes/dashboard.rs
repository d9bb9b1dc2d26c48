use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::{entries_for, Role};
use shared_ui::{Badge, BadgeVariant, Card, CardContent};

/// One headline figure on a role's overview page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

const fn stat(label: &'static str, value: &'static str, trend: &'static str) -> Stat {
    Stat { label, value, trend }
}

const ADMIN_STATS: &[Stat] = &[
    stat("Total users", "1,284", "+12% this month"),
    stat("Active businesses", "86", "+4 this week"),
    stat("Open reports", "7", "2 need review"),
];

const BUSINESS_STATS: &[Stat] = &[
    stat("Active projects", "5", "1 due this week"),
    stat("Hired freelancers", "12", "+3 this month"),
    stat("Pending payments", "$4,250", "3 invoices"),
];

const FREELANCER_STATS: &[Stat] = &[
    stat("Active projects", "3", "1 milestone due"),
    stat("Open proposals", "6", "2 shortlisted"),
    stat("Earnings this month", "$2,980", "+18% vs last month"),
];

const EMPLOYEE_STATS: &[Stat] = &[
    stat("Open tasks", "9", "3 due today"),
    stat("Meetings this week", "4", "Next at 10:00"),
    stat("Team members", "14", "2 out of office"),
];

/// Static overview figures for a role.
pub fn overview_stats(role: Role) -> &'static [Stat] {
    match role {
        Role::Admin => ADMIN_STATS,
        Role::Business => BUSINESS_STATS,
        Role::Freelancer => FREELANCER_STATS,
        Role::Employee => EMPLOYEE_STATS,
    }
}

/// Overview page at `/{role}`.
#[component]
pub fn RoleHome(role: Role) -> Element {
    let session = use_session();
    let name = session.current().map(|s| s.name).unwrap_or_default();
    let role_label = role.display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-welcome",
                h2 { class: "dashboard-title", "Welcome back, {name}" }
                Badge { variant: BadgeVariant::Secondary, "{role_label}" }
            }

            div { class: "dashboard-stats",
                for item in overview_stats(role) {
                    Card { key: "{item.label}", class: "dashboard-stat",
                        CardContent {
                            p { class: "dashboard-stat-label", "{item.label}" }
                            p { class: "dashboard-stat-value", "{item.value}" }
                            p { class: "dashboard-stat-trend", "{item.trend}" }
                        }
                    }
                }
            }

            Card {
                title: "Quick links".to_string(),
                description: "Jump to a section of your workspace".to_string(),
                CardContent {
                    ul { class: "dashboard-links",
                        for entry in entries_for(role).iter().skip(1) {
                            li { key: "{entry.path}",
                                Link { to: entry.path.to_string(), "{entry.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_overview_stats() {
        for role in Role::ALL {
            assert!(!overview_stats(role).is_empty());
        }
    }

    #[test]
    fn stat_labels_are_unique_per_role() {
        for role in Role::ALL {
            let stats = overview_stats(role);
            for (i, a) in stats.iter().enumerate() {
                assert!(stats[i + 1..].iter().all(|b| b.label != a.label));
            }
        }
    }
}
