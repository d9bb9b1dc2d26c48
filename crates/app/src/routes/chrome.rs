//! Dashboard chrome: the role sidebar, the notification panel and the user
//! menu in the top bar.

use crate::auth::use_session;
use crate::preferences;
use crate::routes::Route;
use crate::DeviceStorage;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdBriefcase, LdBuilding, LdCalendar, LdClipboardList, LdCreditCard,
    LdFileText, LdFolder, LdLayoutDashboard, LdLogOut, LdSettings, LdUser, LdUserCheck, LdUsers,
    LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::{
    entries_for, mock_notifications, profile_section, time_ago, unread_count, AppConfig, NavIcon,
    Role, Session,
};
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{
    Badge, BadgeVariant, CountBadge, Disclosure, DisclosureItem, DisclosureSeparator, Sidebar,
    SidebarContent, SidebarFooter, SidebarHeader, SidebarMenu, SidebarMenuItem, SidebarSeparator,
    ToggleSwitch, UserAvatar,
};

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Folder => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Handshake => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
        NavIcon::User => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        NavIcon::CheckSquare => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Team => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
    }
}

/// Role navigation with the dark-mode switch in the footer.
#[component]
pub fn AppSidebar(role: Role, path: String) -> Element {
    let config: AppConfig = use_context();
    let storage: DeviceStorage = use_context();
    let mut theme: ThemeState = use_context();
    let is_dark = theme.mode.read().is_dark();

    rsx! {
        Sidebar {
            SidebarHeader {
                title: "Workdeck",
                subtitle: format!("{} workspace", role.display_name()),
            }

            SidebarSeparator {}

            SidebarContent {
                SidebarMenu { label: "Navigation".to_string(),
                    for entry in entries_for(role) {
                        SidebarMenuItem { key: "{entry.path}", active: entry.is_active(&path),
                            Link { to: entry.path.to_string(), class: "sidebar-link",
                                {nav_icon(entry.icon)}
                                span { class: "sidebar-link-label", "{entry.label}" }
                            }
                        }
                    }
                }
            }

            SidebarSeparator {}

            SidebarFooter {
                ToggleSwitch {
                    label: "Dark mode",
                    checked: is_dark,
                    on_change: move |on: bool| {
                        preferences::set_theme_mode(
                            &mut theme,
                            &storage,
                            &config.ui.dark_mode_key,
                            ThemeMode::from_dark(on),
                        );
                    },
                }
            }
        }
    }
}

/// Bell button with the role's mock notifications.
#[component]
pub fn NotificationPanel(role: Role) -> Element {
    let open = use_signal(|| false);
    let mut items = use_signal(move || mock_notifications(role, Utc::now()));

    let now = Utc::now();
    let list = items.read().clone();
    let unread = unread_count(&list);

    rsx! {
        Disclosure {
            open,
            label: "Notifications",
            align_end: true,
            trigger: rsx! {
                span { class: "notif-trigger",
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    CountBadge { count: unread }
                }
            },

            div { class: "notif-header",
                span { class: "notif-heading", "Notifications" }
                if unread > 0 {
                    button {
                        class: "notif-mark-read",
                        r#type: "button",
                        onclick: move |_| {
                            for item in items.write().iter_mut() {
                                item.read = true;
                            }
                        },
                        "Mark all read"
                    }
                }
            }

            if list.is_empty() {
                p { class: "notif-empty", "You're all caught up." }
            }

            for item in list {
                div {
                    key: "{item.id}",
                    class: "notif-item",
                    "data-read": if item.read { "true" } else { "false" },
                    div { class: "notif-item-title", "{item.title}" }
                    div { class: "notif-item-body", "{item.body}" }
                    div { class: "notif-item-time", {time_ago(item.created_at, now)} }
                }
            }
        }
    }
}

/// Avatar button with the account dropdown.
#[component]
pub fn UserMenu(user: Session) -> Element {
    let mut open = use_signal(|| false);
    let mut session = use_session();

    let role = user.role;
    let role_label = role.display_name();
    let initials = user.initials();

    rsx! {
        Disclosure {
            open,
            label: "Account menu",
            align_end: true,
            trigger: rsx! {
                UserAvatar { src: user.avatar.clone(), initials }
            },

            div { class: "user-menu-header",
                span { class: "user-menu-name", "{user.name}" }
                span { class: "user-menu-email", "{user.email}" }
                Badge { variant: BadgeVariant::Secondary, "{role_label}" }
            }

            DisclosureSeparator {}

            DisclosureItem {
                on_select: move |_| {
                    open.set(false);
                    navigator().push(Route::RoleSection {
                        role,
                        segments: vec![profile_section(role).to_string()],
                    });
                },
                Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                "Profile"
            }

            DisclosureSeparator {}

            DisclosureItem {
                destructive: true,
                on_select: move |_| {
                    open.set(false);
                    session.logout();
                },
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                "Sign out"
            }
        }
    }
}
