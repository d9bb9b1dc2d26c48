pub mod chrome;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod section;

use crate::auth::use_session;
use crate::guard::{GuardState, Redirect};
use crate::transition::RouteTransition;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::{active_entry, AppConfig, Role};
use shared_ui::{Navbar, SidebarInset, SidebarProvider, SidebarTrigger};

use dashboard::RoleHome;
use login::Login;
use not_found::NotFound;
use register::Register;
use section::RoleSection;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(AuthLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[nest("/:role")]
        #[layout(RoleLayout)]
            #[route("/")]
            RoleHome { role: Role },
            #[route("/:..segments")]
            RoleSection { role: Role, segments: Vec<String> },
        #[end_layout]
    #[end_nest]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Login => Route::Login {},
            Redirect::Home(role) => Route::RoleHome { role },
        }
    }
}

/// Site root: forward to the user's home or the sign-in screen.
#[component]
fn Home() -> Element {
    let session = use_session();
    let target = GuardState::landing(session.current().as_ref());
    navigator().replace(Route::from(target));
    rsx! {}
}

/// Layout for the sign-in and registration screens. A signed-in user is
/// sent home before either form renders.
#[component]
fn AuthLayout() -> Element {
    let session = use_session();

    if let GuardState::Redirecting(target) = GuardState::for_auth_screens(session.current().as_ref()) {
        tracing::debug!(to = %target.path(), "Already signed in");
        navigator().replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            div { class: "auth-brand",
                span { class: "auth-brand-name", "Workdeck" }
                span { class: "auth-brand-tagline", "One workspace for every side of the work" }
            }
            Outlet::<Route> {}
        }
    }
}

/// Dashboard shell for `/{role}/...`: sidebar, top bar, and the routed page
/// behind a short transition placeholder.
#[component]
fn RoleLayout(role: Role) -> Element {
    let session = use_session();
    let config: AppConfig = use_context();
    let route: Route = use_route();
    let current = session.current();

    if let GuardState::Redirecting(target) = GuardState::for_dashboard(current.as_ref(), role) {
        tracing::debug!(required = %role, to = %target.path(), "Dashboard access redirected");
        navigator().replace(Route::from(target));
        return rsx! {};
    }
    let Some(user) = current else {
        return rsx! {};
    };

    let path = route.to_string();
    let title = active_entry(role, &path)
        .map(|entry| entry.label)
        .unwrap_or(role.display_name());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            chrome::AppSidebar { role, path: path.clone() }

            SidebarInset {
                Navbar {
                    title: title.to_string(),
                    leading: rsx! {
                        SidebarTrigger {
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    },
                    trailing: rsx! {
                        chrome::NotificationPanel { role }
                        chrome::UserMenu { user }
                    },
                }

                div { class: "page-content",
                    RouteTransition {
                        key: "{path}",
                        delay_ms: config.ui.route_transition_ms,
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
