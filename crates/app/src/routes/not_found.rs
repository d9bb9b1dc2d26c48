use dioxus::prelude::*;

use crate::auth::use_session;
use crate::guard::GuardState;
use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let session = use_session();
    let path = format!("/{}", route.join("/"));
    let home = Route::from(GuardState::landing(session.current().as_ref()));
    let home_label = if session.is_authenticated() {
        "Back to Dashboard"
    } else {
        "Go to Sign In"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: home,
                    class: "not-found-link",
                    "{home_label}"
                }
            }
        }
    }
}
