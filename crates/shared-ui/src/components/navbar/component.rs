use dioxus::prelude::*;

/// Top bar of the dashboard shell: a leading slot (sidebar trigger), the
/// page title, and a trailing slot for panels and the user menu.
#[component]
pub fn Navbar(title: String, leading: Element, trailing: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "wd-navbar",
            div { class: "wd-navbar-leading", {leading} }
            h1 { class: "wd-navbar-title", "{title}" }
            div { class: "wd-navbar-spacer" }
            div { class: "wd-navbar-trailing", {trailing} }
        }
    }
}
