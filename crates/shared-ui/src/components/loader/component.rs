use dioxus::prelude::*;

/// Pulsing placeholder bar.
#[component]
pub fn Skeleton(#[props(default = "100%".to_string())] width: String) -> Element {
    rsx! {
        div { class: "wd-skeleton", style: "width: {width}" }
    }
}

/// Placeholder shown in the content area while a page is loading.
#[component]
pub fn PageLoader(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "wd-page-loader", role: "status", "aria-live": "polite",
            div { class: "wd-spinner" }
            if let Some(msg) = message {
                p { class: "wd-page-loader-text", "{msg}" }
            }
            Skeleton { width: "60%" }
            Skeleton { width: "85%" }
            Skeleton { width: "40%" }
        }
    }
}
