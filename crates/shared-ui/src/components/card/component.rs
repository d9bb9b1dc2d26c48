use dioxus::prelude::*;

/// Surface with an optional title/description header.
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "wd-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = title.is_some() || description.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if has_header {
                div { class: "wd-card-header",
                    if let Some(title) = title {
                        h3 { class: "wd-card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "wd-card-description", "{description}" }
                    }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "wd-card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "wd-card-footer", {children} }
    }
}
